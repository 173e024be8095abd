pub fn set_panic_hook() {
    // panic 時に console.error へメッセージを出す。
    // 複数回呼んでも問題ない。
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
