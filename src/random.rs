use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 戦闘の意思決定に使う乱数源。
/// `next_random` は 0.0 以上 1.0 未満の値を返す。
pub trait RandomSource {
    fn next_random(&mut self) -> f64;
}

/// `rand` の `StdRng` を使う本番用の乱数源。
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// `seed == 0` なら OS のエントロピーで初期化し、それ以外は決定的な系列になる。
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(seed)
        };
        Self { rng }
    }
}

impl RandomSource for StdRandomSource {
    fn next_random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// 与えられた値を順番に返し、末尾に達したら先頭に戻る乱数源。
/// テストで戦闘を再現するために使う。空の場合は常に 0.0 を返す。
#[derive(Debug, Clone)]
pub struct PredefinedRandomSource {
    values: Vec<f64>,
    index: usize,
}

impl PredefinedRandomSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl RandomSource for PredefinedRandomSource {
    fn next_random(&mut self) -> f64 {
        let Some(&value) = self.values.get(self.index) else {
            return 0.0;
        };
        self.index = (self.index + 1) % self.values.len();
        value
    }
}
