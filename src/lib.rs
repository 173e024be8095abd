use log::{error, info};
use wasm_bindgen::prelude::*;

pub mod battle;
pub mod error;
pub mod fleet;
pub mod id;
pub mod interface;
pub mod pool;
pub mod random;
mod utils;

pub use crate::battle::{
    Battle, BattleConfig, BattleEngine, BattleOutcome, BattleState, BattleView, DecisionSource,
    DestructionCurve, Shot, ShotDecision, Side, Termination,
};
pub use crate::error::BattleError;
pub use crate::fleet::{Fleet, Ship, ShipTech};
pub use crate::interface::{run_battle, BattleRequest};

static INIT: std::sync::Once = std::sync::Once::new();

fn initialize() {
    INIT.call_once(|| {
        utils::set_panic_hook();
        wasm_logger::init(wasm_logger::Config::default()); // ロガー初期化
        info!("Logger initialized");
    });
}

/// JS側から戦闘を1回実行する。
/// `config` は `undefined` / `null` なら既定値。入力が読めない場合や戦闘が失敗した場合は `null` を返す。
#[wasm_bindgen]
pub fn execute_battle(side_a: JsValue, side_b: JsValue, seed: u32, config: JsValue) -> JsValue {
    initialize();

    let side_a = match serde_wasm_bindgen::from_value::<Fleet>(side_a) {
        Ok(f) => f,
        Err(err) => {
            error!("Failed to parse side A fleet: {:?}", err);
            return JsValue::NULL;
        }
    };
    let side_b = match serde_wasm_bindgen::from_value::<Fleet>(side_b) {
        Ok(f) => f,
        Err(err) => {
            error!("Failed to parse side B fleet: {:?}", err);
            return JsValue::NULL;
        }
    };
    let config = match serde_wasm_bindgen::from_value::<Option<BattleConfig>>(config) {
        Ok(c) => c,
        Err(err) => {
            error!("Failed to parse battle config: {:?}", err);
            return JsValue::NULL;
        }
    };

    let request = BattleRequest {
        side_a,
        side_b,
        seed: u64::from(seed),
        config,
    };
    let battle = match run_battle(&request) {
        Ok(b) => b,
        Err(err) => {
            error!("Battle failed: {err}");
            return JsValue::NULL;
        }
    };

    serde_wasm_bindgen::to_value(&battle).unwrap_or_else(|err| {
        error!("Failed to serialize battle: {:?}", err);
        JsValue::NULL
    })
}

/// JSON文字列の `BattleRequest` を受けとり、戦闘結果をJSON文字列で返す。
/// 失敗した場合は空文字列を返す。
#[wasm_bindgen]
pub fn execute_battle_json(request: &str) -> String {
    initialize();

    let result = BattleRequest::from_json(request)
        .and_then(|request| run_battle(&request))
        .and_then(|battle| Ok(serde_json::to_string(&battle)?));
    match result {
        Ok(json) => json,
        Err(err) => {
            error!("Battle failed: {err}");
            String::new()
        }
    }
}
