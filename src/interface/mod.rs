/// フロントエンドとシミュレーションコア間のインターフェースを定義する。
/// このモジュールで受け渡す構造体はシリアライズ/デシリアライズ可能でなければならない。
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub use crate::battle::{Battle, BattleConfig, BattleOutcome, Shot, Side, Termination};
pub use crate::fleet::{Fleet, Ship, ShipTech};

use crate::battle::BattleEngine;
use crate::error::BattleError;
use crate::id::RandomIdGenerator;
use crate::random::StdRandomSource;

/// 1回の戦闘の依頼。
/// `seed` が 0 の場合はOSの乱数で初期化する。`config` 省略時は既定値を使う。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    pub side_a: Fleet,
    pub side_b: Fleet,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub config: Option<BattleConfig>,
}

impl BattleRequest {
    pub fn new(side_a: Fleet, side_b: Fleet) -> Self {
        Self {
            side_a,
            side_b,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        Ok(serde_json::from_str(json)?)
    }
}

// -- API --
/// 依頼どおりに乱数ソースとID生成器を用意して戦闘を1回実行する。
pub fn run_battle(request: &BattleRequest) -> Result<Battle, BattleError> {
    for (side, fleet) in [(Side::A, &request.side_a), (Side::B, &request.side_b)] {
        if !fleet.validate() {
            warn!("Side {side} fleet did not pass validation");
        }
    }

    let config = request.config.clone().unwrap_or_default();
    let mut engine = BattleEngine::with_random_source(
        Box::new(RandomIdGenerator::new(request.seed)),
        Box::new(StdRandomSource::new(request.seed)),
        config,
    )?;
    let battle = engine.execute_battle(&request.side_a, &request.side_b)?;

    info!(
        "Battle {} finished: {:?} ({} shots)",
        battle.id,
        battle.outcome(),
        battle.shots.len()
    );
    Ok(battle)
}
