use thiserror::Error;

use crate::battle::{CurveError, Side};
use crate::pool::PoolError;

/// クレート全体で使うエラー型。
/// 破壊確率カーブの設定ミスは戦闘開始前に、プール不整合は戦闘中に検出される。
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("invalid destruction curve: {0}")]
    Configuration(#[from] CurveError),

    /// 生存艦プールとの不整合。エンジン自体のバグを示すので再試行しない。
    #[error("battle state out of sync: {0}")]
    Pool(#[from] PoolError),

    #[error("no decision source attached to the battle engine")]
    MissingDecisionSource,

    #[error("ship id {id:?} appears more than once on side {side}")]
    DuplicateShip { side: Side, id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BattleError>;
