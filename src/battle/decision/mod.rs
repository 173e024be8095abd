//! 次の射撃を決める意思決定ソース。
//! 本番用の `RandomDecisionSource` と、テストで戦闘を再現するための `ScriptedDecisionSource` がある。

use serde::{Deserialize, Serialize};

use crate::battle::{BattleView, Side};

mod runtime;
pub use runtime::RandomDecisionSource;

mod scripted;
pub use scripted::ScriptedDecisionSource;

/// 1発分の射撃の決定。`side` は射手の陣営で、目標は反対側の艦。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShotDecision {
    pub side: Side,
    pub shooter_id: String,
    pub target_id: String,
    pub destroyed: bool,
}

pub trait DecisionSource {
    /// 次の射撃を返す。これ以上射撃がなければ `None`。
    fn produce_next_shot(&mut self, view: &dyn BattleView) -> Option<ShotDecision>;

    /// 新しい戦闘の開始時に呼ばれる。
    fn begin_battle(&mut self) {}
}
