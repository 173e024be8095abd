use crate::battle::decision::{DecisionSource, ShotDecision};
use crate::battle::BattleView;

/// 与えられた射撃を順番に返すだけの意思決定ソース。
/// 戦闘状態は参照しないので、呼び出し側が生存艦だけを撃つ列を用意する必要がある。
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisionSource {
    shots: Vec<ShotDecision>,
    index: usize,
}

impl ScriptedDecisionSource {
    pub fn new(shots: Vec<ShotDecision>) -> Self {
        Self { shots, index: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.shots.len() - self.index
    }
}

impl DecisionSource for ScriptedDecisionSource {
    fn produce_next_shot(&mut self, _view: &dyn BattleView) -> Option<ShotDecision> {
        let shot = self.shots.get(self.index)?.clone();
        self.index += 1;
        Some(shot)
    }
}
