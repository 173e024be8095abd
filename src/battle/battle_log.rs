use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::battle::decision::ShotDecision;

/// 射撃ログの1件。発射順に記録される。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// 射手の艦ID
    pub source: String,
    /// 目標の艦ID
    pub destination: String,
    pub destroyed: bool,
}

impl From<&ShotDecision> for Shot {
    fn from(decision: &ShotDecision) -> Self {
        Self {
            source: decision.shooter_id.clone(),
            destination: decision.target_id.clone(),
            destroyed: decision.destroyed,
        }
    }
}

/// 戦闘中の射撃記録と、debug 出力用のテキストバッファ。
#[derive(Debug, Default)]
pub struct BattleLog {
    shots: Vec<Shot>,
    logs: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_shot(&mut self, decision: &ShotDecision) {
        self.shots.push(decision.into());
    }

    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    // バッファへイベント追加
    pub fn push_log<T: ToString>(&mut self, log: T) {
        self.logs.push(log.to_string());
    }

    // ログをまとめてdebug出力してバッファをクリア
    pub fn flush_logs_debug(&mut self) {
        if !self.logs.is_empty() {
            debug!("\n{}", self.logs.iter().join("\n"));
            self.logs.clear();
        }
    }

    pub fn into_shots(self) -> Vec<Shot> {
        self.shots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Side;

    #[test]
    fn test_shots_keep_emission_order() {
        let mut log = BattleLog::new();
        for (i, destroyed) in [false, false, true].into_iter().enumerate() {
            log.push_shot(&ShotDecision {
                side: Side::B,
                shooter_id: "b1".to_owned(),
                target_id: format!("a{i}"),
                destroyed,
            });
        }
        log.push_log("buffered");
        log.flush_logs_debug();

        assert_eq!(log.shot_count(), 3);
        let shots = log.into_shots();
        assert_eq!(shots[0].destination, "a0");
        assert_eq!(
            shots[2],
            Shot {
                source: "b1".to_owned(),
                destination: "a2".to_owned(),
                destroyed: true,
            }
        );
    }
}
