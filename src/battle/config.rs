use serde::{Deserialize, Serialize};

use crate::battle::destruction_curve::{CurveDefinition, CurveError, DestructionCurve};
use crate::error::BattleError;

/// 戦闘エンジンの設定。
/// JSON から読み込む場合、省略したフィールドはデフォルト値になる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleConfig {
    /// 1戦闘あたりの最大射撃数
    pub max_shots: usize,
    /// 撃破なしの射撃がこの回数続いたら膠着とみなして終了する。0 で無効。
    pub stalemate_threshold: usize,
    pub destruction_curve: CurveDefinition,
    /// 射撃ごとのログをバッファして debug 出力する
    pub log_shots: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_shots: 1000,
            stalemate_threshold: 100,
            destruction_curve: CurveDefinition::default(),
            log_shots: false,
        }
    }
}

impl BattleConfig {
    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 膠着判定を無効にした設定。射撃数の上限だけで終了する。
    pub fn without_stalemate_guard(mut self) -> Self {
        self.stalemate_threshold = 0;
        self
    }

    pub fn with_max_shots(mut self, max_shots: usize) -> Self {
        self.max_shots = max_shots;
        self
    }

    pub fn curve(&self) -> Result<DestructionCurve, CurveError> {
        DestructionCurve::from_definition(&self.destruction_curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_uses_defaults() {
        let config = BattleConfig::from_json(r#"{"maxShots": 5000}"#).unwrap();
        assert_eq!(config.max_shots, 5000);
        assert_eq!(config.stalemate_threshold, 100);
        assert_eq!(config.destruction_curve, CurveDefinition::default());
        assert!(!config.log_shots);

        assert_eq!(BattleConfig::from_json("{}").unwrap(), BattleConfig::default());
    }

    #[test]
    fn test_invalid_curve_is_reported() {
        let config = BattleConfig::from_json(
            r#"{"destructionCurve": {"keys": [1, 1], "values": [0.5, 0.1]}}"#,
        )
        .unwrap();
        assert_eq!(config.curve(), Err(CurveError::DuplicateKey { index: 1 }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BattleConfig::from_json(r#"{"maxShots": "many"}"#),
            Err(BattleError::Json(_))
        ));
    }
}
