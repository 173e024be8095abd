use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("keys and values cannot be empty")]
    Empty,
    #[error("keys and values must have the same length ({keys} keys, {values} values)")]
    LengthMismatch { keys: usize, values: usize },
    #[error("keys must be strictly increasing (duplicate key at index {index})")]
    DuplicateKey { index: usize },
    #[error("keys must be strictly increasing (key at index {index} is not greater than previous)")]
    NotIncreasing { index: usize },
    #[error("key at index {index} is not a finite number")]
    NonFiniteKey { index: usize },
}

/// 破壊確率カーブの定義。設定ファイルからそのまま読み込める形。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurveDefinition {
    pub keys: Vec<f64>,
    pub values: Vec<f64>,
}

impl Default for CurveDefinition {
    /// 防御/攻撃比 0.25 以下で確実に撃破、1 で 50%、4 以上で撃破不能。
    fn default() -> Self {
        Self {
            keys: vec![0.25, 1.0, 4.0],
            values: vec![1.0, 0.5, 0.0],
        }
    }
}

/// 防御力と攻撃力の比を撃破確率に変換する区分線形関数。
#[derive(Debug, Clone, PartialEq)]
pub struct DestructionCurve {
    keys: Vec<f64>,
    values: Vec<f64>,
}

impl DestructionCurve {
    pub fn new(keys: Vec<f64>, values: Vec<f64>) -> Result<Self, CurveError> {
        if keys.is_empty() || values.is_empty() {
            return Err(CurveError::Empty);
        }
        if keys.len() != values.len() {
            return Err(CurveError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        if let Some(index) = keys.iter().position(|k| !k.is_finite()) {
            return Err(CurveError::NonFiniteKey { index });
        }
        for index in 1..keys.len() {
            if keys[index] == keys[index - 1] {
                return Err(CurveError::DuplicateKey { index });
            }
            if keys[index] < keys[index - 1] {
                return Err(CurveError::NotIncreasing { index });
            }
        }
        Ok(Self { keys, values })
    }

    pub fn from_definition(definition: &CurveDefinition) -> Result<Self, CurveError> {
        Self::new(definition.keys.clone(), definition.values.clone())
    }

    /// 範囲外は端の値で打ち切り、範囲内は隣接する2点を線形補間する。
    pub fn calculate(&self, x: f64) -> f64 {
        let last = self.keys.len() - 1;
        if x.is_nan() || x <= self.keys[0] {
            return self.values[0];
        }
        if x >= self.keys[last] {
            return self.values[last];
        }

        // keys[0] < x < keys[last] なので i は 1..=last に収まる
        let i = self.keys.partition_point(|&k| k < x);
        let (x0, x1) = (self.keys[i - 1], self.keys[i]);
        let (y0, y1) = (self.values[i - 1], self.values[i]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// `numerator / denominator` における値。
    /// 0/0 は戦力が釣り合っているとみなし、比 1.0 として扱う。
    pub fn calculate_ratio(&self, numerator: f64, denominator: f64) -> f64 {
        let ratio = if numerator == 0.0 && denominator == 0.0 {
            1.0
        } else {
            numerator / denominator
        };
        self.calculate(ratio)
    }
}

impl Default for DestructionCurve {
    fn default() -> Self {
        let CurveDefinition { keys, values } = CurveDefinition::default();
        Self { keys, values }
    }
}
