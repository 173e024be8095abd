use serde::{Deserialize, Serialize};

/// 技術研究の結果として決まる艦の性能値。
/// 戦闘で参照するのは `attack`, `guns`, `defense` のみで、残りは結果にそのまま引き継がれる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipTech {
    pub attack: f64,
    /// 1回の行動で撃つ弾数
    pub guns: u32,
    pub defense: f64,
    pub speed: f64,
    pub cargo_capacity: f64,
    pub mass: u32,
}

impl ShipTech {
    /// 戦闘用の値だけを指定して作る。
    pub fn armed(attack: f64, guns: u32, defense: f64) -> Self {
        Self {
            attack,
            guns,
            defense,
            ..Self::default()
        }
    }
}
