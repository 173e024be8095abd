use serde::{Deserialize, Serialize};

use crate::fleet::tech::ShipTech;

/// 戦闘に参加する1隻の艦。
/// 艦IDは艦隊内で一意でなければならない。
/// 戦闘エンジンは呼び出し側の艦を直接変更せず、複製に対して `destroyed` を更新する。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    id: String,
    #[serde(default)]
    name: String,
    /// 所有する種族のID
    #[serde(default)]
    owner: String,
    #[serde(default)]
    destroyed: bool,
    #[serde(default)]
    tech: ShipTech,
}

impl Ship {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        tech: ShipTech,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            destroyed: false,
            tech,
        }
    }

    // attributes getters
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn owner(&self) -> &str {
        &self.owner
    }
    pub fn tech(&self) -> &ShipTech {
        &self.tech
    }
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // tech getters
    pub fn attack(&self) -> f64 {
        self.tech.attack
    }
    pub fn defense(&self) -> f64 {
        self.tech.defense
    }
    pub fn guns(&self) -> u32 {
        self.tech.guns
    }

    /// 砲を1門以上持ち、射手になれるかどうか。
    pub fn is_gunned(&self) -> bool {
        self.tech.guns > 0
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }

    /// 値が異なるフィールド名を列挙する。空なら全フィールドが一致している。
    pub fn diff(&self, other: &Ship) -> Vec<&'static str> {
        let (a, b) = (&self.tech, &other.tech);
        [
            ("id", self.id == other.id),
            ("name", self.name == other.name),
            ("owner", self.owner == other.owner),
            ("destroyed", self.destroyed == other.destroyed),
            ("tech.attack", a.attack == b.attack),
            ("tech.guns", a.guns == b.guns),
            ("tech.defense", a.defense == b.defense),
            ("tech.speed", a.speed == b.speed),
            ("tech.cargoCapacity", a.cargo_capacity == b.cargo_capacity),
            ("tech.mass", a.mass == b.mass),
        ]
        .into_iter()
        .filter(|(_, same)| !same)
        .map(|(field, _)| field)
        .collect()
    }

    pub fn equal_fields(&self, other: &Ship) -> bool {
        self.diff(other).is_empty()
    }
}
