use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

mod ship;
pub use ship::Ship;

mod tech;
pub use tech::ShipTech;

/// 一方の陣営の艦隊。
/// 艦の並び順は戦闘を通じて保持され、戦闘後の艦隊も同じ順序で返される。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Fleet {
    #[serde(default)]
    id: String,
    ships: Vec<Ship>,
    /// 所有する種族のID
    #[serde(default)]
    owner: String,
}

impl Fleet {
    pub fn new(owner: impl Into<String>, ships: Vec<Ship>) -> Self {
        Self {
            id: String::new(),
            ships,
            owner: owner.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }
    pub fn owner(&self) -> &str {
        &self.owner
    }
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// 同じIDと所有者で、艦だけを差し替えた艦隊を作る。
    pub(crate) fn with_ships(&self, ships: Vec<Ship>) -> Self {
        Self {
            id: self.id.clone(),
            ships,
            owner: self.owner.clone(),
        }
    }

    pub fn find_ship(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id() == id)
    }

    /// 艦隊の速度は最も遅い艦に揃う。空の艦隊は 0。
    pub fn speed(&self) -> f64 {
        self.ships
            .iter()
            .map(|ship| ship.tech().speed)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// 艦隊内で重複している艦ID。
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.ships.iter().map(Ship::id).duplicates().collect()
    }

    /// 受けとった艦隊データの妥当性を検証する。
    /// - 艦隊が空: 戦闘は成立するが即座に終了する
    /// - 艦IDの重複: 戦闘不能
    pub fn validate(&self) -> bool {
        if self.is_empty() {
            warn!("Fleet {:?} ({}) is empty", self.id, self.owner);
            return false;
        }
        let duplicates = self.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                "Fleet {:?} ({}) has duplicate ship ids: {}",
                self.id,
                self.owner,
                duplicates.iter().join(", ")
            );
            return false;
        }
        true
    }

    /// 艦の並びと全フィールドを比較する。不一致はすべて `warn!` で報告する。
    pub fn equal_ships(&self, other: &Fleet) -> bool {
        if self.ships.len() != other.ships.len() {
            warn!(
                "Fleet ship count mismatch: {} vs {}",
                self.ships.len(),
                other.ships.len()
            );
            return false;
        }

        let mut equal = true;
        for (i, (ship, expected)) in self.ships.iter().zip(other.ships.iter()).enumerate() {
            let fields = ship.diff(expected);
            if !fields.is_empty() {
                warn!(
                    "Ship[{i}] mismatch: {} vs {} differ in {}",
                    ship.id(),
                    expected.id(),
                    fields.iter().join(", ")
                );
                equal = false;
            }
        }
        equal
    }
}
