use serde::{Deserialize, Serialize};

use crate::battle::{Shot, Side};
use crate::fleet::{Fleet, Ship};

/// 戦闘ループが止まった理由。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// どちらかの陣営が全滅した
    Elimination,
    /// 両陣営とも撃てる艦が残っていない
    NoArmedShips,
    /// 意思決定ソースが射撃を返さなくなった
    DecisionsExhausted,
    ShotCap,
    /// 撃破なしの射撃が続いた
    Stalemate,
}

/// 戦闘後の艦隊から判定する勝敗。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BattleOutcome {
    SideA,
    SideB,
    MutualDestruction,
    Undecided,
}

/// 1回の戦闘結果。返却後は変更されない。
/// `side_a` / `side_b` は呼び出し側から受けとった艦隊そのもので、
/// 撃沈状態は `post_side_a` / `post_side_b` にだけ反映される。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: String,
    pub side_a: Fleet,
    pub side_b: Fleet,
    pub shots: Vec<Shot>,
    pub post_side_a: Fleet,
    pub post_side_b: Fleet,
    pub termination: Termination,
}

impl Battle {
    pub fn fleet(&self, side: Side) -> &Fleet {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    pub fn post_fleet(&self, side: Side) -> &Fleet {
        match side {
            Side::A => &self.post_side_a,
            Side::B => &self.post_side_b,
        }
    }

    /// 戦闘後の艦隊から艦を探す。A側を先に探す。
    pub fn find_ship(&self, id: &str) -> Option<(Side, &Ship)> {
        Side::BOTH
            .into_iter()
            .find_map(|side| self.post_fleet(side).find_ship(id).map(|ship| (side, ship)))
    }

    /// `side` 側で撃沈された艦の数。
    pub fn losses(&self, side: Side) -> usize {
        self.post_fleet(side)
            .ships()
            .iter()
            .filter(|ship| ship.is_destroyed())
            .count()
    }

    fn eliminated(&self, side: Side) -> bool {
        self.post_fleet(side)
            .ships()
            .iter()
            .all(|ship| ship.is_destroyed())
    }

    pub fn outcome(&self) -> BattleOutcome {
        match (self.eliminated(Side::A), self.eliminated(Side::B)) {
            (false, true) => BattleOutcome::SideA,
            (true, false) => BattleOutcome::SideB,
            (true, true) => BattleOutcome::MutualDestruction,
            (false, false) => BattleOutcome::Undecided,
        }
    }
}
