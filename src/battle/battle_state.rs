use std::collections::HashMap;

use crate::battle::Side;
use crate::error::BattleError;
use crate::fleet::{Fleet, Ship};
use crate::pool::{KeyedIndexPool, PoolError};

/// 意思決定側から見える戦闘状態 (読み取り専用)。
/// 位置 (`position`) は生存艦プール内の位置であり、艦隊内の並び順とは一致しない。
pub trait BattleView {
    fn alive_count(&self, side: Side) -> usize;
    fn gunned_count(&self, side: Side) -> usize;
    fn ship_at(&self, side: Side, position: usize) -> Option<&Ship>;
    fn gunned_ship_at(&self, side: Side, position: usize) -> Option<&Ship>;

    /// どちらかが全滅したか、両陣営とも撃てる艦がいなければ終了。
    fn is_over(&self) -> bool {
        self.alive_count(Side::A) == 0
            || self.alive_count(Side::B) == 0
            || (self.gunned_count(Side::A) == 0 && self.gunned_count(Side::B) == 0)
    }
}

/// 片側の陣営の状態。
/// 艦のデータは `ships` にだけ存在し、索引とプールはIDしか持たない。
#[derive(Debug)]
struct SideState {
    ships: Vec<Ship>,
    lookup: HashMap<String, usize>,
    alive: KeyedIndexPool,
    gunned: KeyedIndexPool,
}

impl SideState {
    fn new(side: Side, fleet: &Fleet) -> Result<Self, BattleError> {
        if let Some(id) = fleet.duplicate_ids().first() {
            return Err(BattleError::DuplicateShip {
                side,
                id: id.to_string(),
            });
        }

        let ships = fleet.ships().to_vec();
        let lookup = ships
            .iter()
            .enumerate()
            .map(|(i, ship)| (ship.id().to_owned(), i))
            .collect();
        // 撃沈済みで渡された艦は最初からプールに入れない
        let alive = KeyedIndexPool::new(
            ships
                .iter()
                .filter(|ship| !ship.is_destroyed())
                .map(Ship::id),
        );
        let gunned = KeyedIndexPool::new(
            ships
                .iter()
                .filter(|ship| !ship.is_destroyed() && ship.is_gunned())
                .map(Ship::id),
        );

        Ok(Self {
            ships,
            lookup,
            alive,
            gunned,
        })
    }

    fn ship_for_key(&self, key: Option<&str>) -> Option<&Ship> {
        key.and_then(|id| self.lookup.get(id))
            .map(|&index| &self.ships[index])
    }
}

/// 1回の戦闘における「誰が生きていて、誰が撃てるか」を管理する。
/// 入力艦隊の複製を所有し、撃沈はすべて `apply_destruction` を通して反映される。
#[derive(Debug)]
pub struct BattleState {
    sides: [SideState; 2],
}

impl BattleState {
    pub fn new(fleet_a: &Fleet, fleet_b: &Fleet) -> Result<Self, BattleError> {
        Ok(Self {
            sides: [
                SideState::new(Side::A, fleet_a)?,
                SideState::new(Side::B, fleet_b)?,
            ],
        })
    }

    fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    pub fn ship(&self, side: Side, id: &str) -> Option<&Ship> {
        self.side(side).ship_for_key(Some(id))
    }

    pub fn is_alive(&self, side: Side, id: &str) -> bool {
        self.side(side).alive.contains(id)
    }

    /// 艦を撃沈済みにし、その陣営の両プールから取り除く。
    /// 生存していない艦を指定した場合は `PoolError::NotFound` を返す。
    pub fn apply_destruction(&mut self, side: Side, id: &str) -> Result<(), BattleError> {
        let state = &mut self.sides[side.index()];
        let &index = state
            .lookup
            .get(id)
            .ok_or_else(|| PoolError::NotFound(id.to_owned()))?;
        state.alive.remove(id)?;

        let ship = &mut state.ships[index];
        if ship.is_gunned() {
            state.gunned.remove(id)?;
        }
        ship.mark_destroyed();
        Ok(())
    }

    /// 戦闘後の艦隊を元の並び順で返す。
    pub fn into_fleets(self, fleet_a: &Fleet, fleet_b: &Fleet) -> (Fleet, Fleet) {
        let [side_a, side_b] = self.sides;
        (
            fleet_a.with_ships(side_a.ships),
            fleet_b.with_ships(side_b.ships),
        )
    }
}

impl BattleView for BattleState {
    fn alive_count(&self, side: Side) -> usize {
        self.side(side).alive.count()
    }

    fn gunned_count(&self, side: Side) -> usize {
        self.side(side).gunned.count()
    }

    fn ship_at(&self, side: Side, position: usize) -> Option<&Ship> {
        let state = self.side(side);
        state.ship_for_key(state.alive.get_key(position))
    }

    fn gunned_ship_at(&self, side: Side, position: usize) -> Option<&Ship> {
        let state = self.side(side);
        state.ship_for_key(state.gunned.get_key(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::ShipTech;

    fn fleet(owner: &str, specs: &[(&str, u32)]) -> Fleet {
        let ships = specs
            .iter()
            .map(|&(id, guns)| Ship::new(id, id, owner, ShipTech::armed(1.0, guns, 1.0)))
            .collect();
        Fleet::new(owner, ships)
    }

    fn assert_bookkeeping(state: &BattleState) {
        let expected = state.alive_count(Side::A) == 0
            || state.alive_count(Side::B) == 0
            || (state.gunned_count(Side::A) == 0 && state.gunned_count(Side::B) == 0);
        assert_eq!(state.is_over(), expected);
        for side in Side::BOTH {
            assert!(state.gunned_count(side) <= state.alive_count(side));
        }
    }

    #[test]
    fn test_counts_and_lookup() {
        let a = fleet("race-a", &[("a1", 2), ("a2", 0), ("a3", 1)]);
        let b = fleet("race-b", &[("b1", 0)]);
        let state = BattleState::new(&a, &b).unwrap();

        assert_eq!(state.alive_count(Side::A), 3);
        assert_eq!(state.gunned_count(Side::A), 2);
        assert_eq!(state.alive_count(Side::B), 1);
        assert_eq!(state.gunned_count(Side::B), 0);
        assert!(!state.is_over());

        assert_eq!(state.ship_at(Side::A, 1).map(Ship::id), Some("a2"));
        assert_eq!(state.gunned_ship_at(Side::A, 1).map(Ship::id), Some("a3"));
        assert!(state.ship_at(Side::B, 1).is_none());
        assert!(state.gunned_ship_at(Side::B, 0).is_none());
    }

    #[test]
    fn test_apply_destruction() {
        let a = fleet("race-a", &[("a1", 2), ("a2", 0), ("a3", 1)]);
        let b = fleet("race-b", &[("b1", 1)]);
        let mut state = BattleState::new(&a, &b).unwrap();

        state.apply_destruction(Side::A, "a1").unwrap();
        assert_bookkeeping(&state);
        assert_eq!(state.alive_count(Side::A), 2);
        assert_eq!(state.gunned_count(Side::A), 1);
        assert!(!state.is_alive(Side::A, "a1"));
        assert!(state.ship(Side::A, "a1").unwrap().is_destroyed());
        // 末尾の a3 が先頭に詰められる
        assert_eq!(state.ship_at(Side::A, 0).map(Ship::id), Some("a3"));
        assert_eq!(state.gunned_ship_at(Side::A, 0).map(Ship::id), Some("a3"));

        state.apply_destruction(Side::A, "a2").unwrap();
        assert_bookkeeping(&state);
        assert_eq!(state.gunned_count(Side::A), 1);

        state.apply_destruction(Side::B, "b1").unwrap();
        assert_bookkeeping(&state);
        assert!(state.is_over());
    }

    #[test]
    fn test_destroying_twice_fails() {
        let a = fleet("race-a", &[("a1", 1)]);
        let b = fleet("race-b", &[("b1", 1), ("b2", 1)]);
        let mut state = BattleState::new(&a, &b).unwrap();

        state.apply_destruction(Side::B, "b1").unwrap();
        assert!(matches!(
            state.apply_destruction(Side::B, "b1"),
            Err(BattleError::Pool(PoolError::NotFound(id))) if id == "b1"
        ));
        assert!(matches!(
            state.apply_destruction(Side::A, "b2"),
            Err(BattleError::Pool(PoolError::NotFound(_)))
        ));
        assert_eq!(state.alive_count(Side::B), 1);
    }

    #[test]
    fn test_unarmed_fleets_are_over() {
        let a = fleet("race-a", &[("a1", 0)]);
        let b = fleet("race-b", &[("b1", 0)]);
        assert!(BattleState::new(&a, &b).unwrap().is_over());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = fleet("race-a", &[("a1", 1), ("a1", 0)]);
        let b = fleet("race-b", &[("b1", 1)]);
        assert!(matches!(
            BattleState::new(&a, &b),
            Err(BattleError::DuplicateShip { side: Side::A, ref id }) if id == "a1"
        ));
    }

    #[test]
    fn test_into_fleets_keeps_order_and_input() {
        let a = fleet("race-a", &[("a1", 1), ("a2", 1), ("a3", 1)]);
        let b = fleet("race-b", &[("b1", 1)]);
        let mut state = BattleState::new(&a, &b).unwrap();
        state.apply_destruction(Side::A, "a1").unwrap();

        let (post_a, post_b) = state.into_fleets(&a, &b);
        let ids: Vec<&str> = post_a.ships().iter().map(Ship::id).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);
        assert!(post_a.ships()[0].is_destroyed());
        assert!(!post_a.ships()[1].is_destroyed());
        assert_eq!(post_a.owner(), "race-a");
        assert!(post_b.equal_ships(&b));
        // 入力側は変更されない
        assert!(a.ships().iter().all(|s| !s.is_destroyed()));
    }
}
