use super::position_for_draw;

const REMOVED: usize = usize::MAX;

/// `0..n` の整数インデックスを管理するプール。
/// 削除済み・範囲外のインデックスに対する `remove` は何もしない。
#[derive(Debug, Clone)]
pub struct IndexPool {
    /// プールに残っているインデックス (順序は保持しない)
    active: Vec<usize>,
    /// インデックス -> `active` 内の位置。削除済みは `REMOVED`
    positions: Vec<usize>,
}

impl IndexPool {
    pub fn new(count: usize) -> Self {
        Self {
            active: (0..count).collect(),
            positions: (0..count).collect(),
        }
    }

    pub fn remove(&mut self, index: usize) {
        let Some(&position) = self.positions.get(index) else {
            return;
        };
        if position == REMOVED {
            return;
        }

        let last = self.active.len() - 1;
        let moved = self.active[last];
        self.active[position] = moved;
        self.positions[moved] = position;

        self.active.pop();
        self.positions[index] = REMOVED;
    }

    /// 乱数 `draw` に対応する生存インデックスを返す。空なら `None`。
    pub fn select_random(&self, draw: f64) -> Option<usize> {
        position_for_draw(draw, self.active.len()).map(|position| self.active[position])
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.positions
            .get(index)
            .is_some_and(|&position| position != REMOVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contains_everything() {
        let pool = IndexPool::new(5);
        assert_eq!(pool.count(), 5);
        assert!((0..5).all(|i| pool.contains(i)));
        assert!(!pool.contains(5));

        let empty = IndexPool::new(0);
        assert_eq!(empty.count(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_swaps_last_into_hole() {
        let mut pool = IndexPool::new(5);
        pool.remove(1);

        assert_eq!(pool.count(), 4);
        assert!(!pool.contains(1));
        // 末尾の 4 が位置 1 に移動している
        assert_eq!(pool.select_random(0.25), Some(4));
        assert_eq!(pool.select_random(0.0), Some(0));
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut pool = IndexPool::new(3);
        pool.remove(2);
        pool.remove(2);
        pool.remove(17);
        assert_eq!(pool.count(), 2);
        assert!(pool.contains(0));
        assert!(pool.contains(1));
    }

    #[test]
    fn test_select_random_on_empty_pool() {
        let mut pool = IndexPool::new(2);
        pool.remove(0);
        pool.remove(1);
        assert_eq!(pool.select_random(0.3), None);
    }

    #[test]
    fn test_select_random_clamps_upper_bound() {
        let pool = IndexPool::new(4);
        assert_eq!(pool.select_random(1.0), Some(3));
    }

    #[test]
    fn test_remove_all_in_sequence() {
        let mut pool = IndexPool::new(100);
        for i in (0..100).step_by(2) {
            pool.remove(i);
        }
        assert_eq!(pool.count(), 50);
        for i in 0..100 {
            assert_eq!(pool.contains(i), i % 2 == 1);
        }
        // どの乱数でも奇数しか出てこない
        for k in 0..50 {
            let drawn = pool.select_random(k as f64 / 50.0).unwrap();
            assert_eq!(drawn % 2, 1);
        }
    }
}
