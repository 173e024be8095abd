//! 生存艦の集合を O(1) で削除・ランダム選択するためのプール。
//! どちらも swap-and-pop で実装されているため、要素の順序は保持されない。

mod index_pool;
pub use index_pool::IndexPool;

mod keyed_index_pool;
pub use keyed_index_pool::{KeyedIndexPool, PoolError};

/// 一様乱数 `draw` (0.0 <= draw < 1.0) を `0..count` の位置に写像する。
/// `draw == 1.0` でも範囲外にならないよう末尾にクランプする。
/// `count == 0` の場合は `None`。
pub fn position_for_draw(draw: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let position = f64::floor(draw * count as f64);
    if position.is_nan() || position <= 0.0 {
        // 負の値や NaN も先頭に寄せる
        return Some(0);
    }
    Some((position as usize).min(count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_for_draw() {
        let cases = [
            (1, 0.0, 0),
            (1, 0.99, 0),
            (5, 0.19, 0),
            (5, 0.2, 1),
            (5, 0.4, 2),
            (5, 0.6, 3),
            (5, 0.99, 4),
            (10, 0.15, 1),
            (10, 0.5, 5),
            (10, 0.999, 9),
            (2, 0.49, 0),
            (2, 0.5, 1),
        ];
        for (count, draw, expected) in cases {
            assert_eq!(
                position_for_draw(draw, count),
                Some(expected),
                "count={count} draw={draw}"
            );
        }
    }

    #[test]
    fn test_position_for_draw_edges() {
        assert_eq!(position_for_draw(0.5, 0), None);
        assert_eq!(position_for_draw(1.0, 3), Some(2));
        assert_eq!(position_for_draw(-0.5, 3), Some(0));
        assert_eq!(position_for_draw(f64::NAN, 3), Some(0));
    }
}
