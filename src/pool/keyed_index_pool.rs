use std::collections::HashMap;

use thiserror::Error;

use super::position_for_draw;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("key not found: {0}")]
    NotFound(String),
}

/// 艦IDなどの文字列キーで要素を指定できる `IndexPool`。
/// 各キーは生存中のみ密な位置 (`0..count`) を持つ。
/// キーは一意であることを呼び出し側が保証する。
#[derive(Debug, Clone, Default)]
pub struct KeyedIndexPool {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
}

impl KeyedIndexPool {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let positions = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), i))
            .collect();
        Self { keys, positions }
    }

    /// `position` にあるキー。生存範囲外なら `None`。
    pub fn get_key(&self, position: usize) -> Option<&str> {
        self.keys.get(position).map(String::as_str)
    }

    /// `key` の現在位置。削除済み・未登録なら `None`。
    pub fn get_index(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// 乱数 `draw` に対応するキーを返す。空なら `None`。
    pub fn select_random(&self, draw: f64) -> Option<&str> {
        position_for_draw(draw, self.keys.len()).and_then(|position| self.get_key(position))
    }

    /// Remove `key` from the pool in O(1).
    /// The last live key is moved into the freed slot, so positions of other keys may change.
    pub fn remove(&mut self, key: &str) -> Result<(), PoolError> {
        let position = self
            .positions
            .remove(key)
            .ok_or_else(|| PoolError::NotFound(key.to_owned()))?;

        self.keys.swap_remove(position);
        if let Some(moved) = self.keys.get(position) {
            self.positions.insert(moved.clone(), position);
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }
}
