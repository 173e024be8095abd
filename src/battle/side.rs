use serde::{Deserialize, Serialize};

/// 戦闘の陣営。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn flip(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// 乱数 `draw` が 0.5 未満なら A、それ以外は B。
    pub fn from_draw(draw: f64) -> Self {
        if draw < 0.5 {
            Side::A
        } else {
            Side::B
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Side::A => "A",
            Side::B => "B",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(Side::A.flip(), Side::B);
        assert_eq!(Side::B.flip().flip(), Side::B);
    }

    #[test]
    fn test_from_draw() {
        assert_eq!(Side::from_draw(0.0), Side::A);
        assert_eq!(Side::from_draw(0.49), Side::A);
        assert_eq!(Side::from_draw(0.5), Side::B);
        assert_eq!(Side::from_draw(0.99), Side::B);
    }
}
