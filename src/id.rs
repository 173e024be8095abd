use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 戦闘結果に付与するIDの生成器。
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// 指定したIDを順番に返す。末尾に達したら先頭に戻る。
#[derive(Debug, Clone)]
pub struct SequenceIdGenerator {
    ids: Vec<String>,
    index: usize,
}

impl SequenceIdGenerator {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> String {
        let Some(id) = self.ids.get(self.index) else {
            return String::new();
        };
        self.index = (self.index + 1) % self.ids.len();
        id.clone()
    }
}

/// 128bit の乱数を32桁の16進文字列にする。
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(seed)
        };
        Self { rng }
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        format!("{:032x}", self.rng.random::<u128>())
    }
}
