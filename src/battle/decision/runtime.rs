use log::debug;

use crate::battle::decision::{DecisionSource, ShotDecision};
use crate::battle::{BattleView, DestructionCurve, Side};
use crate::pool::position_for_draw;
use crate::random::RandomSource;

/// 現在の射手。`remaining` が 0 になるまで同じ艦が撃ち続ける。
#[derive(Debug, Clone)]
struct Shooter {
    side: Side,
    id: String,
    attack: f64,
    remaining: u32,
}

/// 乱数と破壊確率カーブで射撃を決める本番用の意思決定ソース。
///
/// 射手の選択に乱数を2回 (陣営、射手)、1発ごとに2回 (目標、撃破判定) 消費する。
/// 目標は相手陣営の生存艦すべてから選ばれ、砲を持たない艦も撃たれうる。
pub struct RandomDecisionSource {
    rng: Box<dyn RandomSource>,
    curve: DestructionCurve,
    shooter: Option<Shooter>,
}

impl RandomDecisionSource {
    pub fn new(rng: Box<dyn RandomSource>, curve: DestructionCurve) -> Self {
        Self {
            rng,
            curve,
            shooter: None,
        }
    }

    /// 乱数で陣営と射手を選ぶ。
    /// 選ばれた陣営に撃てる艦がいなければ反対の陣営から選ぶ。
    fn select_shooter(&mut self, view: &dyn BattleView) -> Option<Shooter> {
        let drawn = Side::from_draw(self.rng.next_random());
        let side = if view.gunned_count(drawn) == 0 {
            drawn.flip()
        } else {
            drawn
        };

        let position = position_for_draw(self.rng.next_random(), view.gunned_count(side))?;
        let ship = view.gunned_ship_at(side, position)?;
        debug!(
            "New shooter: {} (side {side}, guns {})",
            ship.id(),
            ship.guns()
        );
        Some(Shooter {
            side,
            id: ship.id().to_owned(),
            attack: ship.attack(),
            remaining: ship.guns(),
        })
    }
}

impl DecisionSource for RandomDecisionSource {
    fn produce_next_shot(&mut self, view: &dyn BattleView) -> Option<ShotDecision> {
        if !matches!(&self.shooter, Some(s) if s.remaining > 0) {
            self.shooter = Some(self.select_shooter(view)?);
        }
        let shooter = self.shooter.as_mut()?;

        let target_side = shooter.side.flip();
        let position = position_for_draw(self.rng.next_random(), view.alive_count(target_side))?;
        let target = view.ship_at(target_side, position)?;

        let probability = self.curve.calculate_ratio(target.defense(), shooter.attack);
        let destroyed = self.rng.next_random() < probability;
        shooter.remaining -= 1;

        Some(ShotDecision {
            side: shooter.side,
            shooter_id: shooter.id.clone(),
            target_id: target.id().to_owned(),
            destroyed,
        })
    }

    fn begin_battle(&mut self) {
        self.shooter = None;
    }
}
