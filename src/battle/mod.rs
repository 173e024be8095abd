mod battle_log;
mod battle_result;
mod battle_state;
mod config;
pub mod decision;
mod destruction_curve;
mod side;

pub use battle_log::{BattleLog, Shot};
pub use battle_result::{Battle, BattleOutcome, Termination};
pub use battle_state::{BattleState, BattleView};
pub use config::BattleConfig;
pub use decision::{DecisionSource, RandomDecisionSource, ScriptedDecisionSource, ShotDecision};
pub use destruction_curve::{CurveDefinition, CurveError, DestructionCurve};
pub use side::Side;

use log::{error, info};

use crate::error::BattleError;
use crate::fleet::Fleet;
use crate::id::IdGenerator;
use crate::random::RandomSource;

/// 戦闘の進行を管理する構造体。
/// 意思決定ソースから射撃を受けとり、戦闘状態に反映し、射撃ログを組み立てる。
pub struct BattleEngine {
    config: BattleConfig,
    id_generator: Box<dyn IdGenerator>,
    decision_source: Option<Box<dyn DecisionSource>>,
}

impl BattleEngine {
    /// 意思決定ソースなしで作る。`execute_battle` の前に `attach_decision_source` が必要。
    pub fn new(id_generator: Box<dyn IdGenerator>, config: BattleConfig) -> Self {
        Self {
            config,
            id_generator,
            decision_source: None,
        }
    }

    /// 設定の破壊確率カーブと乱数源から `RandomDecisionSource` を組み立てて取り付ける。
    /// カーブの定義が不正ならここで失敗する。
    pub fn with_random_source(
        id_generator: Box<dyn IdGenerator>,
        rng: Box<dyn RandomSource>,
        config: BattleConfig,
    ) -> Result<Self, BattleError> {
        let curve = config.curve()?;
        let mut engine = Self::new(id_generator, config);
        engine.attach_decision_source(Box::new(RandomDecisionSource::new(rng, curve)));
        Ok(engine)
    }

    pub fn attach_decision_source(&mut self, source: Box<dyn DecisionSource>) {
        self.decision_source = Some(source);
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    // -- API --
    /// 2つの艦隊で戦闘を最後まで実行する。
    /// 入力艦隊は変更されず、撃沈状態は戦闘後の艦隊 (`post_side_a` / `post_side_b`) に反映される。
    pub fn execute_battle(&mut self, fleet_a: &Fleet, fleet_b: &Fleet) -> Result<Battle, BattleError> {
        let source = self
            .decision_source
            .as_mut()
            .ok_or(BattleError::MissingDecisionSource)?;

        let mut state = BattleState::new(fleet_a, fleet_b)?;
        let mut log = BattleLog::new();
        source.begin_battle();

        info!(
            "Battle start: {} ships ({} armed) vs {} ships ({} armed)",
            state.alive_count(Side::A),
            state.gunned_count(Side::A),
            state.alive_count(Side::B),
            state.gunned_count(Side::B),
        );

        let log_shots = self.config.log_shots;
        let max_shots = self.config.max_shots;
        let stalemate_threshold = self.config.stalemate_threshold;
        let mut without_destruction = 0;

        let termination = loop {
            if state.alive_count(Side::A) == 0 || state.alive_count(Side::B) == 0 {
                break Termination::Elimination;
            }
            if state.is_over() {
                break Termination::NoArmedShips;
            }
            if log.shot_count() >= max_shots {
                break Termination::ShotCap;
            }
            let Some(decision) = source.produce_next_shot(&state) else {
                break Termination::DecisionsExhausted;
            };

            log.push_shot(&decision);
            if log_shots {
                log.push_log(format!(
                    "#{} {}: {} -> {}{}",
                    log.shot_count(),
                    decision.side,
                    decision.shooter_id,
                    decision.target_id,
                    if decision.destroyed { " (destroyed)" } else { "" }
                ));
            }

            if decision.destroyed {
                if let Err(err) = state.apply_destruction(decision.side.flip(), &decision.target_id) {
                    error!(
                        "Shot #{} destroyed a ship that is not alive: {err}",
                        log.shot_count()
                    );
                    return Err(err);
                }
                without_destruction = 0;
            } else {
                without_destruction += 1;
                if stalemate_threshold > 0 && without_destruction >= stalemate_threshold {
                    break Termination::Stalemate;
                }
            }
        };

        log.flush_logs_debug();
        info!(
            "Battle over after {} shots ({:?}): {} / {} ships left",
            log.shot_count(),
            termination,
            state.alive_count(Side::A),
            state.alive_count(Side::B),
        );

        let id = self.id_generator.next_id();
        let (post_side_a, post_side_b) = state.into_fleets(fleet_a, fleet_b);
        Ok(Battle {
            id,
            side_a: fleet_a.clone(),
            side_b: fleet_b.clone(),
            shots: log.into_shots(),
            post_side_a,
            post_side_b,
            termination,
        })
    }
}
