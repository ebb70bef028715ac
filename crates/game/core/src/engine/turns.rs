use crate::action::{ActionToken, PlayerAction};
use crate::combat::{basic_attack, defend};
use crate::env::RngOracle;
use crate::event::BattleEvent;
use crate::state::{Combatant, EventLog};

use super::{BattleEngine, Phase, TurnError, TurnReport};

/// Appends events to the history and to the step's report together.
struct Recorder<'a> {
    history: &'a mut EventLog,
    events: Vec<BattleEvent>,
}

impl Recorder<'_> {
    fn record(&mut self, event: BattleEvent) {
        self.history.push(event.to_string());
        self.events.push(event);
    }
}

/// Turn sequencing methods for BattleEngine.
impl BattleEngine {
    /// Runs one turn for the raw input token.
    ///
    /// Order within a step:
    /// 1. player branch (`attack`, `defend`, or nothing for unknown input)
    /// 2. opponent basic attack, if the opponent is still alive
    /// 3. turn counter +1
    /// 4. win/loss check (player loss first)
    ///
    /// `save` short-circuits after step 1 into [`Phase::Suspended`] with no
    /// opponent action and no turn increment.
    pub fn step<R>(&mut self, input: &str, rng: &mut R) -> Result<TurnReport, TurnError>
    where
        R: RngOracle + ?Sized,
    {
        self.act(PlayerAction::parse(input), rng)
    }

    /// Same as [`Self::step`] for an already-parsed action.
    pub fn act<R>(&mut self, action: PlayerAction, rng: &mut R) -> Result<TurnReport, TurnError>
    where
        R: RngOracle + ?Sized,
    {
        if self.phase.is_terminal() {
            return Err(TurnError::Terminal { phase: self.phase });
        }

        let turn = self.encounter.turn();
        let (player, enemy, history) = self.encounter.parts_mut();
        let mut recorder = Recorder {
            history,
            events: Vec::new(),
        };

        self.phase = Phase::ResolvingPlayerAction;
        match action.token() {
            Some(ActionToken::Save) => {
                self.phase = Phase::Suspended;
                return Ok(TurnReport {
                    turn,
                    action,
                    events: recorder.events,
                    phase: self.phase,
                });
            }
            Some(ActionToken::Attack) => {
                let damage = basic_attack(player, enemy);
                recorder.record(BattleEvent::Attacked {
                    attacker: player.name().to_string(),
                    target: enemy.name().to_string(),
                    damage,
                });
            }
            Some(ActionToken::Defend) => {
                let resolution = defend(player, enemy, &self.rules, rng);
                for event in resolution.events(player.name(), enemy.name()) {
                    recorder.record(event);
                }
            }
            None => {}
        }

        self.phase = Phase::ResolvingOpponentAction;
        if enemy.is_alive() {
            let damage = opponent_attack(enemy, player);
            recorder.record(BattleEvent::Attacked {
                attacker: enemy.name().to_string(),
                target: player.name().to_string(),
                damage,
            });
        }

        let events = recorder.events;
        self.encounter.advance_turn();

        self.phase = match self.encounter.victor() {
            Some(side) => Phase::Ended(side),
            None => Phase::AwaitingAction,
        };

        Ok(TurnReport {
            turn,
            action,
            events,
            phase: self.phase,
        })
    }
}

/// The opponent's fixed action. Returns the nominal damage.
///
/// The nominal damage is subtracted from the player twice: once inside
/// [`basic_attack`] and once more here.
fn opponent_attack(enemy: &Combatant, player: &mut Combatant) -> f64 {
    let damage = basic_attack(enemy, player);
    player.take_damage(damage);
    damage
}
