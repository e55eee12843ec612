//! The match engine.
//!
//! `Match` owns the state, the seat agents, the die source and the event
//! log, and sequences the rules:
//!
//! ```text
//! Setup ──► AwaitingRoll ──turn──► AwaitingRoll (next player)
//!               ▲   │
//!               │   └─dice emptied─► RoundOver ──settle──► Finished
//!               └──────────────────────────┘
//! ```
//!
//! Agents are consulted only at setup (direction) and before each roll.

use serde::{Deserialize, Serialize};

use crate::agents::{AutoAgent, Console, DecisionAgent, HumanAgent, RollPurpose, SharedConsole};
use crate::core::{
    DieRoller, EndReason, EventLog, EventRecord, GameRng, MatchConfig, MatchEvent, MatchObserver,
    MatchSnapshot, MatchState, Phase, PlayerId, PlayerKind, PlayerMap,
};
use crate::error::MatchError;
use crate::rules::{self, MatchResult, Settlement, TurnOutcome};

use super::roster::{build_roster, Roster};

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub reason: EndReason,
    /// Final scores of the full roster, in seating order.
    pub scores: Vec<(PlayerId, u32)>,
    pub rounds_played: u32,
}

/// Factory for seat agents.
pub type AgentFactory = Box<dyn FnMut(PlayerId, PlayerKind) -> Box<dyn DecisionAgent>>;

/// A match in progress.
pub struct Match {
    pub(crate) config: MatchConfig,
    pub(crate) state: MatchState,
    pub(crate) agents: PlayerMap<Box<dyn DecisionAgent>>,
    pub(crate) roller: Box<dyn DieRoller>,
    log: EventLog,
    observers: Vec<Box<dyn MatchObserver>>,
    round_open: bool,
}

/// Builder for creating a Match.
pub struct MatchBuilder {
    config: MatchConfig,
    roller: Option<Box<dyn DieRoller>>,
    console: Option<SharedConsole>,
    agents: Option<AgentFactory>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchBuilder {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            roller: None,
            console: None,
            agents: None,
            observers: Vec::new(),
        }
    }

    /// Die source for every roll. Defaults to the seeded `"dice"` stream.
    #[must_use]
    pub fn roller(mut self, roller: impl DieRoller + 'static) -> Self {
        self.roller = Some(Box::new(roller));
        self
    }

    /// Console for human seats. Defaults to stdin/stdout.
    #[must_use]
    pub fn console(mut self, console: SharedConsole) -> Self {
        self.console = Some(console);
        self
    }

    /// Custom agent for every seat, replacing the human/computer defaults.
    #[must_use]
    pub fn agents(
        mut self,
        factory: impl FnMut(PlayerId, PlayerKind) -> Box<dyn DecisionAgent> + 'static,
    ) -> Self {
        self.agents = Some(Box::new(factory));
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: impl MatchObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validate the config, seat the players and build the match.
    pub fn build(self) -> Result<Match, MatchError> {
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut seating = rng.for_context("seating");
        let roller = self
            .roller
            .unwrap_or_else(|| Box::new(rng.for_context("dice")));

        let auto_direction = self.config.auto_direction;
        let mut factory: AgentFactory = match self.agents {
            Some(factory) => factory,
            None => {
                let mut console = self.console;
                Box::new(move |_, kind| -> Box<dyn DecisionAgent> {
                    match kind {
                        PlayerKind::Human => {
                            let console = console
                                .get_or_insert_with(|| Console::stdio().shared())
                                .clone();
                            Box::new(HumanAgent::new(console))
                        }
                        PlayerKind::Computer => Box::new(AutoAgent::new(auto_direction)),
                    }
                })
            }
        };

        let roster = build_roster(&self.config, &mut seating, &mut factory);
        Match::from_roster(self.config, roster, roller, self.observers)
    }
}

impl Match {
    /// Assemble a match from an already seated roster.
    pub fn from_roster(
        config: MatchConfig,
        roster: Roster,
        roller: Box<dyn DieRoller>,
        observers: Vec<Box<dyn MatchObserver>>,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        if roster.players.len() != config.player_count
            || roster.agents.player_count() != config.player_count
        {
            return Err(MatchError::RosterSize {
                expected: config.player_count,
                actual: roster.players.len(),
            });
        }

        Ok(Self {
            config,
            state: MatchState::new(roster.players),
            agents: roster.agents,
            roller,
            log: EventLog::new(),
            observers,
            round_open: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current state; serializable as a snapshot after any step.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    // === Setup ===

    /// Seat announcement, first player, direction and fresh dice.
    pub fn setup(&mut self) -> Result<(), MatchError> {
        match self.state.phase {
            Phase::Setup => {}
            Phase::Finished { .. } => return Err(MatchError::Finished),
            _ => return Ok(()),
        }

        let seats = self.state.players.iter().map(|p| (p.id, p.kind)).collect();
        self.emit(MatchEvent::RosterSeated { seats });

        let first = self.determine_first_player()?;
        self.state.first_player = Some(first);
        self.emit(MatchEvent::FirstPlayerChosen { player: first });

        let direction = self.agents[first]
            .choose_direction(first)
            .map_err(|source| MatchError::Agent { player: first.0, source })?;
        self.state.direction = direction;
        self.emit(MatchEvent::DirectionChosen { player: first, direction });

        self.state.current = first;
        rules::refresh_next(&mut self.state);
        self.state.reset_all_dice(self.config.dice_per_round);
        self.state.phase = Phase::AwaitingRoll;
        Ok(())
    }

    // === Turns and rounds ===

    /// Play one turn of the current player.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, MatchError> {
        self.expect_phase(Phase::AwaitingRoll)?;
        if !self.round_open {
            self.round_open = true;
            self.state.round_winner = None;
            self.emit(MatchEvent::RoundStarted {
                starting_player: self.state.current,
            });
        }

        let player = self.state.current;
        self.agent_ready(player, RollPurpose::Turn)?;
        let outcome = rules::play_turn(&mut self.state, self.roller.as_mut());

        self.emit(MatchEvent::TurnRolled {
            player,
            faces: outcome.faces.clone(),
            ones_removed: outcome.ones_removed,
            sixes_passed: outcome.sixes_passed,
            recipient: outcome.recipient,
            dice_left: outcome.dice_left,
        });
        if outcome.round_over {
            self.emit(MatchEvent::RoundWon { winner: player });
        }
        Ok(outcome)
    }

    /// Settle a finished round, ending the match when it cannot continue.
    pub fn settle_round(&mut self) -> Result<Settlement, MatchError> {
        self.expect_phase(Phase::RoundOver)?;
        let round = self.state.round;
        let settlement = rules::settle_round(&mut self.state, self.roller.as_mut(), &self.config);
        self.round_open = false;

        for l in &settlement.liabilities {
            self.emit_in(
                round,
                MatchEvent::LiabilityPaid {
                    player: l.player,
                    faces: l.faces.clone(),
                    pips: l.pips,
                    paid: l.paid,
                    eliminated: l.eliminated,
                },
            );
        }
        self.emit_in(
            round,
            MatchEvent::PotAwarded {
                winner: settlement.winner,
                pot: settlement.pot,
                new_score: settlement.winner_score,
            },
        );
        for &player in &settlement.eliminated {
            self.emit_in(round, MatchEvent::PlayerEliminated { player });
        }
        let scores = self.state.scores();
        self.emit_in(round, MatchEvent::Standings { scores });

        if let Some(reason) = settlement.end {
            self.finish(reason, round);
        }
        Ok(settlement)
    }

    /// Play turns until someone empties their dice, then settle.
    pub fn play_round(&mut self) -> Result<Settlement, MatchError> {
        if self.state.phase != Phase::RoundOver {
            while !self.play_turn()?.round_over {}
        }
        self.settle_round()
    }

    /// Run the whole match from wherever it stands.
    pub fn play(&mut self) -> Result<MatchOutcome, MatchError> {
        self.setup()?;
        while !self.state.is_finished() {
            self.play_round()?;
        }
        self.outcome().ok_or(MatchError::NotStarted)
    }

    /// Summary once the match has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let Phase::Finished { reason } = self.state.phase else {
            return None;
        };
        Some(MatchOutcome {
            result: rules::determine_winners(&self.state.players),
            reason,
            scores: self.state.scores(),
            rounds_played: self.state.rounds_played,
        })
    }

    fn finish(&mut self, reason: EndReason, round: u32) {
        let result = rules::determine_winners(&self.state.players);
        let scores = self.state.scores();
        self.emit_in(
            round,
            MatchEvent::MatchEnded {
                reason,
                winners: result.winners(),
                scores,
            },
        );
    }

    // === Helpers ===

    fn expect_phase(&self, expected: Phase) -> Result<(), MatchError> {
        match self.state.phase {
            Phase::Finished { .. } => Err(MatchError::Finished),
            Phase::Setup => Err(MatchError::NotStarted),
            phase if phase == expected => Ok(()),
            Phase::RoundOver => Err(MatchError::RoundPending),
            Phase::AwaitingRoll => Err(MatchError::RoundInProgress),
        }
    }

    pub(crate) fn agent_ready(
        &mut self,
        player: PlayerId,
        purpose: RollPurpose,
    ) -> Result<(), MatchError> {
        self.agents[player]
            .ready_to_roll(player, purpose)
            .map_err(|source| MatchError::Agent { player: player.0, source })
    }

    pub(crate) fn emit(&mut self, event: MatchEvent) {
        let round = match self.state.phase {
            Phase::Setup => 0,
            _ => self.state.round,
        };
        self.emit_in(round, event);
    }

    fn emit_in(&mut self, round: u32, event: MatchEvent) {
        let record: &EventRecord = self.log.push(round, event);
        for observer in &mut self.observers {
            observer.on_event(record);
        }
    }
}
