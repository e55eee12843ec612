//! # dice-mafia
//!
//! Match engine for "Mafia" dice, a multi-round elimination game for 2 to 8
//! players, human or computer.
//!
//! ## Rules in brief
//!
//! Each round every player holds five dice. On a turn the current player
//! rolls everything they hold: 1s leave the game, 6s are passed one by one
//! to the next player in the direction of play. Whoever runs out of dice
//! wins the round and collects what the others roll with their leftovers.
//! A player who cannot pay is eliminated.
//!
//! ## Design Principles
//!
//! 1. **Rules are plain transitions**: `rules` functions move a
//!    `MatchState` and never block or prompt.
//!
//! 2. **Agents at the seams**: every seat has a `DecisionAgent`; the engine
//!    never asks whether a seat is human.
//!
//! 3. **Everything is an event**: presentation renders from the event log,
//!    which can also be exported as NDJSON.
//!
//! 4. **Seeded randomness**: one seed reproduces the seating and every die.
//!
//! ## Modules
//!
//! - `core`: dice, players, direction, state, events, RNG, configuration
//! - `rules`: adjacency, turn resolution, settlement, winners
//! - `agents`: decision agents and the console they prompt through
//! - `game`: the `Match` engine, roster construction, console reporting
//! - `error`: error types

pub mod agents;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Die, DieRoller, Direction, EndReason, EventLog, EventRecord, Face, GameRng, GameRngState,
    MatchConfig, MatchEvent, MatchObserver, MatchSnapshot, MatchState, Phase, Player, PlayerId,
    PlayerKind, PlayerMap, ScriptedRoller,
};

pub use crate::agents::{AutoAgent, Console, DecisionAgent, HumanAgent, RollPurpose, SharedConsole};

pub use crate::game::{ConsoleReporter, Match, MatchBuilder, MatchOutcome};

pub use crate::rules::{MatchResult, Settlement, TurnOutcome};

pub use crate::error::{AgentError, ConfigError, MatchError};
