//! Core match types: dice, players, direction, state, events, RNG, configuration.
//!
//! These are plain values. The rules that move them live in `rules`, and the
//! engine that sequences them with agents lives in `game`.

pub mod config;
pub mod die;
pub mod direction;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{MatchConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use die::{Die, DieRoller, Face, ScriptedRoller};
pub use direction::Direction;
pub use event::{EndReason, EventLog, EventRecord, MatchEvent, MatchObserver};
pub use player::{Dice, Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchSnapshot, MatchState, Phase, SeatView};
