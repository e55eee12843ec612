//! Decision agents.
//!
//! Every seat gets a `DecisionAgent` at construction. The engine consults it
//! for the direction of play (first player only) and as a pacing gate before
//! each roll. Humans answer through a `Console`; computers answer at once.

mod auto;
mod console;

pub use auto::AutoAgent;
pub use console::{Console, HumanAgent, SharedConsole};

use crate::core::{Direction, PlayerId};
use crate::error::AgentError;

/// Why a player is about to roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollPurpose {
    /// Opening roll deciding who starts. `attempt` 0 is the first roll.
    Opening { attempt: u32 },
    /// A regular turn.
    Turn,
}

/// Source of a player's decisions.
pub trait DecisionAgent {
    /// Choose the direction of play for the whole match.
    fn choose_direction(&mut self, player: PlayerId) -> Result<Direction, AgentError>;

    /// Called before every roll. Returns once the player is ready.
    fn ready_to_roll(&mut self, _player: PlayerId, _purpose: RollPurpose) -> Result<(), AgentError> {
        Ok(())
    }
}
