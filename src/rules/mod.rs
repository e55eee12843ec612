//! Game rules as transitions over `MatchState`.
//!
//! - `adjacency`: who plays next in the direction of play
//! - `turn`: one roll, its 1s and 6s, and the round-over check
//! - `settlement`: the pot, eliminations and the next round
//! - `standings`: maximum search and match winners
//!
//! Rules never talk to agents; the engine in `game` sequences them.

mod adjacency;
mod settlement;
mod standings;
mod turn;

pub use adjacency::{neighbor, refresh_next};
pub use settlement::{settle_round, Liability, Settlement};
pub use standings::{determine_winners, max_indices, MatchResult};
pub use turn::{play_turn, resolve_rolled_dice, TurnOutcome};
