//! Match orchestration.
//!
//! - `roster`: seating and agent assignment
//! - `opening`: who rolls first
//! - `engine`: the `Match` state machine and its builder
//! - `report`: console text rendered from the event log

mod engine;
mod opening;
mod report;
mod roster;

pub use engine::{AgentFactory, Match, MatchBuilder, MatchOutcome};
pub use report::{describe, instructions, ConsoleReporter};
pub use roster::{build_roster, seat_kinds, Roster};
