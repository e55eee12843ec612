use super::DecisionAgent;
use crate::core::{Direction, PlayerId};
use crate::error::AgentError;

/// Computer-controlled seat: answers every question immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoAgent {
    direction: Direction,
}

impl AutoAgent {
    /// Agent that always picks `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl DecisionAgent for AutoAgent {
    fn choose_direction(&mut self, _player: PlayerId) -> Result<Direction, AgentError> {
        Ok(self.direction)
    }
}
