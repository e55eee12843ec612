use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by a decision agent while waiting for an answer.
///
/// Invalid answers are never errors: agents re-prompt until well-formed.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("input closed while waiting for {0}")]
    InputClosed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from driving a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("agent for player {player} failed: {source}")]
    Agent { player: u8, source: AgentError },

    #[error("match is already over")]
    Finished,

    #[error("match has not been set up")]
    NotStarted,

    #[error("round is over and must be settled first")]
    RoundPending,

    #[error("round is still in progress")]
    RoundInProgress,

    #[error("roster has {actual} seats but the config expects {expected}")]
    RosterSize { expected: usize, actual: usize },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("max_rounds must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: max_rounds must be >= 1");
    }

    #[test]
    fn test_agent_error_display() {
        let err = AgentError::InputClosed("a direction".to_string());
        assert_eq!(err.to_string(), "input closed while waiting for a direction");
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::Agent {
            player: 3,
            source: AgentError::InputClosed("a roll".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "agent for player 3 failed: input closed while waiting for a roll"
        );
        assert_eq!(MatchError::Finished.to_string(), "match is already over");
        assert_eq!(
            MatchError::RosterSize { expected: 4, actual: 3 }.to_string(),
            "roster has 3 seats but the config expects 4"
        );
    }
}
