use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least 1 team must be requested")]
    NoTeams,
    #[error("at least {required} participants are required to form {required} teams (got {found})")]
    NotEnoughParticipants { required: usize, found: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("weight for {attribute} must be a finite non-negative number (got {value})")]
    InvalidWeight { attribute: &'static str, value: f64 },
    #[error("history capacity must be at least 1")]
    ZeroHistoryCapacity,
    #[error("unknown algorithm {0:?} (expected \"fast\" or \"best\")")]
    UnknownAlgorithm(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("at least 2 participants are required to draw teams (got {found})")]
    TooFewParticipants { found: usize },
    #[error(transparent)]
    Balance(#[from] BalanceError),
}
