use crate::types::Role;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Need at least {required} players for {teams} teams, have {actual}")]
    PoolTooSmall {
        teams: usize,
        required: usize,
        actual: usize,
    },

    #[error("Maximum {max} players allowed, have {actual}")]
    PoolTooLarge { max: usize, actual: usize },

    #[error("Need at least 2 teams, asked for {0}")]
    TooFewTeams(usize),

    #[error("Invalid player '{name}': {reason}")]
    InvalidPlayer { name: String, reason: String },

    #[error("Role {role} has {eligible} eligible players, need {required}")]
    RoleShortfall {
        role: Role,
        eligible: usize,
        required: usize,
    },

    #[error("No open slot for '{name}' — reshuffle and draft again")]
    Unplaceable { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DraftResult<T> = Result<T, DraftError>;
