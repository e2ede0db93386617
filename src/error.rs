//! Crate-wide error type.

use crate::rival::RivalTrainerType;
use thiserror::Error;

/// Failures that stop encounter setup.
///
/// Pool exhaustion and out-of-range template queries fall back instead.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("no stage species pools configured for rival {0:?}")]
    MissingPools(RivalTrainerType),

    #[error("no trainer config found for rival type {0:?}")]
    MissingConfig(RivalTrainerType),

    #[error("failed to initialize player rival")]
    RivalNotInitialized,

    #[error("no species available for party slot {slot}")]
    NoSpeciesAvailable { slot: usize },

    #[error("failed to find an available wave slot for rival stage {stage}")]
    ScheduleExhausted { stage: u32 },

    #[error("invalid species catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ForgeResult<T> = Result<T, ForgeError>;
