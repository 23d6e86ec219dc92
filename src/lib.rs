pub mod charts;
pub mod config;
pub mod core;
pub mod dash;
pub mod render;
pub mod runtime;
pub mod stats;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// No observation fell inside any bin, so percentages are undefined.
    #[error("no observations fall inside the requested bin range")]
    EmptyRange,

    /// Mean, median or box statistics requested over an empty sequence.
    #[error("statistic is undefined for an empty sequence")]
    EmptySequence,

    /// Bin parameters would produce more than [`stats::MAX_BINS`] bins.
    #[error("bin parameters produce too many bins")]
    TooManyBins,

    #[error("serialization error")]
    Serialization,
}

pub type Result<T> = std::result::Result<T, error_stack::Report<StatsError>>;

pub mod prelude {
    pub use crate::charts::*;
    pub use crate::config::*;
    pub use crate::core::*;
    pub use crate::dash::*;
    pub use crate::render::*;
    pub use crate::runtime::*;
    pub use crate::stats::*;
    pub use crate::{Result, StatsError};
}
