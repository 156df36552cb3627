//! Noise removal configuration.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::reducer::FilterKind;

/// How the per-cell pass is scheduled. Both modes produce identical output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Execution {
    /// Rows ascending, then columns ascending, on the calling thread.
    Sequential,
    /// Row-aligned output chunks spread over the rayon thread pool.
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DenoiseConfig {
    pub filter: FilterKind,
    pub execution: Execution,
}

impl DenoiseConfig {
    pub fn with_filter(mut self, filter: FilterKind) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }
}
