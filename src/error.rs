use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Independent section of a [`Snapshot`](crate::Snapshot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Host,
    Cpu,
    Memory,
    Disk,
    CpuLoad,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}",
            match &self {
                Self::Host => "host",
                Self::Cpu => "cpu",
                Self::Memory => "memory",
                Self::Disk => "disk",
                Self::CpuLoad => "cpu load",
            }
        )
    }
}

/// Failure of a single provider query
#[derive(Debug, Error)]
pub enum MetricError {
    #[error("{category} metrics unavailable: {reason}")]
    Unavailable { category: Category, reason: String },
}

impl MetricError {
    pub fn unavailable(category: Category, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            category,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Unavailable { category, .. } => *category,
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;
