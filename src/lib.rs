//! Terminal status bar with host, CPU, memory and disk usage
//!
//! This is a documentation for sysbar API, run the binary with `--help` for its options
//!
//! # Example
//!
//! ```no_run
//! use sysbar::{Config, Render, Snapshot, SystemProvider};
//!
//! let config = Config::default();
//! let renderer = config.renderer();
//! let snapshot = Snapshot::builder(&SystemProvider)
//!     .host()
//!     .cpu()
//!     .memory()
//!     .disk(&config.mount)
//!     .build();
//! println!("{}", renderer.render(&snapshot));
//! ```

mod config;
mod error;
mod snapshot;
mod theme;

/// Metric sources
pub mod provider;

/// Renderer strategies
pub mod render;

/// Styling primitives for bar cells
pub mod style;

/// Byte unit conversions
pub mod units;

pub use crate::{
    config::{Columns, Config, FALLBACK_COLUMNS, Mode},
    error::{Category, MetricError, MetricResult},
    provider::{MetricsProvider, SystemProvider},
    render::{Plain, Render, StatusBar},
    snapshot::{CpuInfo, DEFAULT_MOUNT, DiskUsage, HostInfo, MemoryInfo, Snapshot, SnapshotBuilder},
    style::Background,
    theme::Theme,
};
