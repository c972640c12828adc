//! Presentations of a [`Snapshot`]

use crate::Snapshot;

mod bar;
mod plain;

pub use {bar::StatusBar, plain::Plain};

pub trait Render {
    /// Printable text, without a trailing newline
    fn render(&self, snapshot: &Snapshot) -> String;

    /// Whether per-core load has to be collected for [`Render::render`]
    fn needs_cpu_load(&self) -> bool {
        false
    }
}
