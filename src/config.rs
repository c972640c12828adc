use crate::{Background, Plain, Render, StatusBar, Theme, snapshot::DEFAULT_MOUNT};
use std::path::PathBuf;

/// Columns assumed when stdout is not a terminal
pub const FALLBACK_COLUMNS: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Bar,
    Plain,
}

/// Width the status bar is laid out for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    /// Asked from the terminal on every render
    #[default]
    Terminal,
    Fixed(u16),
}

impl Columns {
    #[must_use]
    pub fn resolve(self) -> usize {
        match self {
            Self::Fixed(n) => n.into(),
            Self::Terminal => terminal_size::terminal_size()
                .map(|(w, _h)| w.0)
                .unwrap_or(FALLBACK_COLUMNS)
                .into(),
        }
    }
}

/// Everything decided once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub columns: Columns,
    /// Mount point whose usage is shown
    pub mount: PathBuf,
    pub background: Background,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            columns: Columns::default(),
            mount: PathBuf::from(DEFAULT_MOUNT),
            background: Background::default(),
            no_color: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::new(self.background, self.no_color)
    }

    #[must_use]
    pub fn renderer(&self) -> Box<dyn Render> {
        match self.mode {
            Mode::Bar => Box::new(StatusBar::new(self.theme(), self.columns)),
            Mode::Plain => Box::new(Plain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_columns_ignore_terminal() {
        assert_eq!(Columns::Fixed(132).resolve(), 132);
        assert!(Columns::Terminal.resolve() > 0);
    }

    #[test]
    fn default_is_bar_on_root() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Bar);
        assert_eq!(config.mount, PathBuf::from("/"));
        assert!(!config.renderer().needs_cpu_load());
    }

    #[test]
    fn plain_mode_wants_core_load() {
        let config = Config {
            mode: Mode::Plain,
            ..Config::default()
        };
        assert!(config.renderer().needs_cpu_load());
    }
}
