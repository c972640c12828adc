use crate::style::{Adaptive, Align, Background, CellStyle, Color};

const BAR_FG: Adaptive = Adaptive {
    light: Color::hex(0xFF_FFFF),
    dark: Color::hex(0x8C_ABFF),
};
const BAR_BG: Adaptive = Adaptive {
    light: Color::hex(0x00_0000),
    dark: Color::hex(0x51_2B81),
};
const HIGHLIGHT_BG: Color = Color::hex(0x35_155D);
const TEXT_FG: Color = Color::hex(0xFF_FFFF);

/// Styles of every status bar cell, resolved for one background
#[derive(Debug, Clone)]
pub struct Theme {
    /// Left of the top line
    pub platform: CellStyle,
    /// Middle of the top line, sized at render time
    pub host: CellStyle,
    /// Right of the top line
    pub cpu: CellStyle,
    /// Left of the bottom line, sized at render time
    pub memory: CellStyle,
    /// Right of the bottom line
    pub disk: CellStyle,
}

impl Theme {
    #[must_use]
    pub fn new(background: Background, no_color: bool) -> Self {
        let bar = CellStyle::new()
            .fg(background.pick(BAR_FG))
            .bg(background.pick(BAR_BG))
            .no_color(no_color);
        let highlight = bar.clone().bg(HIGHLIGHT_BG).bold().padding(1, 1);

        Self {
            platform: highlight.clone().margin_right(1),
            host: bar.clone().fg(TEXT_FG).bold().align(Align::Center),
            cpu: highlight.margin_left(1),
            memory: bar.clone().align(Align::Left).padding(1, 1),
            disk: bar.align(Align::Right).padding(1, 1),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Background::default(), false)
    }
}
