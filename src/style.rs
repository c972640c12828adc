//! Cell styling, measuring and joining on top of plain ANSI escape sequences

use bitflags::bitflags;
use const_format::formatcp;
use std::fmt::{Display, Formatter, Result as FmtResult};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ESC: &str = "\x1b";
const CSI: &str = formatcp!("{ESC}[");
const RESET: &str = formatcp!("{CSI}0m");

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attrs: u8 {
        const BOLD = 0x01;
    }
}

impl Display for Attrs {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.contains(Self::BOLD) {
            write!(f, "{CSI}1m")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8, u8, u8);

impl Color {
    /// Color from a `0xRRGGBB` literal
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Self((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    fn fg(self) -> impl Display {
        let Self(r, g, b) = self;
        format!("{CSI}38;2;{r};{g};{b}m")
    }

    fn bg(self) -> impl Display {
        let Self(r, g, b) = self;
        format!("{CSI}48;2;{r};{g};{b}m")
    }
}

/// Pair of colors picked by terminal background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adaptive {
    pub light: Color,
    pub dark: Color,
}

/// Terminal background the colors are tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    Light,
    #[default]
    Dark,
}

impl Background {
    /// `light` (any case) selects [`Background::Light`], anything else is dark
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(x) if x.eq_ignore_ascii_case("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn pick(self, color: Adaptive) -> Color {
        match self {
            Self::Light => color.light,
            Self::Dark => color.dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How one cell of the bar looks.
///
/// `width`, when set, is the whole cell including padding but excluding margins. Longer text
/// is cut to fit; shorter text is aligned inside.
#[derive(Debug, Clone, Default)]
pub struct CellStyle {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Attrs,
    padding: (usize, usize),
    margin: (usize, usize),
    margin_bg: Option<Color>,
    align: Align,
    width: Option<usize>,
    no_color: bool,
}

impl CellStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Sets the background; margins keep the first background they were given
    #[must_use]
    pub fn bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            margin_bg: self.margin_bg.or(Some(color)),
            ..self
        }
    }

    #[must_use]
    pub fn bold(self) -> Self {
        Self {
            attrs: self.attrs | Attrs::BOLD,
            ..self
        }
    }

    #[must_use]
    pub fn padding(self, left: usize, right: usize) -> Self {
        Self {
            padding: (left, right),
            ..self
        }
    }

    #[must_use]
    pub fn margin_left(self, n: usize) -> Self {
        Self {
            margin: (n, self.margin.1),
            ..self
        }
    }

    #[must_use]
    pub fn margin_right(self, n: usize) -> Self {
        Self {
            margin: (self.margin.0, n),
            ..self
        }
    }

    #[must_use]
    pub fn align(self, align: Align) -> Self {
        Self { align, ..self }
    }

    #[must_use]
    pub fn width(self, width: usize) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    /// Drops every escape sequence, keeping only the layout
    #[must_use]
    pub fn no_color(self, no_color: bool) -> Self {
        Self { no_color, ..self }
    }

    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let (pad_left, pad_right) = self.padding;
        let text = match self.width {
            Some(width) => {
                let inner = width.saturating_sub(pad_left + pad_right);
                align(&truncate(text, inner), inner, self.align)
            }
            None => text.to_owned(),
        };
        let mut body = format!("{}{text}{}", " ".repeat(pad_left), " ".repeat(pad_right));
        if let Some(width) = self.width {
            body = truncate(&body, width);
        }

        let mut out = self.paint(&" ".repeat(self.margin.0), self.margin_bg, Attrs::empty());
        out += &self.paint(&body, self.bg, self.attrs);
        out += &self.paint(&" ".repeat(self.margin.1), self.margin_bg, Attrs::empty());
        out
    }

    fn paint(&self, text: &str, bg: Option<Color>, attrs: Attrs) -> String {
        if text.is_empty() || self.no_color {
            return text.to_owned();
        }
        let fg = self.fg.map(|c| c.fg().to_string()).unwrap_or_default();
        let bg = bg.map(|c| c.bg().to_string()).unwrap_or_default();
        format!("{fg}{bg}{attrs}{text}{RESET}")
    }
}

/// Terminal columns taken by `s`, not counting escape sequences
#[must_use]
pub fn width(s: &str) -> usize {
    let mut res = 0;
    let mut rest = s;
    while let Some(esc) = rest.find('\x1b') {
        res += rest[..esc].width();
        rest = &rest[esc + 1..];
        if let Some(params) = rest.strip_prefix('[') {
            // parameters up to the final byte
            rest = params
                .find(|c| ('@'..='~').contains(&c))
                .map_or("", |end| &params[end + 1..]);
        }
    }
    res + rest.width()
}

/// Longest prefix of `s` at most `max` columns wide
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_owned();
    }
    let mut res = String::new();
    let mut taken = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if taken + w > max {
            break;
        }
        taken += w;
        res.push(c);
    }
    res
}

fn align(s: &str, width: usize, align: Align) -> String {
    let short = width.saturating_sub(s.width());
    let (left, right) = match align {
        Align::Left => (0, short),
        Align::Right => (short, 0),
        Align::Center => (short / 2, short - short / 2),
    };
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}

fn block_width(block: &str) -> usize {
    block.lines().map(width).max().unwrap_or(0)
}

/// Puts blocks side by side, top aligned; shorter blocks are padded with blank lines
#[must_use]
pub fn join_horizontal(blocks: &[&str]) -> String {
    let height = blocks.iter().map(|b| b.lines().count()).max().unwrap_or(0);
    let widths = blocks.iter().map(|b| block_width(b)).collect::<Vec<_>>();
    (0..height)
        .map(|row| {
            blocks
                .iter()
                .zip(&widths)
                .map(|(block, &w)| {
                    let line = block.lines().nth(row).unwrap_or("");
                    format!("{line}{}", " ".repeat(w.saturating_sub(width(line))))
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stacks blocks, left aligned, padding every line to the widest one
#[must_use]
pub fn join_vertical(blocks: &[&str]) -> String {
    let full = blocks.iter().map(|b| block_width(b)).max().unwrap_or(0);
    blocks
        .iter()
        .flat_map(|b| b.lines())
        .map(|line| format!("{line}{}", " ".repeat(full.saturating_sub(width(line)))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Uppercases the first letter of every word and lowercases the rest
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            res.extend(c.to_uppercase());
        } else {
            res.extend(c.to_lowercase());
        }
        word_start = !c.is_alphanumeric();
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PURPLE: Color = Color::hex(0x51_2B81);

    #[test]
    fn hex_colors() {
        assert_eq!(Color::hex(0x35_155D), Color(0x35, 0x15, 0x5D));
        assert_eq!(PURPLE.bg().to_string(), "\x1b[48;2;81;43;129m");
    }

    #[test]
    fn width_skips_escapes() {
        let styled = CellStyle::new().fg(PURPLE).bg(PURPLE).bold().render("abc");
        assert!(styled.starts_with('\x1b'));
        assert_eq!(width(&styled), 3);
        assert_eq!(width("日本"), 4);
        assert_eq!(width(""), 0);
    }

    #[test]
    fn width_agrees_with_layout() {
        let heart = "a\u{2764}\u{fe0f}b";
        assert_eq!(width(heart), heart.width());
        let styled = CellStyle::new().fg(PURPLE).render(heart);
        assert_eq!(width(&styled), heart.width());
        let cell = CellStyle::new().width(heart.width()).no_color(true);
        assert_eq!(cell.render(heart), heart);
    }

    #[test]
    fn padding_and_margins() {
        let cell = CellStyle::new().padding(1, 1).margin_right(1).no_color(true);
        assert_eq!(cell.render("x"), " x  ");
        let cell = CellStyle::new().padding(1, 1).margin_left(1).no_color(true);
        assert_eq!(cell.render(""), "   ");
    }

    #[test]
    fn fixed_width_alignment() {
        let cell = CellStyle::new().width(7).no_color(true);
        assert_eq!(cell.clone().render("abc"), "abc    ");
        assert_eq!(cell.clone().align(Align::Right).render("abc"), "    abc");
        assert_eq!(cell.align(Align::Center).render("abc"), "  abc  ");
    }

    #[test]
    fn width_includes_padding() {
        let cell = CellStyle::new().padding(1, 1).width(6).no_color(true);
        assert_eq!(cell.render("ab"), " ab   ");
    }

    #[test]
    fn overlong_text_is_cut() {
        let cell = CellStyle::new().padding(1, 1).width(5).no_color(true);
        assert_eq!(cell.render("abcdef"), " abc ");
        let cell = CellStyle::new().padding(1, 1).width(1).no_color(true);
        assert_eq!(cell.render("abc"), " ");
    }

    #[test]
    fn zero_width_renders_nothing() {
        let cell = CellStyle::new().fg(PURPLE).bg(PURPLE).width(0);
        assert_eq!(cell.render("host"), "");
    }

    #[test]
    fn margins_take_background() {
        let cell = CellStyle::new().bg(PURPLE).margin_left(1);
        assert_eq!(
            cell.render("a"),
            format!("{0} {RESET}{0}a{RESET}", PURPLE.bg())
        );
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate("日本語", 3), "日");
        assert_eq!(truncate("abc", 5), "abc");
    }

    #[test]
    fn joins() {
        assert_eq!(join_horizontal(&["ab", "c\nd", "e"]), "abce\n  d ");
        assert_eq!(join_vertical(&["abc", "d"]), "abc\nd  ");
        assert_eq!(join_horizontal(&[]), "");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("ubuntu"), "Ubuntu");
        assert_eq!(title_case("arch linux"), "Arch Linux");
        assert_eq!(title_case("macOS"), "Macos");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn background_by_name() {
        assert_eq!(Background::from_name(Some("LIGHT")), Background::Light);
        assert_eq!(Background::from_name(Some("dark")), Background::Dark);
        assert_eq!(Background::from_name(None), Background::Dark);
    }
}
