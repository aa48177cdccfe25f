//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use termimad::{MadSkin, crossterm::style::Color};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()
    }

    /// Render markdown text to any writer
    ///
    /// Plain mode writes the markdown unchanged so output stays greppable.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if self.rich_enabled {
            write!(out, "{}", self.skin.term_text(markdown))
        } else {
            write!(out, "{markdown}")
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_writes_markdown_verbatim() {
        let renderer = TerminalRenderer::new(false);
        let mut out = Vec::new();
        renderer
            .render_to(&mut out, "## Hives\n\n| a | b |\n")
            .expect("Failed to render");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "## Hives\n\n| a | b |\n");
    }

    #[test]
    fn test_rich_renderer_keeps_text() {
        let renderer = TerminalRenderer::new(true);
        let mut out = Vec::new();
        renderer
            .render_to(&mut out, "**Success:** Saved\n")
            .expect("Failed to render");
        let rendered = String::from_utf8(out).expect("utf-8");
        assert!(rendered.contains("Saved"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
