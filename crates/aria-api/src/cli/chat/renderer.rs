//! Terminal markdown rendering for assistant turns.
//!
//! Briefings come back as markdown (emoji section headings, bullet lists);
//! `ChatRenderer` formats them through `termimad` for terminal display.

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Terminal markdown renderer.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    /// Create a new renderer with the ARIA accent styling.
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render a markdown reply for terminal display.
    pub fn render(&self, markdown: &str) -> String {
        format!("{}", self.skin.term_text(markdown))
    }

    /// Print the timing footer after a reply.
    pub fn print_latency_footer(&self, response_ms: u64) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "\n  {} {}",
            console::style("|").dim(),
            console::style(format!("{seconds:.1}s")).dim()
        );
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_content() {
        let renderer = ChatRenderer::new();
        let rendered = renderer.render("plain text reply");
        assert!(rendered.contains("plain text reply"));
    }
}
