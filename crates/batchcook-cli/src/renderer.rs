//! Markdown rendering for the terminal.
//!
//! Rich output goes through a termimad skin; `--no-color` prints the
//! markdown source untouched, which is also what pipes and tests see.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(kitchen_skin),
        }
    }

    /// Renders markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.skin {
            Some(skin) => print!("{}", skin.term_text(markdown)),
            None => print!("{markdown}"),
        }
        Ok(())
    }
}

fn kitchen_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::DarkYellow);
    skin.bold.set_fg(Color::Green);
    skin.italic.set_fg(Color::Magenta);
    skin.inline_code.set_fg(Color::Cyan);
    skin.inline_code.set_bg(Color::AnsiValue(236));
    skin
}
