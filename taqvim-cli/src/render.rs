//! Colored terminal rendering for engine types.
//!
//! Extension traits adding owo_colors accents: each item kind keeps the
//! accent color it has in the dashboard.

use owo_colors::OwoColorize;
use taqvim_core::{ItemKind, Stage};

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ItemKind {
    fn render(&self) -> String {
        match self {
            ItemKind::Meeting => self.label().blue().to_string(),
            ItemKind::Assignment => self.label().green().to_string(),
            ItemKind::Deadline => self.label().red().to_string(),
            ItemKind::Event => self.label().magenta().to_string(),
        }
    }
}

impl Render for Stage {
    fn render(&self) -> String {
        self.label().dimmed().to_string()
    }
}

/// Marker dot in the kind's accent color.
pub fn kind_dot(kind: ItemKind) -> String {
    match kind {
        ItemKind::Meeting => "●".blue().to_string(),
        ItemKind::Assignment => "●".green().to_string(),
        ItemKind::Deadline => "●".red().to_string(),
        ItemKind::Event => "●".magenta().to_string(),
    }
}
