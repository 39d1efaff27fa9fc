//! Rendering backends.
//!
//! The trait keeps the rest of the crate free of `ratatui` types; the headless
//! backend is what tests render into.

use crate::ui::geom::Rect;
use crate::ui::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
