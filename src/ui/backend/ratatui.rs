use crate::ui::backend::Backend;
use crate::ui::geom::{Pos, Rect};
use crate::ui::painter::PaintCmd;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        let widget = PaintWidget { cmds };
        self.frame.render_widget(widget, area.into());
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
///
/// Draws into an inline viewport below the cursor instead of taking over the
/// whole screen.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn inline(stdout: io::Stdout, height: u16) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.terminal.show_cursor()
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::Clear { rect } => clear_rect(buf, *rect),
                PaintCmd::Text { pos, text, clip } => draw_text(buf, *pos, text, *clip),
            }
        }
    }
}

fn clear_rect(buf: &mut Buffer, rect: Rect) {
    if rect.is_empty() {
        return;
    }
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, clip: Option<Rect>) {
    let area: Rect = buf.area.into();
    // Default clip is the buffer area so we never partially render wide glyphs at the edge.
    let clip = clip.map(|c| c.intersect(area)).unwrap_or(area);
    let mut x = pos.x;
    let y = pos.y;
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if !clip.contains(Pos::new(x, y)) {
            x = x.saturating_add(w);
            continue;
        }

        let Some(cell) = buf.cell_mut((x, y)) else {
            break;
        };
        if g.chars().count() == 1 {
            if let Some(ch) = g.chars().next() {
                cell.set_char(ch);
            }
        } else {
            // Grapheme cluster (e.g. combining marks).
            cell.set_symbol(g);
        }

        // Wide glyphs occupy the following cells; clear what was there.
        for dx in 1..w {
            let Some(cell) = buf.cell_mut((x.saturating_add(dx), y)) else {
                break;
            };
            cell.reset();
        }

        x = x.saturating_add(w);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
