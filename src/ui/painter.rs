use super::geom::{Pos, Rect};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank out every cell in `rect`.
    Clear { rect: Rect },
    Text {
        pos: Pos,
        text: String,
        clip: Option<Rect>,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn push(&mut self, cmd: PaintCmd) {
        self.cmds.push(cmd);
    }

    pub fn clear_rect(&mut self, rect: Rect) {
        self.cmds.push(PaintCmd::Clear { rect });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            clip: None,
        });
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            clip: Some(clip),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/painter.rs"]
mod tests;
