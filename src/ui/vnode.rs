//! Rendered element trees.
//!
//! Render functions return a [`VNode`]; the runtime stitches child components
//! underneath and the painter lays the result out as rows of text.

use super::geom::{Pos, Rect};
use super::painter::Painter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VNode {
    Element {
        tag: &'static str,
        text: Option<String>,
        children: Vec<VNode>,
    },
    Text(String),
    Fragment(Vec<VNode>),
}

/// Element `tag` whose only content is `text`.
pub fn h(tag: &'static str, text: impl Into<String>) -> VNode {
    VNode::Element {
        tag,
        text: Some(text.into()),
        children: Vec::new(),
    }
}

impl VNode {
    pub fn element(tag: &'static str) -> Self {
        VNode::Element {
            tag,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        VNode::Fragment(Vec::new())
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            VNode::Element { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } | VNode::Fragment(children) => children,
            VNode::Text(_) => &[],
        }
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.append_children([child]);
        self
    }

    pub fn append_children(&mut self, extra: impl IntoIterator<Item = VNode>) {
        match self {
            VNode::Element { children, .. } | VNode::Fragment(children) => children.extend(extra),
            VNode::Text(_) => {
                let text = std::mem::replace(self, VNode::empty());
                let mut nodes = vec![text];
                nodes.extend(extra);
                *self = VNode::Fragment(nodes);
            }
        }
    }

    /// All text in document order, like the DOM's `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Element { text, children, .. } => {
                if let Some(text) = text {
                    out.push_str(text);
                }
                for child in children {
                    child.collect_text(out);
                }
            }
            VNode::Text(text) => out.push_str(text),
            VNode::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Block layout: one row per text-bearing node.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_lines(&mut out);
        out
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        match self {
            VNode::Element { text, children, .. } => {
                if let Some(text) = text {
                    out.push(text.clone());
                }
                for child in children {
                    child.collect_lines(out);
                }
            }
            VNode::Text(text) => out.push(text.clone()),
            VNode::Fragment(children) => {
                for child in children {
                    child.collect_lines(out);
                }
            }
        }
    }

    /// Paints into `area`, returning the number of rows written.
    pub fn paint(&self, painter: &mut Painter, area: Rect) -> u16 {
        painter.clear_rect(area);
        let mut rest = area;
        let mut rows = 0;
        for line in self.lines() {
            if rest.is_empty() {
                break;
            }
            let (row, below) = rest.split_top(1);
            painter.text_clipped(Pos::new(row.x, row.y), line, row);
            rest = below;
            rows += 1;
        }
        rows
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/vnode.rs"]
mod tests;
