use super::*;
use crate::ui::painter::PaintCmd;

#[test]
fn h_builds_text_element() {
    let node = h("div", "Hi world");
    assert_eq!(node.tag(), Some("div"));
    assert_eq!(node.text_content(), "Hi world");
    assert!(node.children().is_empty());
}

#[test]
fn text_content_is_document_order() {
    let node = h("div", "a")
        .with_child(VNode::Text("b".to_string()))
        .with_child(VNode::Fragment(vec![h("span", "c")]));
    assert_eq!(node.text_content(), "abc");
    assert_eq!(node.lines(), vec!["a", "b", "c"]);
}

#[test]
fn appending_to_text_wraps_in_fragment() {
    let mut node = VNode::Text("x".to_string());
    node.append_children([h("p", "y")]);
    assert_eq!(node.tag(), None);
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.text_content(), "xy");
}

#[test]
fn empty_fragment_has_no_text() {
    assert_eq!(VNode::empty().text_content(), "");
    assert!(VNode::element("div").lines().is_empty());
}

#[test]
fn paint_writes_one_row_per_line_and_clips() {
    let node = h("div", "one").with_child(h("div", "two"));
    let mut painter = Painter::new();
    let area = Rect::new(0, 0, 10, 1);

    let rows = node.paint(&mut painter, area);
    assert_eq!(rows, 1);
    assert_eq!(painter.cmds()[0], PaintCmd::Clear { rect: area });
    assert_eq!(
        painter.cmds()[1],
        PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "one".to_string(),
            clip: Some(Rect::new(0, 0, 10, 1)),
        }
    );
    assert_eq!(painter.cmds().len(), 2);
}
