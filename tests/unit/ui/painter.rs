use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.clear_rect(Rect::new(0, 0, 1, 1));
    p.text(Pos::new(0, 0), "hi");
    p.text_clipped(Pos::new(0, 1), "there", Rect::new(0, 1, 2, 1));
    assert_eq!(p.cmds().len(), 3);
    assert_eq!(
        p.cmds()[1],
        PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "hi".to_string(),
            clip: None,
        }
    );

    p.clear();
    assert!(p.cmds().is_empty());
}
