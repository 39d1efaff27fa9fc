use super::*;

#[test]
fn keys_with_same_label_are_distinct() {
    let a: ContextKey<String> = ContextKey::new("foo");
    let b: ContextKey<String> = ContextKey::new("foo");
    assert_ne!(a.id(), b.id());
    assert_ne!(a, b);
    assert_eq!(a.label(), b.label());
}

#[test]
fn key_equals_itself() {
    let a: ContextKey<u32> = ContextKey::new("n");
    assert_eq!(a, a);
}

#[test]
fn ids_increase_monotonically() {
    let a: ContextKey<()> = ContextKey::new("a");
    let b: ContextKey<()> = ContextKey::new("b");
    assert!(b.id() > a.id());
}

#[test]
fn debug_shows_label_and_id() {
    let key: ContextKey<()> = ContextKey::new("theme");
    let text = format!("{key:?}");
    assert!(text.starts_with("ContextKey(theme#"));
}
