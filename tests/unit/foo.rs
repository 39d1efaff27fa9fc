use super::*;
use crate::core::key::ContextKey;
use crate::core::scope::ScopeTree;

#[test]
fn use_foo_context_reads_ancestor_message() {
    let mut tree = ScopeTree::new();
    let provider = tree.insert("provider", None).unwrap();
    let consumer = tree.insert("consumer", Some(provider)).unwrap();

    use_foo(&mut SetupContext::new(&mut tree, provider), "world");

    let cx = SetupContext::new(&mut tree, consumer);
    let message = use_foo_context(&cx).unwrap();
    assert_eq!(message.to_string(), "world");
}

#[test]
fn use_foo_context_is_none_without_provider() {
    let mut tree = ScopeTree::new();
    let root = tree.insert("root", None).unwrap();
    let child = tree.insert("child", Some(root)).unwrap();

    assert!(use_foo_context(&SetupContext::new(&mut tree, child)).is_none());
}

#[test]
fn use_foo_accepts_any_display_value() {
    let mut tree = ScopeTree::new();
    let provider = tree.insert("provider", None).unwrap();
    let consumer = tree.insert("consumer", Some(provider)).unwrap();

    use_foo(&mut SetupContext::new(&mut tree, provider), 42);
    let message = use_foo_context(&SetupContext::new(&mut tree, consumer)).unwrap();
    assert_eq!(format!("Hi {message}"), "Hi 42");
}

#[test]
fn use_foo_twice_returns_previous_message() {
    let mut tree = ScopeTree::new();
    let provider = tree.insert("provider", None).unwrap();
    let mut cx = SetupContext::new(&mut tree, provider);

    assert!(use_foo(&mut cx, "first").is_none());
    let prev = use_foo(&mut cx, "second").unwrap();
    assert_eq!(prev.to_string(), "first");
}

#[test]
fn unrelated_key_with_same_label_is_invisible() {
    let other: ContextKey<FooMessage> = ContextKey::new("foo");
    let mut tree = ScopeTree::new();
    let provider = tree.insert("provider", None).unwrap();
    let consumer = tree.insert("consumer", Some(provider)).unwrap();

    SetupContext::new(&mut tree, provider).provide(&other, FooMessage::new("impostor"));
    assert!(use_foo_context(&SetupContext::new(&mut tree, consumer)).is_none());
}

#[test]
fn message_debug_shows_text() {
    assert_eq!(format!("{:?}", FooMessage::new("x")), "FooMessage(\"x\")");
}

#[test]
fn provide_foo_keeps_the_same_value() {
    let message = FooMessage::new("once");
    let mut tree = ScopeTree::new();
    let provider = tree.insert("provider", None).unwrap();
    let consumer = tree.insert("consumer", Some(provider)).unwrap();

    provide_foo(&mut SetupContext::new(&mut tree, provider), message.clone());
    let seen = use_foo_context(&SetupContext::new(&mut tree, consumer)).unwrap();

    assert!(seen.ptr_eq(&message));
    assert!(!seen.ptr_eq(&FooMessage::new("once")));
}
