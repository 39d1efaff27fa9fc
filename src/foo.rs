//! The Foo context: a single message shared with a component subtree.

use crate::core::component::SetupContext;
use crate::core::key::ContextKey;
use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

static KEY: LazyLock<ContextKey<FooMessage>> = LazyLock::new(|| ContextKey::new("foo"));

/// The provided message. Cloning shares the same value.
#[derive(Clone)]
pub struct FooMessage(Rc<dyn fmt::Display>);

impl FooMessage {
    pub fn new(message: impl fmt::Display + 'static) -> Self {
        Self(Rc::new(message))
    }

    /// `true` when both handles share one value.
    pub fn ptr_eq(&self, other: &FooMessage) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for FooMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for FooMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FooMessage").field(&self.0.to_string()).finish()
    }
}

/// Provides `message` to every descendant of the calling component.
pub fn use_foo(
    cx: &mut SetupContext<'_>,
    message: impl fmt::Display + 'static,
) -> Option<FooMessage> {
    provide_foo(cx, FooMessage::new(message))
}

/// Like [`use_foo`] for an already shared message; the value is not wrapped again.
pub fn provide_foo(cx: &mut SetupContext<'_>, message: FooMessage) -> Option<FooMessage> {
    cx.provide(&KEY, message)
}

/// The message from the nearest ancestor that called [`use_foo`].
pub fn use_foo_context(cx: &SetupContext<'_>) -> Option<FooMessage> {
    cx.inject(&KEY).cloned()
}

#[cfg(test)]
#[path = "../tests/unit/foo.rs"]
mod tests;
