use crate::core::component::{Component, RenderFn, SetupContext};
use crate::core::error::Result;
use crate::foo::{provide_foo, FooMessage};
use crate::ui::vnode::VNode;
use std::fmt;

/// Provides a message to its subtree and renders only its children.
#[derive(Clone, Debug)]
pub struct FooProvider {
    message: FooMessage,
}

impl FooProvider {
    pub fn new(message: impl fmt::Display + 'static) -> Self {
        Self {
            message: FooMessage::new(message),
        }
    }

    pub fn message(&self) -> &FooMessage {
        &self.message
    }
}

impl Component for FooProvider {
    fn name(&self) -> &'static str {
        "FooProvider"
    }

    fn setup(&self, cx: &mut SetupContext<'_>) -> Result<RenderFn> {
        provide_foo(cx, self.message.clone());
        Ok(Box::new(VNode::empty))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/provider.rs"]
mod tests;
