use crate::core::component::{Component, RenderFn, SetupContext};
use crate::core::error::{Error, Result};
use crate::foo::use_foo_context;
use crate::ui::vnode::h;

/// Greets with the message of the nearest enclosing Foo provider.
///
/// Setup fails with [`Error::MissingContext`] when no ancestor provides one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Foo;

impl Component for Foo {
    fn name(&self) -> &'static str {
        "Foo"
    }

    fn setup(&self, cx: &mut SetupContext<'_>) -> Result<RenderFn> {
        let foo = use_foo_context(cx).ok_or(Error::missing_context("Foo"))?;
        Ok(Box::new(move || h("div", format!("Hi {foo}"))))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/foo.rs"]
mod tests;
