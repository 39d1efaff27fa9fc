//! Component model: setup once, render many times.

use super::error::Result;
use super::key::ContextKey;
use super::scope::{ScopeId, ScopeTree};
use crate::ui::vnode::VNode;

pub type RenderFn = Box<dyn Fn() -> VNode>;

pub trait Component {
    fn name(&self) -> &'static str;

    /// Runs once per mounted instance, before the first render.
    ///
    /// Values provided here are visible to the setup of every descendant. An
    /// error aborts the mount.
    fn setup(&self, cx: &mut SetupContext<'_>) -> Result<RenderFn>;
}

/// Capability handed to [`Component::setup`].
pub struct SetupContext<'a> {
    tree: &'a mut ScopeTree,
    scope: ScopeId,
}

impl<'a> SetupContext<'a> {
    pub(crate) fn new(tree: &'a mut ScopeTree, scope: ScopeId) -> Self {
        Self { tree, scope }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Makes `value` visible to descendants under `key`, replacing any value
    /// this component provided earlier.
    pub fn provide<T: 'static>(&mut self, key: &ContextKey<T>, value: T) -> Option<T> {
        let scope = self.tree.get_mut(self.scope)?;
        tracing::debug!(key = key.label(), component = scope.name(), "provide");
        scope.provides_mut().provide(key, value)
    }

    /// Looks `key` up in the nearest ancestor that provides it. The component's
    /// own provides are not consulted.
    pub fn inject<T: 'static>(&self, key: &ContextKey<T>) -> Option<&T> {
        let parent = self.tree.get(self.scope)?.parent()?;
        self.tree.lookup(parent, key)
    }

    pub fn has_context<T: 'static>(&self, key: &ContextKey<T>) -> bool {
        self.inject(key).is_some()
    }
}

/// Declarative description of a component subtree, consumed by mounting.
pub struct Element {
    pub(crate) component: Box<dyn Component>,
    pub(crate) children: Vec<Element>,
}

impl Element {
    pub fn new(component: impl Component + 'static) -> Self {
        Self {
            component: Box::new(component),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &'static str {
        self.component.name()
    }

    /// Number of components in this subtree, including the root.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Element::size).sum::<usize>()
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("component", &self.name())
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/component.rs"]
mod tests;
