//! Arena of mounted component scopes.
//!
//! Each mounted component owns one [`Scope`]. Scopes form a forest through
//! parent links; context lookups walk those links towards the root and stop at
//! the first scope that provides the key.

use super::component::RenderFn;
use super::context::ContextMap;
use super::error::{Error, Result};
use super::key::ContextKey;
use slotmap::{new_key_type, SlotMap};

new_key_type! { pub struct ScopeId; }

pub struct Scope {
    name: &'static str,
    parent: Option<ScopeId>,
    children: Vec<ScopeId>,
    provides: ContextMap,
    render: Option<RenderFn>,
}

impl Scope {
    fn new(name: &'static str, parent: Option<ScopeId>) -> Self {
        Self {
            name,
            parent,
            children: Vec::new(),
            provides: ContextMap::new(),
            render: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    pub fn provides(&self) -> &ContextMap {
        &self.provides
    }

    pub fn provides_mut(&mut self) -> &mut ContextMap {
        &mut self.provides
    }

    /// `false` until the component's setup has completed.
    pub fn is_ready(&self) -> bool {
        self.render.is_some()
    }

    pub(crate) fn set_render(&mut self, render: RenderFn) {
        self.render = Some(render);
    }

    pub(crate) fn render_fn(&self) -> Option<&RenderFn> {
        self.render.as_ref()
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("provides", &self.provides)
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct ScopeTree {
    arena: SlotMap<ScopeId, Scope>,
    roots: Vec<ScopeId>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, parent: Option<ScopeId>) -> Result<ScopeId> {
        if let Some(parent) = parent {
            if !self.arena.contains_key(parent) {
                return Err(Error::ScopeNotFound(parent));
            }
        }

        let id = self.arena.insert(Scope::new(name, parent));
        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: ScopeId) -> Option<&mut Scope> {
        self.arena.get_mut(id)
    }

    pub fn contains(&self, id: ScopeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn roots(&self) -> &[ScopeId] {
        &self.roots
    }

    /// Walks from `id` (inclusive) towards the root.
    pub fn ancestors(&self, id: ScopeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.arena.contains_key(id).then_some(id),
        }
    }

    /// Nearest value for `key`, searching `from` and then its ancestors.
    pub fn lookup<T: 'static>(&self, from: ScopeId, key: &ContextKey<T>) -> Option<&T> {
        self.ancestors(from)
            .find_map(|(_, scope)| scope.provides.get(key))
    }

    /// Removes `id` and all of its descendants. Returns how many scopes were dropped.
    pub fn remove_subtree(&mut self, id: ScopeId) -> Result<usize> {
        let parent = self.arena.get(id).ok_or(Error::ScopeNotFound(id))?.parent;
        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(p) => p.children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(scope) = self.arena.remove(next) {
                stack.extend(scope.children);
                removed += 1;
            }
        }
        Ok(removed)
    }
}

pub struct Ancestors<'a> {
    tree: &'a ScopeTree,
    next: Option<ScopeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (ScopeId, &'a Scope);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let scope = self.tree.arena.get(id)?;
        self.next = scope.parent;
        Some((id, scope))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/scope.rs"]
mod tests;
