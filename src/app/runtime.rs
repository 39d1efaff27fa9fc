//! Mounting, rendering and unmounting component trees.

use crate::core::component::{Element, SetupContext};
use crate::core::error::{Error, Result};
use crate::core::scope::{ScopeId, ScopeTree};
use crate::ui::backend::Backend;
use crate::ui::geom::Rect;
use crate::ui::painter::Painter;
use crate::ui::vnode::VNode;

#[derive(Debug, Default)]
pub struct App {
    scopes: ScopeTree,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `element` as a new root.
    pub fn mount(&mut self, element: Element) -> Result<ScopeId> {
        self.mount_at(None, element)
    }

    /// Mounts `element` below an already mounted scope, so it sees that scope's
    /// provides.
    pub fn mount_under(&mut self, parent: ScopeId, element: Element) -> Result<ScopeId> {
        if !self.scopes.contains(parent) {
            return Err(Error::ScopeNotFound(parent));
        }
        self.mount_at(Some(parent), element)
    }

    /// All-or-nothing: when any setup fails, every scope created by this call
    /// is removed again.
    fn mount_at(&mut self, parent: Option<ScopeId>, element: Element) -> Result<ScopeId> {
        let name = element.name();
        let size = element.size();
        let mut created = None;
        match self.mount_node(parent, element, &mut created) {
            Ok(id) => {
                tracing::debug!(component = name, components = size, "mounted");
                Ok(id)
            }
            Err(err) => {
                if let Some(root) = created {
                    let _ = self.scopes.remove_subtree(root);
                }
                Err(err)
            }
        }
    }

    fn mount_node(
        &mut self,
        parent: Option<ScopeId>,
        element: Element,
        created: &mut Option<ScopeId>,
    ) -> Result<ScopeId> {
        let Element {
            component,
            children,
        } = element;
        let name = component.name();
        let id = self.scopes.insert(name, parent)?;
        created.get_or_insert(id);

        let mut cx = SetupContext::new(&mut self.scopes, id);
        let render = component.setup(&mut cx).map_err(|err| {
            tracing::warn!(component = name, error = %err, "setup failed");
            err
        })?;
        if let Some(scope) = self.scopes.get_mut(id) {
            scope.set_render(render);
        }

        for child in children {
            self.mount_node(Some(id), child, created)?;
        }
        Ok(id)
    }

    /// Renders `id` with its mounted children appended in mount order.
    pub fn render(&self, id: ScopeId) -> Result<VNode> {
        let scope = self.scopes.get(id).ok_or(Error::ScopeNotFound(id))?;
        let mut node = match scope.render_fn() {
            Some(render) => render(),
            None => VNode::empty(),
        };
        let children = scope
            .children()
            .iter()
            .map(|child| self.render(*child))
            .collect::<Result<Vec<_>>>()?;
        node.append_children(children);
        Ok(node)
    }

    pub fn render_all(&self) -> Result<VNode> {
        let roots = self
            .scopes
            .roots()
            .iter()
            .map(|root| self.render(*root))
            .collect::<Result<Vec<_>>>()?;
        Ok(VNode::Fragment(roots))
    }

    /// Renders every root and paints it into `area`. Returns the rows used.
    pub fn draw(&self, backend: &mut dyn Backend, area: Rect) -> Result<u16> {
        let node = self.render_all()?;
        let mut painter = Painter::new();
        let rows = node.paint(&mut painter, area);
        backend.draw(area, painter.cmds());
        Ok(rows)
    }

    /// Removes `id` and its subtree; everything they provided goes with them.
    pub fn unmount(&mut self, id: ScopeId) -> Result<()> {
        let removed = self.scopes.remove_subtree(id)?;
        tracing::debug!(scopes = removed, "unmounted");
        Ok(())
    }

    pub fn roots(&self) -> &[ScopeId] {
        self.scopes.roots()
    }

    pub fn children(&self, id: ScopeId) -> &[ScopeId] {
        self.scopes.get(id).map(|s| s.children()).unwrap_or(&[])
    }

    pub fn contains(&self, id: ScopeId) -> bool {
        self.scopes.contains(id)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/runtime.rs"]
mod tests;
