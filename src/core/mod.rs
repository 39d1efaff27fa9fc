//! Core component runtime.
//!
//! - key: typed context keys
//! - context: per-scope value storage
//! - scope: the mounted scope forest
//! - component: Component trait, setup context, element trees
//! - error: crate error type

pub mod component;
pub mod context;
pub mod error;
pub mod key;
pub mod scope;

pub use component::{Component, Element, RenderFn, SetupContext};
pub use context::ContextMap;
pub use error::{Error, Result};
pub use key::{ContextKey, KeyId};
pub use scope::{Scope, ScopeId, ScopeTree};
