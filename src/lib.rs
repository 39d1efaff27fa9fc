//! foo-context - scoped provide/inject for a small component runtime
//!
//! Module layout:
//! - core: keys, per-scope context storage, the Component trait
//! - app: mounting, rendering and unmounting component trees
//! - ui: element trees, painting, headless and terminal backends
//! - foo: the Foo context (`use_foo`, `use_foo_context`)
//! - views: the `Foo` greeting and the `FooProvider` host component
//! - services: configuration

pub mod app;
pub mod core;
pub mod foo;
pub mod services;
pub mod ui;
pub mod views;

pub use app::App;
pub use crate::core::{Component, ContextKey, Element, Error, Result, SetupContext};
pub use foo::{provide_foo, use_foo, use_foo_context, FooMessage};
pub use views::{Foo, FooProvider};
