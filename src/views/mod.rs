//! Components built on the Foo context:
//! - Foo: renders the greeting for the nearest provided message
//! - FooProvider: host component that provides a message to its children

pub mod foo;
pub mod provider;

pub use foo::Foo;
pub use provider::FooProvider;
