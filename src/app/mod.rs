pub mod runtime;

pub use runtime::App;
