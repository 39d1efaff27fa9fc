//! UI layer: element trees, painting and backends.
//!
//! `ratatui` stays behind the terminal backend; everything else (including the
//! tests) works against the headless backend.

pub mod backend;
pub mod geom;
pub mod painter;
pub mod vnode;

pub use vnode::{h, VNode};
