// logledger - core/mod.rs
//
// Core logic layer: data model, the store itself, and rendering.
// No I/O except through a caller-supplied writer (render) or the
// stdout convenience on the store.

pub mod model;
pub mod render;
pub mod store;
