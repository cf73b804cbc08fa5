//! Core processing building blocks: the darkness threshold, content-bounds crop,
//! and the in-memory pipeline that chains them. These are internal primitives
//! consumed by the high-level `api` module.
pub mod processing;
