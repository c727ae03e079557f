//! Core building blocks: the streaming copy engine consumed by the
//! high-level `api` module.
pub mod copy;
