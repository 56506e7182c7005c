//! Asset loading.
//!
//! The loader owns file I/O and decoding. GPU upload stays with the host;
//! the decoded image plus its storage/transfer format pair is the hand-off
//! artifact.

mod loader;

pub use loader::load_texture;
