//! Composition root for the Clipify client.

pub mod bootstrap;
pub mod input;
