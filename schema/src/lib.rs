// Pokemon Legality Schema - Decoded record definitions
// This crate holds the strongly-typed, already-decoded record that the
// legality analyzer consumes. Nothing here knows about binary save formats;
// decoding happens upstream.

pub use memory::*;
pub use origin::*;
pub use record::*;

pub mod memory;
pub mod origin;
pub mod record;
