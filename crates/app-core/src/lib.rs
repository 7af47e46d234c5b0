//! Pure simulation core for resona.
//!
//! These modules intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The web frontend
//! consumes them to drive the per-frame particle update, the proximity link
//! pass and the spectrum-to-visual mapping.

pub mod color;
pub mod connections;
pub mod constants;
pub mod particle;
pub mod pointer;
pub mod spectrum;

pub use color::*;
pub use connections::*;
pub use constants::*;
pub use particle::*;
pub use pointer::*;
pub use spectrum::*;
