//! Offline route compiler: reads a declarative route manifest and turns it
//! into a route table, either in memory or as Rust source for a `static`.

mod emit;
mod error;
mod manifest;

pub use emit::{EmitOptions, emit};
pub use error::{CompileError, CompileResult};
pub use manifest::{PARAMS_KEY, RouteManifest, RouteSpec};
