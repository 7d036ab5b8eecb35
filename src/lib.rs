//! Swizzle accessor declarations for TypeScript.
//!
//! ```text
//! export interface Swizzle2In3Out<T> extends Swizzle1In3Out<T> {
//!     get xz(): Vec2<T>;
//!     set xz(value: Float<T> | Vec2<T>);
//!     ...
//! }
//! ```
//!
//! The three workspace crates are re-exported here: [`names`] enumerates
//! swizzle patterns, [`decl`] turns them into declarations, and [`check`]
//! type checks expressions against those declarations.

pub mod cli;

pub use swizzle_check as check;
pub use swizzle_core as names;
pub use swizzle_decl as decl;

use decl::{EmitConfig, OutputFormat};
use names::SwizzleTable;

/// Enumerates every swizzle and renders it in the given shape.
///
/// The result is the same on every call.
pub fn generate(format: OutputFormat, config: &EmitConfig) -> String {
    let table = SwizzleTable::generate();
    decl::render(&table, config, format)
}
