//! TypeScript declarations for swizzle accessors.
//!
//! Patterns enumerated by `swizzle-core` are turned into a [`DeclModule`],
//! which is then written out as text. Interfaces are layered so that
//! `Swizzle{L}In{N}Out` extends `Swizzle{L-1}In{N}Out` and only holds
//! swizzles whose highest axis is exactly the `N`th one.

mod alias;
mod config;
mod emit;
mod interface;
mod module;
mod shape;
mod to_code;
mod ty;
mod util;

pub use alias::TsTypeAlias;
pub use config::EmitConfig;
pub use emit::{arity_alias_ident, emit_declarations, interface_ident, methods_ident};
pub use interface::{Member, Param, TsInterface};
pub use module::{DeclEntry, DeclModule};
pub use shape::{DeclError, OutputFormat, emit_unions, render, union_ident};
pub use to_code::{PutStr, PutStrPretty};
pub use ty::TsType;
