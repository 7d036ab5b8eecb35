//! Type checking of swizzle expressions against generated declarations.
//!
//! The checker looks members up in a [`DeclModule`](swizzle_decl::DeclModule)
//! through interfaces, `extends` chains, aliases, and intersections, and
//! nothing else. Assignability is nominal: named types match only by name
//! and arguments, so `Vec4<T>` is never assignable where `Float<T> | Vec3<T>`
//! is expected. This is stricter than TypeScript's structural comparison.
//! It's used to assert which swizzle expressions must type check and which
//! must be rejected.

mod check;
mod env;
mod error;
mod snippet;

pub use check::Checker;
pub use env::TypeEnv;
pub use error::{CheckError, CheckResult};
