//! Swizzle accessor names.
//!
//! A swizzle selects 1 to 4 components of a vector by letters, e.g. `v.zyx`.
//! Each of the four axes can be spelled with three alphabets, `xyzw`, `rgba`,
//! and `stpq`. This crate enumerates every selection and groups them by how
//! many components are selected and which axis is the highest one, so that
//! declarations can be layered by the arity of the vector being swizzled.

mod axis;
mod enumerate;
mod error;
mod method;
mod pattern;

pub use axis::{AXIS_COUNT, Alphabet, Axis, MAX_LEN};
pub use enumerate::{BucketKey, SwizzleTable};
pub use error::PatternError;
pub use method::{MethodKind, SwizzleMethod, canonical_patterns};
pub use pattern::Pattern;

pub mod prelude {
    pub use super::{
        Alphabet, Axis, BucketKey, MethodKind, Pattern, PatternError, SwizzleMethod, SwizzleTable,
    };
}
