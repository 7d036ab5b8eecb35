use thiserror::Error;

pub type CheckResult<T> = Result<T, CheckError>;

/// Reasons an expression is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("failed to parse `{src}`: {reason}")]
    Parse { src: String, reason: String },

    #[error("unsupported expression `{0}`")]
    Unsupported(String),

    #[error("unknown value `{0}`, expected float, vec2, vec3 or vec4")]
    UnknownValue(String),

    #[error("cannot find type `{0}`")]
    UnknownType(String),

    #[error("type `{0}` refers to itself")]
    Cyclic(String),

    #[error("property `{member}` does not exist on type `{ty}`")]
    NoSuchMember { ty: String, member: String },

    #[error("`{member}` is a method of type `{ty}`, not a property")]
    NotAProperty { ty: String, member: String },

    #[error("cannot assign to `{member}` because it is a read-only property")]
    ReadOnly { member: String },

    #[error("type `{found}` is not assignable to type `{expected}`")]
    NotAssignable { expected: String, found: String },

    #[error("`{member}` is not callable")]
    NotCallable { member: String },

    #[error("no overload of `{method}` accepts ({found})")]
    NoMatchingOverload { method: String, found: String },
}
