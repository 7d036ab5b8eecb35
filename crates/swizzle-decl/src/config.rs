use super::ty::TsType;
use swizzle_core::AXIS_COUNT;

/// Names and switches used while emitting declarations.
///
/// Cosmetic only. The set of members per interface and the inheritance
/// chain don't depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Puts `export` in front of every declaration.
    pub export: bool,

    /// Generic parameter of every declaration, `T` by default.
    pub generic: String,

    /// Result type of one-component swizzles, `Float` by default.
    pub scalar: String,

    /// Result types of two, three, and four-component swizzles.
    pub vectors: [String; AXIS_COUNT - 1],

    /// Emits `set*` and `flip*` methods.
    pub with_methods: bool,

    /// Emits `SwizzleIn{N}` aliases gathering what a vector of arity N
    /// exposes.
    pub with_arity_aliases: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            export: true,
            generic: "T".to_owned(),
            scalar: "Float".to_owned(),
            vectors: ["Vec2".to_owned(), "Vec3".to_owned(), "Vec4".to_owned()],
            with_methods: true,
            with_arity_aliases: true,
        }
    }
}

impl EmitConfig {
    /// Emits the `Swizzle{L}In{N}Out` interfaces only.
    pub fn interfaces_only() -> Self {
        Self {
            with_methods: false,
            with_arity_aliases: false,
            ..Default::default()
        }
    }

    pub fn generics(&self) -> Vec<String> {
        vec![self.generic.clone()]
    }

    pub fn generic_args(&self) -> Vec<TsType> {
        vec![TsType::param(self.generic.as_str())]
    }

    /// One-component value type, e.g. `Float<T>`.
    pub fn scalar_type(&self) -> TsType {
        TsType::named(self.scalar.as_str(), self.generic_args())
    }

    /// Name of the value type of the given arity, where arity 1 is the
    /// scalar.
    pub fn type_ident_of_arity(&self, arity: usize) -> Option<&str> {
        match arity {
            1 => Some(self.scalar.as_str()),
            n => self.vectors.get(n.wrapping_sub(2)).map(String::as_str),
        }
    }

    /// Value type of the given arity, e.g. `Vec3<T>`.
    pub fn type_of_arity(&self, arity: usize) -> Option<TsType> {
        self.type_ident_of_arity(arity)
            .map(|ident| TsType::named(ident, self.generic_args()))
    }

    /// Inverse of [`Self::type_ident_of_arity`].
    pub fn arity_of(&self, ident: &str) -> Option<usize> {
        (1..=AXIS_COUNT).find(|&arity| self.type_ident_of_arity(arity) == Some(ident))
    }

    /// Type a setter of `len` components accepts: a scalar to broadcast or
    /// a vector of exactly `len` components.
    pub fn setter_param_type(&self, len: usize) -> Option<TsType> {
        let scalar = self.scalar_type();
        if len == 1 {
            Some(scalar)
        } else {
            Some(TsType::union(vec![scalar, self.type_of_arity(len)?]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_vocabulary() {
        let config = EmitConfig::default();
        for arity in 1..=AXIS_COUNT {
            let ident = config.type_ident_of_arity(arity).unwrap();
            assert_eq!(config.arity_of(ident), Some(arity));
        }
        assert_eq!(config.type_ident_of_arity(0), None);
        assert_eq!(config.type_ident_of_arity(5), None);
        assert_eq!(config.arity_of("Mat3"), None);
    }

    #[test]
    fn test_setter_param_type() {
        let config = EmitConfig::default();
        assert_eq!(config.setter_param_type(1).unwrap().to_string(), "Float<T>");
        assert_eq!(
            config.setter_param_type(3).unwrap().to_string(),
            "Float<T> | Vec3<T>"
        );
    }
}
