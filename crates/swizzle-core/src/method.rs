use super::{
    axis::{AXIS_COUNT, Alphabet, Axis},
    error::PatternError,
    pattern::Pattern,
};
use std::fmt;

/// Method-style swizzle accessors.
///
/// Unlike properties, methods are only offered for canonical patterns, i.e.
/// ascending axes without repetition. `setXY` exists but `setYX` and `setXX`
/// don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MethodKind {
    /// Assigns the named components, from one scalar per component or from
    /// a single vector of the same arity.
    Set,

    /// Flips the named components in place.
    Flip,
}

impl MethodKind {
    pub const ALL: [Self; 2] = [Self::Set, Self::Flip];

    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Flip => "flip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwizzleMethod {
    kind: MethodKind,
    pattern: Pattern,
    alphabet: Alphabet,
}

impl SwizzleMethod {
    pub fn new(kind: MethodKind, pattern: Pattern, alphabet: Alphabet) -> Result<Self, PatternError> {
        if !pattern.is_canonical() {
            return Err(PatternError::NotCanonical {
                name: pattern.name(alphabet),
            });
        }
        Ok(Self {
            kind,
            pattern,
            alphabet,
        })
    }

    /// Parses names such as `setXY` or `flipRGB`.
    pub fn parse(name: &str) -> Result<Self, PatternError> {
        let (kind, letters) = MethodKind::ALL
            .into_iter()
            .find_map(|kind| name.strip_prefix(kind.prefix()).map(|rest| (kind, rest)))
            .filter(|(_, rest)| rest.chars().all(|c| c.is_ascii_uppercase()))
            .ok_or_else(|| PatternError::UnknownMethod {
                name: name.to_owned(),
            })?;

        let (pattern, alphabet) = Pattern::parse(&letters.to_ascii_lowercase())?;
        Self::new(kind, pattern, alphabet)
    }

    /// Every method of the given kind, for every canonical pattern in every
    /// alphabet.
    pub fn all(kind: MethodKind) -> impl Iterator<Item = Self> {
        canonical_patterns().flat_map(move |pattern| {
            Alphabet::ALL.map(|alphabet| Self {
                kind,
                pattern: pattern.clone(),
                alphabet,
            })
        })
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of components the method touches.
    pub fn arity(&self) -> usize {
        self.pattern.len()
    }

    /// Single-letter names of the touched components, used as parameter
    /// names of `set` methods.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.pattern
            .axes()
            .iter()
            .map(|axis| axis.letter(self.alphabet))
    }

    pub fn name(&self) -> String {
        let mut name = String::from(self.kind.prefix());
        name.extend(self.letters().map(|c| c.to_ascii_uppercase()));
        name
    }
}

impl fmt::Display for SwizzleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Non-empty ascending subsets of the axes, ordered by bitmask.
pub fn canonical_patterns() -> impl Iterator<Item = Pattern> {
    (1_u32..(1 << AXIS_COUNT)).filter_map(|mask| {
        let axes: Vec<Axis> = Axis::ALL
            .into_iter()
            .filter(|axis| mask & (1 << axis.index()) != 0)
            .collect();
        Pattern::new(&axes).ok()
    })
}
