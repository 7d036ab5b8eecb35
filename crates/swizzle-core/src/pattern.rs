use super::{
    axis::{Alphabet, Axis, MAX_LEN},
    enumerate::BucketKey,
    error::PatternError,
};
use smallvec::SmallVec;
use std::fmt;

/// Ordered selection of 1 to 4 axes, repetition allowed.
///
/// ```text
/// e.g. (Y, X, Z, W) is spelled yxzw, grba or tspq.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    axes: SmallVec<[Axis; MAX_LEN]>,
}

impl Pattern {
    pub fn new(axes: &[Axis]) -> Result<Self, PatternError> {
        match axes.len() {
            0 => Err(PatternError::Empty),
            len if len > MAX_LEN => Err(PatternError::TooLong(len)),
            _ => Ok(Self {
                axes: SmallVec::from_slice(axes),
            }),
        }
    }

    pub fn from_indices(indices: &[usize]) -> Result<Self, PatternError> {
        let axes = indices
            .iter()
            .map(|&i| Axis::from_index(i).ok_or(PatternError::InvalidIndex(i)))
            .collect::<Result<SmallVec<[Axis; MAX_LEN]>, _>>()?;
        Self::new(&axes)
    }

    /// Maps a swizzle name back to its pattern and the alphabet it's spelled in.
    pub fn parse(name: &str) -> Result<(Self, Alphabet), PatternError> {
        let mut chars = name.chars();
        let first = chars.next().ok_or(PatternError::Empty)?;
        let (alphabet, axis) =
            Alphabet::of_letter(first).ok_or(PatternError::UnknownLetter(first))?;

        let mut axes: SmallVec<[Axis; MAX_LEN]> = SmallVec::new();
        axes.push(axis);
        for c in chars {
            let (other, axis) = Alphabet::of_letter(c).ok_or(PatternError::UnknownLetter(c))?;
            if other != alphabet {
                return Err(PatternError::MixedAlphabet {
                    name: name.to_owned(),
                });
            }
            axes.push(axis);
        }

        Self::new(&axes).map(|pattern| (pattern, alphabet))
    }

    /// Creates an empty pattern, which is only used as a prefix while
    /// enumerating.
    pub(crate) fn empty() -> Self {
        Self {
            axes: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, axis: Axis) {
        debug_assert!(self.axes.len() < MAX_LEN);
        self.axes.push(axis);
    }

    pub(crate) fn pop(&mut self) -> Option<Axis> {
        self.axes.pop()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn max_axis(&self) -> Axis {
        // Empty patterns never escape this crate.
        self.axes.iter().copied().max().unwrap_or(Axis::X)
    }

    pub fn max_index(&self) -> usize {
        self.max_axis().index()
    }

    /// Minimum number of components a vector needs to be swizzled with this.
    pub fn min_arity(&self) -> usize {
        self.max_index() + 1
    }

    pub fn has_duplicates(&self) -> bool {
        self.axes
            .iter()
            .enumerate()
            .any(|(i, axis)| self.axes[i + 1..].contains(axis))
    }

    /// Strictly ascending axes, which also means no duplicates.
    pub fn is_canonical(&self) -> bool {
        self.axes.windows(2).all(|w| w[0] < w[1])
    }

    pub fn bucket(&self) -> BucketKey {
        BucketKey {
            len: self.len(),
            max_index: self.max_index(),
        }
    }

    pub fn name(&self, alphabet: Alphabet) -> String {
        self.axes.iter().map(|axis| axis.letter(alphabet)).collect()
    }

    /// Names in positional, color, and texture order.
    pub fn names(&self) -> [String; 3] {
        Alphabet::ALL.map(|alphabet| self.name(alphabet))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(Alphabet::Position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let p = Pattern::from_indices(&[1, 0, 2, 3]).unwrap();
        assert_eq!(p.names(), ["yxzw", "grba", "tspq"]);
        assert_eq!(p.max_index(), 3);
        assert_eq!(p.bucket(), BucketKey { len: 4, max_index: 3 });

        let p = Pattern::from_indices(&[0, 2]).unwrap();
        assert_eq!(p.names(), ["xz", "rb", "sp"]);
        assert_eq!(p.min_arity(), 3);
    }

    #[test]
    fn test_new_rejects_bad_length() {
        assert_eq!(Pattern::new(&[]), Err(PatternError::Empty));
        assert_eq!(
            Pattern::new(&[Axis::X; 5]),
            Err(PatternError::TooLong(5))
        );
        assert_eq!(
            Pattern::from_indices(&[0, 4]),
            Err(PatternError::InvalidIndex(4))
        );
    }

    #[test]
    fn test_parse() {
        let (p, alphabet) = Pattern::parse("bgr").unwrap();
        assert_eq!(alphabet, Alphabet::Color);
        assert_eq!(p.axes(), &[Axis::Z, Axis::Y, Axis::X]);

        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("xu"), Err(PatternError::UnknownLetter('u')));
        assert_eq!(
            Pattern::parse("xr"),
            Err(PatternError::MixedAlphabet { name: "xr".into() })
        );
        assert_eq!(Pattern::parse("xyzwx"), Err(PatternError::TooLong(5)));
    }

    #[test]
    fn test_duplicates_and_canonical() {
        let xx = Pattern::parse("xx").unwrap().0;
        assert!(xx.has_duplicates());
        assert!(!xx.is_canonical());

        let yx = Pattern::parse("yx").unwrap().0;
        assert!(!yx.has_duplicates());
        assert!(!yx.is_canonical());

        let xzw = Pattern::parse("xzw").unwrap().0;
        assert!(!xzw.has_duplicates());
        assert!(xzw.is_canonical());

        let yxy = Pattern::parse("yxy").unwrap().0;
        assert!(yxy.has_duplicates());
    }
}
