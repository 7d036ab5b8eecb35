use super::{
    axis::{AXIS_COUNT, Alphabet, Axis, MAX_LEN},
    pattern::Pattern,
};
use std::fmt;

/// Bucket of patterns sharing the same length and the same highest axis.
///
/// `max_index` is the exact maximum, not an upper bound. Accumulating lower
/// maxima is left to whoever consumes the table.
///
/// Keys are only built through [`BucketKey::new`] or from the table, so they
/// are always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    /// Number of selected components, 1..=4.
    pub(crate) len: usize,

    /// Highest axis index referenced, 0..=3.
    pub(crate) max_index: usize,
}

impl BucketKey {
    pub const fn new(len: usize, max_index: usize) -> Option<Self> {
        if len >= 1 && len <= MAX_LEN && max_index < AXIS_COUNT {
            Some(Self { len, max_index })
        } else {
            None
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn max_index(&self) -> usize {
        self.max_index
    }

    /// Minimum vector arity the patterns of this bucket require.
    pub const fn arity(&self) -> usize {
        self.max_index + 1
    }

    /// Bucket one component shorter with the same highest axis.
    pub const fn shorter(&self) -> Option<Self> {
        Self::new(self.len - 1, self.max_index)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.len - 1, self.max_index)
    }
}

/// Every swizzle pattern of length 1 to 4, bucketed by [`BucketKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwizzleTable {
    /// `buckets[len - 1][max_index]`
    buckets: [[Vec<Pattern>; AXIS_COUNT]; MAX_LEN],

    /// All patterns in enumeration order.
    order: Vec<Pattern>,
}

impl SwizzleTable {
    /// Enumerates all patterns.
    ///
    /// The first selected axis varies slowest. Every prefix is recorded as a
    /// pattern of its own, so `x` comes right before `xx`, `xxx`, and `xxxx`.
    #[tracing::instrument(level = "debug")]
    pub fn generate() -> Self {
        let mut table = Self {
            buckets: Default::default(),
            order: Vec::new(),
        };
        let mut prefix = Pattern::empty();
        table.visit(&mut prefix);

        tracing::debug!(patterns = table.order.len(), "enumerated swizzle patterns");
        table
    }

    fn visit(&mut self, prefix: &mut Pattern) {
        for axis in Axis::ALL {
            prefix.push(axis);
            self.record(prefix.clone());
            if prefix.len() < MAX_LEN {
                self.visit(prefix);
            }
            prefix.pop();
        }
    }

    fn record(&mut self, pattern: Pattern) {
        let key = pattern.bucket();
        tracing::trace!(%pattern, %key, "record");
        self.buckets[key.len - 1][key.max_index].push(pattern.clone());
        self.order.push(pattern);
    }

    /// Patterns of the bucket in enumeration order.
    pub fn bucket(&self, key: BucketKey) -> &[Pattern] {
        &self.buckets[key.len - 1][key.max_index]
    }

    /// Names of the bucket, three consecutive names per pattern in
    /// positional, color, and texture order.
    pub fn names(&self, key: BucketKey) -> impl Iterator<Item = String> + '_ {
        self.bucket(key)
            .iter()
            .flat_map(|pattern| Alphabet::ALL.map(|alphabet| pattern.name(alphabet)))
    }

    /// Bucket keys in emission order, highest axis outer and length inner.
    pub fn keys() -> impl Iterator<Item = BucketKey> {
        (0..AXIS_COUNT)
            .flat_map(|max_index| (1..=MAX_LEN).map(move |len| BucketKey { len, max_index }))
    }

    /// Buckets in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (BucketKey, &[Pattern])> + '_ {
        Self::keys().map(|key| (key, self.bucket(key)))
    }

    /// All patterns in enumeration order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.order
    }

    pub fn count_of_len(&self, len: usize) -> usize {
        self.buckets
            .get(len.wrapping_sub(1))
            .map_or(0, |row| row.iter().map(Vec::len).sum())
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let table = SwizzleTable::generate();
        let head: Vec<String> = table.patterns()[..6].iter().map(ToString::to_string).collect();
        assert_eq!(head, ["x", "xx", "xxx", "xxxx", "xxxy", "xxxz"]);
        assert_eq!(table.patterns().last().unwrap().to_string(), "wwww");
    }

    #[test]
    fn test_bucket_names_are_interleaved() {
        let table = SwizzleTable::generate();
        let key = BucketKey::new(1, 0).unwrap();
        let names: Vec<String> = table.names(key).collect();
        assert_eq!(names, ["x", "r", "s"]);

        let key = BucketKey::new(2, 1).unwrap();
        let names: Vec<String> = table.names(key).take(9).collect();
        assert_eq!(names, ["xy", "rg", "st", "yx", "gr", "ts", "yy", "gg", "tt"]);
    }

    #[test]
    fn test_keys_order() {
        let keys: Vec<(usize, usize)> = SwizzleTable::keys()
            .map(|key| (key.len, key.max_index))
            .take(6)
            .collect();
        assert_eq!(keys, [(1, 0), (2, 0), (3, 0), (4, 0), (1, 1), (2, 1)]);
        assert_eq!(SwizzleTable::keys().count(), MAX_LEN * AXIS_COUNT);
    }

    #[test]
    fn test_bucket_key_bounds() {
        assert!(BucketKey::new(0, 0).is_none());
        assert!(BucketKey::new(5, 0).is_none());
        assert!(BucketKey::new(1, 4).is_none());
        assert_eq!(BucketKey::new(4, 3).map(|key| key.arity()), Some(4));

        let key = BucketKey::new(3, 2).unwrap();
        assert_eq!((key.len(), key.max_index()), (3, 2));
        assert_eq!(key.shorter(), BucketKey::new(2, 2));
        assert_eq!(BucketKey::new(1, 2).unwrap().shorter(), None);
    }
}
