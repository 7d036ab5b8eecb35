use std::fmt;

/// Number of component slots a vector can have.
pub const AXIS_COUNT: usize = 4;

/// Maximum number of components a single swizzle can select.
pub const MAX_LEN: usize = 4;

const POSITION: [char; AXIS_COUNT] = ['x', 'y', 'z', 'w'];
const COLOR: [char; AXIS_COUNT] = ['r', 'g', 'b', 'a'];
const TEXTURE: [char; AXIS_COUNT] = ['s', 't', 'p', 'q'];

/// One of the four component slots of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Axis {
    /// `x`, `r` or `s`.
    X = 0,

    /// `y`, `g` or `t`.
    Y = 1,

    /// `z`, `b` or `p`.
    Z = 2,

    /// `w`, `a` or `q`.
    W = 3,
}

impl Axis {
    pub const ALL: [Self; AXIS_COUNT] = [Self::X, Self::Y, Self::Z, Self::W];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            3 => Some(Self::W),
            _ => None,
        }
    }

    /// Returns the letter of this axis in the given alphabet.
    pub const fn letter(self, alphabet: Alphabet) -> char {
        alphabet.letters()[self.index()]
    }
}

/// Letter set used to spell swizzles.
///
/// The declaration order is also the order in which names of a pattern are
/// emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alphabet {
    /// `xyzw`
    Position,

    /// `rgba`
    Color,

    /// `stpq`
    Texture,
}

impl Alphabet {
    pub const ALL: [Self; 3] = [Self::Position, Self::Color, Self::Texture];

    pub const fn letters(self) -> &'static [char; AXIS_COUNT] {
        match self {
            Self::Position => &POSITION,
            Self::Color => &COLOR,
            Self::Texture => &TEXTURE,
        }
    }

    /// Maps a letter of this alphabet back to its axis.
    pub fn axis_of(self, c: char) -> Option<Axis> {
        self.letters()
            .iter()
            .position(|&letter| letter == c)
            .and_then(Axis::from_index)
    }

    /// Finds the alphabet and axis a letter belongs to.
    ///
    /// Letters are unique across alphabets, so the answer is unambiguous.
    pub fn of_letter(c: char) -> Option<(Self, Axis)> {
        Self::ALL
            .into_iter()
            .find_map(|alphabet| alphabet.axis_of(c).map(|axis| (alphabet, axis)))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters().iter().collect();
        f.write_str(&letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_unique_across_alphabets() {
        let mut all: Vec<char> = Alphabet::ALL
            .iter()
            .flat_map(|alphabet| alphabet.letters().iter().copied())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), AXIS_COUNT * Alphabet::ALL.len());
    }

    #[test]
    fn test_of_letter() {
        assert_eq!(Alphabet::of_letter('x'), Some((Alphabet::Position, Axis::X)));
        assert_eq!(Alphabet::of_letter('a'), Some((Alphabet::Color, Axis::W)));
        assert_eq!(Alphabet::of_letter('p'), Some((Alphabet::Texture, Axis::Z)));
        assert_eq!(Alphabet::of_letter('u'), None);
        assert_eq!(Alphabet::of_letter('X'), None);
    }

    #[test]
    fn test_axis_index() {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), i);
            assert_eq!(Axis::from_index(i), Some(axis));
        }
        assert_eq!(Axis::from_index(AXIS_COUNT), None);
        assert_eq!(Axis::Y.letter(Alphabet::Texture), 't');
    }
}
