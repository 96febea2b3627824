//! Marks and per-mark data storage.
//!
//! ## Mark
//!
//! The two sides of the game. `X` always moves first.
//!
//! ## MarkMap
//!
//! Fixed two-slot storage indexed by `Mark`, used wherever the driver
//! keeps one value per side (policies, tallies).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players' marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Mark {
    /// Both marks in move order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Slot index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    /// Parse a single mark symbol, case-insensitive.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }

    /// The display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::from_symbol(c).ok_or_else(|| format!("unknown mark '{}'", s)),
            _ => Err(format!("unknown mark '{}'", s)),
        }
    }
}

/// Per-mark data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Mark, MarkMap};
///
/// let mut wins: MarkMap<u32> = MarkMap::default();
/// wins[Mark::O] += 1;
/// assert_eq!(wins[Mark::X], 0);
/// assert_eq!(wins[Mark::O], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create a new MarkMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Mark) -> T) -> Self {
        Self {
            data: [factory(Mark::X), factory(Mark::O)],
        }
    }

    /// Get a reference to a mark's data.
    #[must_use]
    pub fn get(&self, mark: Mark) -> &T {
        &self.data[mark.index()]
    }

    /// Get a mutable reference to a mark's data.
    pub fn get_mut(&mut self, mark: Mark) -> &mut T {
        &mut self.data[mark.index()]
    }

    /// Iterate over (Mark, &T) pairs in move order.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for MarkMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        self.get(mark)
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        self.get_mut(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!(" O ".parse::<Mark>(), Ok(Mark::O));
        assert!("XO".parse::<Mark>().is_err());
        assert!("".parse::<Mark>().is_err());
        assert_eq!(format!("{}", Mark::O), "O");
    }

    #[test]
    fn test_mark_map_new() {
        let map = MarkMap::new(|m| m.index() * 10);
        assert_eq!(map[Mark::X], 0);
        assert_eq!(map[Mark::O], 10);
    }

    #[test]
    fn test_mark_map_mutation() {
        let mut map: MarkMap<i32> = MarkMap::default();
        map[Mark::X] = 3;
        *map.get_mut(Mark::O) += 7;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Mark::X, &3), (Mark::O, &7)]);
    }

    #[test]
    fn test_mark_map_serialization() {
        let map = MarkMap::new(|m| m.symbol().to_string());
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: MarkMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
