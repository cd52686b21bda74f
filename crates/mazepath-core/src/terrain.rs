//! Terrain classification of a maze cell.

use std::fmt;

/// What occupies a cell. The set is closed; match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open,
    Blocked,
    Start,
    Goal,
}

impl Terrain {
    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Blocked)
    }

    /// Character used by the text layout format.
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Open => '.',
            Terrain::Blocked => '#',
            Terrain::Start => 'S',
            Terrain::Goal => 'E',
        }
    }

    /// Inverse of [`glyph`](Terrain::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Terrain::Open),
            '#' => Some(Terrain::Blocked),
            'S' => Some(Terrain::Start),
            'E' => Some(Terrain::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Open => "open",
            Terrain::Blocked => "blocked",
            Terrain::Start => "start",
            Terrain::Goal => "goal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_blocked_is_impassable() {
        assert!(Terrain::Open.is_passable());
        assert!(Terrain::Start.is_passable());
        assert!(Terrain::Goal.is_passable());
        assert!(!Terrain::Blocked.is_passable());
    }

    #[test]
    fn glyphs_are_reversible() {
        for t in [Terrain::Open, Terrain::Blocked, Terrain::Start, Terrain::Goal] {
            assert_eq!(Terrain::from_glyph(t.glyph()), Some(t));
        }
        assert_eq!(Terrain::from_glyph('x'), None);
    }
}
