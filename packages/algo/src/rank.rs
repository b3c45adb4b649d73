//! Rank table
//!
//! Coarse display tier derived from level. Boundaries are checked from the
//! highest threshold down so a level always maps to exactly one rank.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    /// Ascending order
    pub const ALL: [Rank; 6] = [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S];

    pub fn of(level: u32) -> Self {
        Rank::ALL
            .into_iter()
            .rev()
            .find(|rank| level >= rank.min_level())
            .unwrap_or(Rank::E)
    }

    pub fn min_level(&self) -> u32 {
        match self {
            Rank::E => 1,
            Rank::D => 11,
            Rank::C => 21,
            Rank::B => 41,
            Rank::A => 71,
            Rank::S => 100,
        }
    }

    /// Last level of the tier; S is open-ended
    pub fn max_level(&self) -> Option<u32> {
        self.next().map(|next| next.min_level() - 1)
    }

    pub fn next(&self) -> Option<Rank> {
        match self {
            Rank::E => Some(Rank::D),
            Rank::D => Some(Rank::C),
            Rank::C => Some(Rank::B),
            Rank::B => Some(Rank::A),
            Rank::A => Some(Rank::S),
            Rank::S => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rank::E => "E-Rank Hunter",
            Rank::D => "D-Rank Hunter",
            Rank::C => "C-Rank Hunter",
            Rank::B => "B-Rank Hunter",
            Rank::A => "A-Rank Hunter",
            Rank::S => "S-Rank Hunter",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn rank_of(level: u32) -> Rank {
    Rank::of(level)
}

/// Levels still missing before the next tier, `None` at S
pub fn levels_to_next_rank(level: u32) -> Option<u32> {
    Rank::of(level)
        .next()
        .map(|next| next.min_level().saturating_sub(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(rank_of(1), Rank::E);
        assert_eq!(rank_of(10), Rank::E);
        assert_eq!(rank_of(11), Rank::D);
        assert_eq!(rank_of(20), Rank::D);
        assert_eq!(rank_of(21), Rank::C);
        assert_eq!(rank_of(40), Rank::C);
        assert_eq!(rank_of(41), Rank::B);
        assert_eq!(rank_of(70), Rank::B);
        assert_eq!(rank_of(71), Rank::A);
        assert_eq!(rank_of(99), Rank::A);
        assert_eq!(rank_of(100), Rank::S);
        assert_eq!(rank_of(5000), Rank::S);
    }

    #[test]
    fn test_level_zero_falls_back_to_e() {
        assert_eq!(rank_of(0), Rank::E);
    }

    #[test]
    fn test_ranges_are_contiguous() {
        for pair in Rank::ALL.windows(2) {
            assert_eq!(pair[0].max_level(), Some(pair[1].min_level() - 1));
        }
        assert_eq!(Rank::S.max_level(), None);
    }

    #[test]
    fn test_levels_to_next_rank() {
        assert_eq!(levels_to_next_rank(1), Some(10));
        assert_eq!(levels_to_next_rank(10), Some(1));
        assert_eq!(levels_to_next_rank(99), Some(1));
        assert_eq!(levels_to_next_rank(100), None);
    }

    #[test]
    fn test_title_and_parse() {
        assert_eq!(Rank::C.title(), "C-Rank Hunter");
        assert_eq!(Rank::parse("s"), Some(Rank::S));
        assert_eq!(Rank::parse("Z"), None);
        assert_eq!(Rank::B.to_string(), "B");
    }
}
