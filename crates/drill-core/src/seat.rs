use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A table position. North is always the leftmost auction column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// Column of this seat in the N/E/S/W auction display.
    pub fn idx(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn next(self) -> Self {
        Seat::ALL[(self.idx() + 1) % 4]
    }

    pub fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }
}

impl FromStr for Seat {
    type Err = ();

    /// Accepts a single seat letter in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Seat::from_char(c).ok_or(()),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl Vulnerability {
    pub fn is_vulnerable(self, seat: Seat) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => seat == Seat::North || seat == Seat::South,
            Vulnerability::EW => seat == Seat::East || seat == Seat::West,
            Vulnerability::Both => true,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Vulnerability::None => "NONE",
            Vulnerability::NS => "N-S",
            Vulnerability::EW => "E-W",
            Vulnerability::Both => "BOTH",
        }
    }
}

impl FromStr for Vulnerability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(Vulnerability::None),
            "N-S" => Ok(Vulnerability::NS),
            "E-W" => Ok(Vulnerability::EW),
            "BOTH" => Ok(Vulnerability::Both),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_next() {
        assert_eq!(Seat::North.next(), Seat::East);
        assert_eq!(Seat::West.next(), Seat::North);
    }

    #[test]
    fn test_seat_parsing() {
        assert_eq!("n".parse::<Seat>(), Ok(Seat::North));
        assert_eq!("W".parse::<Seat>(), Ok(Seat::West));
        assert_eq!("NE".parse::<Seat>(), Err(()));
        assert_eq!("X".parse::<Seat>(), Err(()));
    }

    #[test]
    fn test_vulnerability_parsing() {
        assert_eq!("n-s".parse::<Vulnerability>(), Ok(Vulnerability::NS));
        assert_eq!("Both".parse::<Vulnerability>(), Ok(Vulnerability::Both));
        assert_eq!("none".parse::<Vulnerability>(), Ok(Vulnerability::None));
        assert_eq!("NS".parse::<Vulnerability>(), Err(()));
        assert_eq!(Vulnerability::EW.to_string(), "E-W");
    }

    #[test]
    fn test_vulnerability() {
        assert!(Vulnerability::NS.is_vulnerable(Seat::North));
        assert!(!Vulnerability::NS.is_vulnerable(Seat::East));
        assert!(Vulnerability::Both.is_vulnerable(Seat::West));
    }
}
