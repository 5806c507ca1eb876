use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Grid, Point};

use crate::neighbors::DefaultWalker;
use crate::platformer::PlatformerWalker;
use crate::search::NoPath;
use crate::traits::NeighborPolicy;

/// A movement rule set chosen at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Movement {
    /// [`DefaultWalker`]: 8-directional grid movement.
    #[default]
    EightWay,
    /// [`PlatformerWalker`]: gravity, jumps and gap crossing.
    Platformer,
}

impl NeighborPolicy for Movement {
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>) {
        match self {
            Self::EightWay => DefaultWalker.neighbors(grid, p, buf),
            Self::Platformer => PlatformerWalker.neighbors(grid, p, buf),
        }
    }

    fn check_start(&self, grid: &Grid, start: Point) -> Result<(), NoPath> {
        match self {
            Self::EightWay => DefaultWalker.check_start(grid, start),
            Self::Platformer => PlatformerWalker.check_start(grid, start),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EightWay => write!(f, "eight-way"),
            Self::Platformer => write!(f, "platformer"),
        }
    }
}

/// Error returned when parsing an unknown [`Movement`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMovementError(String);

impl fmt::Display for ParseMovementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown movement \u{201c}{}\u{201d} (expected eight-way or platformer)",
            self.0
        )
    }
}

impl std::error::Error for ParseMovementError {}

impl FromStr for Movement {
    type Err = ParseMovementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eight-way" | "8way" | "default" | "grid" => Ok(Self::EightWay),
            "platformer" | "platform" => Ok(Self::Platformer),
            _ => Err(ParseMovementError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("platformer".parse::<Movement>(), Ok(Movement::Platformer));
        assert_eq!(" Default ".parse::<Movement>(), Ok(Movement::EightWay));
        assert_eq!("8way".parse::<Movement>(), Ok(Movement::EightWay));
        assert!("flying".parse::<Movement>().is_err());
        for m in [Movement::EightWay, Movement::Platformer] {
            assert_eq!(m.to_string().parse::<Movement>(), Ok(m));
        }
    }

    #[test]
    fn delegates_to_walkers() {
        let grid = Grid::parse(
            "
...
...
###",
            1.0,
        )
        .unwrap();
        let p = Point::new(1, 1);
        let mut a = Vec::new();
        let mut b = Vec::new();
        Movement::Platformer.neighbors(&grid, p, &mut a);
        PlatformerWalker.neighbors(&grid, p, &mut b);
        assert_eq!(a, b);

        a.clear();
        b.clear();
        Movement::EightWay.neighbors(&grid, p, &mut a);
        DefaultWalker.neighbors(&grid, p, &mut b);
        assert_eq!(a, b);

        let floating = Point::new(1, 2);
        assert_eq!(
            Movement::Platformer.check_start(&grid, floating),
            Err(NoPath::NotGrounded)
        );
        assert_eq!(Movement::EightWay.check_start(&grid, floating), Ok(()));
    }
}
