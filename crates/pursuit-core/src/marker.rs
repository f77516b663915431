//! The [`Marker`] type: the content of a single grid cell.

use std::fmt;

/// Symbolic content of one grid cell.
///
/// The set is closed: adding a new obstacle kind means adding a variant here
/// and a row in the passability table, both checked at compile time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Marker {
    #[default]
    Empty = 0,
    Player,
    /// Only ever written into search snapshots, never into a live grid.
    Visited,
    Adversary,
    Wall,
    Goal,
    Crate,
    IronCrate,
    Door,
    Trap,
    Pit,
    Hole,
}

/// Passability by discriminant. Must stay in declaration order.
const PASSABLE: [bool; Marker::COUNT] = [
    true,  // Empty
    true,  // Player
    false, // Visited
    false, // Adversary
    false, // Wall
    false, // Goal
    false, // Crate
    false, // IronCrate
    false, // Door
    false, // Trap
    false, // Pit
    false, // Hole
];

impl Marker {
    /// Number of marker kinds.
    pub const COUNT: usize = 12;

    /// Every marker, in discriminant order.
    pub const ALL: [Marker; Marker::COUNT] = [
        Marker::Empty,
        Marker::Player,
        Marker::Visited,
        Marker::Adversary,
        Marker::Wall,
        Marker::Goal,
        Marker::Crate,
        Marker::IronCrate,
        Marker::Door,
        Marker::Trap,
        Marker::Pit,
        Marker::Hole,
    ];

    /// Whether an entity may occupy or move through a cell holding this
    /// marker. Being at the player is the end of a chase, not an obstacle.
    #[inline]
    pub const fn is_passable(self) -> bool {
        PASSABLE[self as usize]
    }

    /// Whether this is one of the static level obstacles.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        !matches!(
            self,
            Marker::Empty | Marker::Player | Marker::Visited | Marker::Adversary
        )
    }

    /// Level-file character for this marker.
    pub const fn to_char(self) -> char {
        match self {
            Marker::Empty => '.',
            Marker::Player => '@',
            Marker::Visited => 'V',
            Marker::Adversary => 'E',
            Marker::Wall => 'W',
            Marker::Goal => 'G',
            Marker::Crate => 'A',
            Marker::IronCrate => 'I',
            Marker::Door => 'D',
            Marker::Trap => 'T',
            Marker::Pit => 'P',
            Marker::Hole => 'H',
        }
    }

    /// Parse a level-file character. A space is accepted as `Empty`.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch == ' ' {
            return Some(Marker::Empty);
        }
        Self::ALL.into_iter().find(|m| m.to_char() == ch)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
