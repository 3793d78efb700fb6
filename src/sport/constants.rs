//! Default values for sport configuration.

use super::entities::Score;

/// Points awarded for a win unless the sport configures its own table.
pub const DEFAULT_POINTS_WIN: Score = 3;

/// Points awarded for a draw unless the sport configures its own table.
pub const DEFAULT_POINTS_DRAW: Score = 1;

/// Points awarded for a loss unless the sport configures its own table.
pub const DEFAULT_POINTS_LOSS: Score = 0;

/// League sports default to a double round-robin.
pub const DEFAULT_LEAGUE_MEETINGS: u32 = 2;

/// Smallest team count any match-based format can be generated for.
pub const MIN_TEAMS: usize = 2;
