//! # Sports Day
//!
//! Standings and bracket computation engine for a multi-sport
//! competition day: an organizer defines sports, records results, and
//! spectators get live standings, schedules and brackets derived from
//! one authoritative [`Sport`](sport::Sport) snapshot.
//!
//! Four competition formats are supported, each with its own pure
//! calculator behind a closed `enum_dispatch` union:
//!
//! - **Tournament**: seeded single-elimination bracket with automatic
//!   byes, winner propagation and forward-cascading corrections
//! - **RoundRobin**: everyone plays everyone once; table ordered by the
//!   shared tie-break policy
//! - **Ranking**: per-team aggregate of recorded performances (`sum` or
//!   `best-of`)
//! - **League**: round-robin over a configurable number of meetings and
//!   points table
//!
//! ## Core Modules
//!
//! - [`sport`]: the Sport aggregate, match ledger and structure
//!   generation
//! - [`standings`]: the four format calculators and the tie-break
//!   policy
//! - [`schedule`]: advisory time-slot/venue conflict detection
//! - [`store`]: the read/write/subscribe seam to the external store
//!
//! Calculators and the validator are pure functions over `&Sport`:
//! standings are recomputed from the ledger on every read and are never
//! cached as authoritative state.
//!
//! ## Example
//!
//! ```
//! use sports_day::sport::{Sport, SportType, Team};
//! use sports_day::standings;
//!
//! let mut sport = Sport::new("Futsal", SportType::Tournament);
//! for name in ["Red", "Blue", "Green", "Yellow"] {
//!     sport.add_team(Team::new(name, name)).unwrap();
//! }
//! sport.generate_structure().unwrap();
//!
//! // First semi-final: Red 2, Yellow 1.
//! sport.record_result(&"m1".into(), 2, 1).unwrap();
//!
//! let view = standings::standings(&sport).unwrap();
//! assert!(view.as_bracket().unwrap().champion.is_none());
//! ```

/// The Sport aggregate, its ledger and structure generation.
pub mod sport;
pub use sport::{
    LedgerError, Match, MatchId, MatchStatus, Side, Sport, SportError, SportId, SportType, Team,
    TeamId,
};

/// Format calculators and the tie-break policy.
pub mod standings;
pub use standings::{standings, BracketView, CalcError, RankingRow, Standings, StandingsRow};

/// Schedule conflict detection.
pub mod schedule;
pub use schedule::{validate, Conflict, ScheduleReport};

/// Data store seam.
pub mod store;
pub use store::{MemoryStore, SportStore, StoreEvent};
