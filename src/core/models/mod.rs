//! Core data models for the Gateway
//!
//! Users and teams as stored by the entity store, plus the keys and
//! pagination used to address them.

pub mod entity;
pub mod pagination;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use entity::{EntityKind, EntityRecord, NewRecord, OperationKind, RecordChanges, RecordKey};
pub use pagination::{MAX_PAGE_SIZE, Pagination, PaginationQuery, SortOrder};
pub use team::{NewTeam, Team, TeamChanges};
pub use user::{NewUser, User, UserChanges};
