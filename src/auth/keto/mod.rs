//! Ory Keto relation-tuple client
//!
//! Reads tuples from the Keto read API. Every failure (transport, timeout,
//! non-200 status, malformed body) is logged and reported as "no tuples" or
//! "not allowed", so callers always fail closed.

mod client;
mod error;
mod types;

pub use client::{KetoClient, RelationTupleSource};
#[cfg(test)]
pub use client::MockRelationTupleSource;
pub use error::KetoError;
pub use types::{ROLE_PREFIX, Relation, RelationTuple, TupleFilter, role_object};
