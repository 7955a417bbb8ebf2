//! Data management for users and teams
//!
//! [`inbound_factory`] hands each inbound channel the [`DataManager`] it is
//! entitled to: REST callers go through the [`PublicCrud`] allow-list,
//! in-process callers get [`DataManagerImpl`] directly.

mod manager;
mod public;
mod repository;
mod types;

pub use manager::DataManagerImpl;
pub use public::PublicCrud;
#[cfg(test)]
pub use repository::MockDbAccess;
pub use repository::DbAccess;
#[cfg(test)]
pub use types::MockDataManager;
pub use types::{DataManager, DataOperation, DataRequest, DataResponse};

use std::sync::Arc;

/// Where a data request enters the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundChannel {
    /// HTTP API
    Rest,
    /// In-process callers
    Internal,
}

/// Build the data manager for an inbound channel
pub fn inbound_factory(channel: InboundChannel, db: Arc<dyn DbAccess>) -> Arc<dyn DataManager> {
    let manager: Arc<dyn DataManager> = Arc::new(DataManagerImpl::new(db));
    match channel {
        InboundChannel::Rest => Arc::new(PublicCrud::new(manager)),
        InboundChannel::Internal => manager,
    }
}
