//! Allow-list wrapper for externally reachable data management

use super::types::{DataManager, DataRequest, DataResponse};
use crate::core::models::{EntityKind, OperationKind};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// [`DataManager`] that only forwards allow-listed entities and operations
#[derive(Clone)]
pub struct PublicCrud {
    inner: Arc<dyn DataManager>,
    allowed_entities: HashSet<EntityKind>,
    allowed_operations: HashSet<OperationKind>,
}

impl PublicCrud {
    /// Allow CRUD on every managed entity
    pub fn new(inner: Arc<dyn DataManager>) -> Self {
        Self::with_allow_lists(inner, EntityKind::ALL, OperationKind::ALL)
    }

    pub fn with_allow_lists(
        inner: Arc<dyn DataManager>,
        entities: impl IntoIterator<Item = EntityKind>,
        operations: impl IntoIterator<Item = OperationKind>,
    ) -> Self {
        Self {
            inner,
            allowed_entities: entities.into_iter().collect(),
            allowed_operations: operations.into_iter().collect(),
        }
    }

    pub fn allows(&self, request: &DataRequest) -> bool {
        self.allowed_entities.contains(&request.entity)
            && self
                .allowed_operations
                .contains(&request.operation.kind())
    }
}

#[async_trait]
impl DataManager for PublicCrud {
    async fn process(&self, request: DataRequest) -> Result<DataResponse> {
        if !self.allows(&request) {
            let operation = request.operation.kind();
            warn!(entity = %request.entity, operation = %operation, "Rejected data request");
            return Err(GatewayError::forbidden(format!(
                "Operation '{}' on '{}' is not allowed",
                operation, request.entity
            )));
        }
        self.inner.process(request).await
    }
}
