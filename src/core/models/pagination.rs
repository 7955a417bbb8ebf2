//! List pagination

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Largest page a list query may request
pub const MAX_PAGE_SIZE: u64 = 100;

/// Sort direction on the `name` column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    pub order: SortOrder,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_PAGE_SIZE,
            order: SortOrder::Asc,
        }
    }
}

impl Pagination {
    pub fn new(offset: i64, limit: i64, order: SortOrder) -> Result<Self> {
        if offset < 0 {
            return Err(GatewayError::validation("offset must be >= 0"));
        }
        if limit < 1 || limit as u64 > MAX_PAGE_SIZE {
            return Err(GatewayError::validation(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self {
            offset: offset as u64,
            limit: limit as u64,
            order,
        })
    }
}

/// Raw pagination parameters as they arrive on a query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub order: Option<SortOrder>,
}

impl TryFrom<PaginationQuery> for Pagination {
    type Error = GatewayError;

    fn try_from(query: PaginationQuery) -> Result<Self> {
        Pagination::new(
            query.offset.unwrap_or(0),
            query.limit.unwrap_or(MAX_PAGE_SIZE as i64),
            query.order.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Pagination::try_from(PaginationQuery::default()).unwrap();
        assert_eq!(page, Pagination::default());
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_bounds() {
        assert!(Pagination::new(-1, 10, SortOrder::Asc).is_err());
        assert!(Pagination::new(0, 0, SortOrder::Asc).is_err());
        assert!(Pagination::new(0, 101, SortOrder::Asc).is_err());
        assert!(Pagination::new(5, 100, SortOrder::Desc).is_ok());
    }

    #[test]
    fn test_order_parses_lowercase() {
        let order: SortOrder = serde_json::from_str(r#""desc""#).unwrap();
        assert_eq!(order, SortOrder::Desc);
        assert!(serde_json::from_str::<SortOrder>(r#""sideways""#).is_err());
    }
}
