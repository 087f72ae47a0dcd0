use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Page bounds shared by every list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    /// Resolves `(limit, offset)` with server-side defaults. The limit is
    /// intentionally not clamped.
    pub fn bounds(&self) -> (i64, i64) {
        (
            self.limit.unwrap_or(DEFAULT_LIMIT),
            self.offset.unwrap_or(DEFAULT_OFFSET),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ten_rows_from_the_start() {
        let pagination = Pagination::default();
        assert_eq!(pagination.bounds(), (10, 0));
    }

    #[test]
    fn explicit_bounds_are_used_as_given() {
        let pagination = Pagination {
            limit: Some(5),
            offset: Some(20),
        };
        assert_eq!(pagination.bounds(), (5, 20));
    }

    #[test]
    fn large_limits_are_not_clamped() {
        let pagination = Pagination {
            limit: Some(100_000),
            offset: None,
        };
        assert_eq!(pagination.bounds(), (100_000, 0));
    }
}
