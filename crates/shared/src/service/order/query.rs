use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::Pagination,
        responses::{ApiResponse, OrderRecordResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        pagination: &Pagination,
    ) -> Result<ApiResponse<Vec<OrderRecordResponse>>, ServiceError> {
        let orders = self.query.find_all(pagination).await.map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Fetched {} orders", orders.len());

        let data = orders.into_iter().map(OrderRecordResponse::from).collect();

        Ok(ApiResponse::success("Orders fetched successfully", data))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        match self.query.find_by_id(id).await {
            Ok(Some(order)) => {
                info!("✅ Order found with ID={id}");
                Ok(ApiResponse::success(
                    "Order fetched successfully",
                    OrderResponse::from(order),
                ))
            }
            Ok(None) => {
                error!("❌ Order not found with ID={id}");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                error!("❌ Failed to fetch order with ID={id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::MockOrderQueryRepositoryTrait;
    use crate::model::Order;
    use std::sync::Arc;

    fn order(id: i32, status: &str) -> Order {
        Order {
            id,
            status: status.to_string(),
            client_email: Some(format!("client{id}@example.com")),
            client_password_hash: Some("$2b$04$hash".to_string()),
            created: chrono::Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn find_all_maps_rows_in_order() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query
            .expect_find_all()
            .withf(|pagination| pagination.bounds() == (10, 0))
            .returning(|_| Ok(vec![order(2, "PENDING"), order(1, "COMPLETED")]));

        let service = OrderQueryService::new(Arc::new(query));
        let response = service.find_all(&Pagination::default()).await.unwrap();

        let ids: Vec<i32> = response.data.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn find_all_with_empty_store_returns_empty_sequence() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query.expect_find_all().returning(|_| Ok(Vec::new()));

        let service = OrderQueryService::new(Arc::new(query));
        let response = service.find_all(&Pagination::default()).await.unwrap();

        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_projection() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(|id| Ok(Some(order(id, "PENDING"))));

        let service = OrderQueryService::new(Arc::new(query));
        let response = service.find_by_id(1).await.unwrap();

        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.status, "PENDING");
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let service = OrderQueryService::new(Arc::new(query));
        let err = service.find_by_id(42).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
