use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if let Some(status) = &req.status {
            info!("🏗️ Ignoring client-supplied status {status:?}, new orders start PENDING");
        }

        let order = self.command.create().await.map_err(|e| {
            error!("❌ Failed to create order: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Order created with ID={}", order.id);

        Ok(ApiResponse::success(
            "Order created successfully",
            OrderResponse::from(order),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        // empty string means "keep the current status", same as an omitted field
        let status = req
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        match self.command.update_status(id, status).await {
            Ok(Some(order)) => {
                info!("✅ Order updated with ID={id}, status={}", order.status);
                Ok(ApiResponse::success(
                    "Order updated successfully",
                    OrderResponse::from(order),
                ))
            }
            Ok(None) => {
                error!("❌ Order not found with ID={id}");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                error!("❌ Failed to update order with ID={id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let rows = self.command.delete(id).await.map_err(|e| {
            error!("❌ Failed to delete order with ID={id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if rows == 0 {
            error!("❌ Order not found with ID={id}");
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        info!("✅ Order deleted with ID={id}");

        Ok(ApiResponse::success("Order deleted successfully", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::MockOrderCommandRepositoryTrait;
    use crate::model::Order;
    use std::sync::Arc;

    fn order(id: i32, status: &str) -> Order {
        Order {
            id,
            status: status.to_string(),
            client_email: None,
            client_password_hash: None,
            created: chrono::Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn create_forces_pending_regardless_of_input() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command.expect_create().returning(|| Ok(order(1, "PENDING")));

        let service = OrderCommandService::new(Arc::new(command));
        let req = CreateOrderRequest {
            status: Some("COMPLETED".to_string()),
        };
        let response = service.create(&req).await.unwrap();

        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.status, "PENDING");
    }

    #[tokio::test]
    async fn update_with_status_applies_new_value() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command
            .expect_update_status()
            .withf(|id, status| *id == 1 && status.as_deref() == Some("COMPLETED"))
            .returning(|id, _| Ok(Some(order(id, "COMPLETED"))));

        let service = OrderCommandService::new(Arc::new(command));
        let req = UpdateOrderRequest {
            status: Some("COMPLETED".to_string()),
        };
        let response = service.update(1, &req).await.unwrap();

        assert_eq!(response.data.status, "COMPLETED");
    }

    #[tokio::test]
    async fn update_with_omitted_status_keeps_stored_value() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command
            .expect_update_status()
            .withf(|_, status| status.is_none())
            .returning(|id, _| Ok(Some(order(id, "PENDING"))));

        let service = OrderCommandService::new(Arc::new(command));
        let response = service.update(1, &UpdateOrderRequest::default()).await.unwrap();

        assert_eq!(response.data.status, "PENDING");
    }

    #[tokio::test]
    async fn update_with_empty_status_keeps_stored_value() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command
            .expect_update_status()
            .withf(|_, status| status.is_none())
            .returning(|id, _| Ok(Some(order(id, "PENDING"))));

        let service = OrderCommandService::new(Arc::new(command));
        let req = UpdateOrderRequest {
            status: Some(String::new()),
        };
        let response = service.update(1, &req).await.unwrap();

        assert_eq!(response.data.status, "PENDING");
    }

    #[tokio::test]
    async fn update_missing_order_is_not_found() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command.expect_update_status().returning(|_, _| Ok(None));

        let service = OrderCommandService::new(Arc::new(command));
        let err = service
            .update(42, &UpdateOrderRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_returns_confirmation_message() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command
            .expect_delete()
            .withf(|id| *id == 1)
            .returning(|_| Ok(1));

        let service = OrderCommandService::new(Arc::new(command));
        let response = service.delete(1).await.unwrap();

        assert_eq!(response.message, "Order deleted successfully");
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() {
        let mut command = MockOrderCommandRepositoryTrait::new();
        command.expect_delete().returning(|_| Ok(0));

        let service = OrderCommandService::new(Arc::new(command));
        let err = service.delete(42).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
