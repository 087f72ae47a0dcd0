use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Order as OrderModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create(&self) -> Result<OrderModel, RepositoryError>;

    /// `None` keeps the stored status. Returns `None` when no row matched.
    async fn update_status(
        &self,
        id: i32,
        status: Option<String>,
    ) -> Result<Option<OrderModel>, RepositoryError>;

    /// Returns the number of rows deleted.
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
