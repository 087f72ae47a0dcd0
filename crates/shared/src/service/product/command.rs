use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        // order_id existence is left to the store's foreign key
        let product = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Product created with ID={}", product.id);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        match self.command.update(id, req).await {
            Ok(Some(product)) => {
                info!("✅ Product updated with ID={id}");
                Ok(ApiResponse::success(
                    "Product updated successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                error!("❌ Product not found with ID={id}");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                error!("❌ Failed to update product with ID={id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let rows = self.command.delete(id).await.map_err(|e| {
            error!("❌ Failed to delete product with ID={id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if rows == 0 {
            error!("❌ Product not found with ID={id}");
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        info!("✅ Product deleted with ID={id}");

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}
