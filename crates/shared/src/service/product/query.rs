use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::Pagination,
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        pagination: &Pagination,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all(pagination).await.map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Fetched {} products", products.len());

        let data = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::success("Products fetched successfully", data))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        match self.query.find_by_id(id).await {
            // a matching row with an empty name is reported as missing
            Ok(Some(product)) if !product.name.is_empty() => {
                info!("✅ Product found with ID={id}");
                Ok(ApiResponse::success(
                    "Product fetched successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(_) => {
                error!("❌ Product not found with ID={id}");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                error!("❌ Failed to fetch product with ID={id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
