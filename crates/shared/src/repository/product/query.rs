use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::Pagination, errors::RepositoryError, model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let (limit, offset) = pagination.bounds();

        info!("🔍 Fetching products with limit={limit} offset={offset}");

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, quantity, order_id, created
            FROM products
            ORDER BY created DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, quantity, order_id, created
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product with ID={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}
