use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        info!("🏗️ Inserting new product for order_id={}", req.order_id);

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, description, price, quantity, order_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, quantity, order_id, created
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.quantity)
        .bind(req.order_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert product: {e:?}");
            match &e {
                sqlx::Error::Database(db_err)
                    if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
                {
                    RepositoryError::ForeignKey(format!("order {} does not exist", req.order_id))
                }
                _ => RepositoryError::from(e),
            }
        })?;

        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        // single statement so the lookup and the write cannot race
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity)
            WHERE id = $1
            RETURNING id, name, description, price, quantity, order_id, created
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.description.as_deref())
        .bind(req.price)
        .bind(req.quantity)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product with ID={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product with ID={id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
