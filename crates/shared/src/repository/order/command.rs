use crate::{
    abstract_trait::OrderCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(&self) -> Result<OrderModel, RepositoryError> {
        info!("🏗️ Inserting new order");

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (status)
            VALUES ('PENDING')
            RETURNING id, status, client_email, client_password_hash, created
            "#,
        )
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(order)
    }

    async fn update_status(
        &self,
        id: i32,
        status: Option<String>,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        // single statement so the lookup and the write cannot race
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status = COALESCE($2, status)
            WHERE id = $1
            RETURNING id, status, client_email, client_password_hash, created
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update order with ID={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(order)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order with ID={id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
