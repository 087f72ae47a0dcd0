use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::Pagination, errors::RepositoryError, model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, pagination: &Pagination) -> Result<Vec<OrderModel>, RepositoryError> {
        let (limit, offset) = pagination.bounds();

        info!("🔍 Fetching orders with limit={limit} offset={offset}");

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, status, client_email, client_password_hash, created
            FROM orders
            ORDER BY created DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, status, client_email, client_password_hash, created
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order with ID={id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(order)
    }

    async fn find_by_client_email(
        &self,
        client_email: &str,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, status, client_email, client_password_hash, created
            FROM orders
            WHERE client_email = $1
            "#,
        )
        .bind(client_email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order by client email: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(order)
    }
}
