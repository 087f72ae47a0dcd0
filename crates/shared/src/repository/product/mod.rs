mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(ProductQueryRepository::new(db.clone())),
            command: Arc::new(ProductCommandRepository::new(db)),
        }
    }
}
