// crates/shared-kernel/src/infrastructure/postgres/postgres_transaction_manager.rs

use crate::domain::transaction::{Transaction, TransactionManager, TxClosure};
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::PostgresTransaction;
use sqlx::{Pool, Postgres};
use std::future::Future;
use std::pin::Pin;

pub struct PostgresTransactionManager {
    pool: Pool<Postgres>,
}

impl PostgresTransactionManager {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(
        &'a self,
        f: TxClosure<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let tx = pool
                .begin()
                .await
                .map_err(|e| DomainError::Infrastructure(format!("Failed to begin transaction: {}", e)))?;

            let wrapped: Box<dyn Transaction> = Box::new(PostgresTransaction::new(tx));

            // En erreur, la closure a consommé le handle : drop = rollback sqlx.
            let returned = f(wrapped).await?;

            let concrete = returned
                .into_any()
                .downcast::<PostgresTransaction>()
                .map_err(|_| DomainError::Internal("Type mismatch: Expected PostgresTransaction".into()))?;

            concrete
                .into_inner()
                .commit()
                .await
                .map_err(|e| DomainError::Infrastructure(format!("Commit failed: {}", e)))
        })
    }
}
