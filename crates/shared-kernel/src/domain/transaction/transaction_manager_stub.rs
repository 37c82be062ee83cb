// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use crate::domain::transaction::transaction_stub::FakeTransaction;
use crate::domain::transaction::{TransactionManager, TxClosure};
use std::future::Future;
use std::pin::Pin;

/// Manager sans transaction réelle : exécute la closure telle quelle.
/// Suffisant pour les tests de use case et les adaptateurs en mémoire
/// (l'atomicité réelle vit au niveau Postgres).
pub struct StubTxManager;

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(
        &'a self,
        f: TxClosure<'a>,
    ) -> Pin<Box<dyn Future<Output = crate::errors::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            f(Box::new(FakeTransaction)).await.map(|_| ())
        })
    }
}
