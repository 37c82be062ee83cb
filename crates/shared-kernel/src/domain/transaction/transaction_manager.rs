// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use crate::domain::transaction::Transaction;
use crate::errors::Result;
use std::future::Future;
use std::pin::Pin;

/// La closure reçoit la transaction et la REND en cas de succès : c'est le
/// manager qui commite. Une closure qui sort en erreur laisse tomber le
/// handle, ce qui vaut rollback : tout ou rien, jamais d'écriture partielle.
pub type TxClosure<'a> = Box<
    dyn FnOnce(
            Box<dyn Transaction>,
        ) -> Pin<Box<dyn Future<Output = Result<Box<dyn Transaction>>> + Send + 'a>>
        + Send
        + 'a,
>;

pub trait TransactionManager: Send + Sync {
    fn in_transaction<'a>(
        &'a self,
        f: TxClosure<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Helper générique : évite le Box::pin explicite à chaque appel de use case.
pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F, Fut>(&'a self, f: F) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
    where
        F: FnOnce(Box<dyn Transaction>) -> Fut + Send + 'a,
        Fut: Future<Output = Result<Box<dyn Transaction>>> + Send + 'a,
    {
        self.in_transaction(Box::new(move |tx| Box::pin(f(tx))))
    }
}
impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
