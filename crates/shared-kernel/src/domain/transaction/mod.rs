// crates/shared-kernel/src/domain/transaction/mod.rs

mod transaction;
mod transaction_manager;
mod transaction_manager_stub;
mod transaction_stub;

pub use transaction::Transaction;
pub use transaction_manager::{TransactionManager, TransactionManagerExt, TxClosure};
pub use transaction_manager_stub::StubTxManager;
pub use transaction_stub::FakeTransaction;
