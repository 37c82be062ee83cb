// crates/shared-kernel/src/domain/transaction/transaction_stub.rs

use crate::domain::transaction::Transaction;
use std::any::Any;

pub struct FakeTransaction;

impl Transaction for FakeTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
