use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Transaction;

/// The full transaction collection for the single user.
///
/// Serializes as a bare list so the persisted record stays a plain JSON
/// array. Insertion order puts the newest entry first for display, but no
/// computation may rely on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Prepends `transaction` and returns its id.
    pub fn insert(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        id
    }

    /// Removes the entry with `id`. Unknown ids are a benign no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.transactions.retain(|t| t.id != id);
    }

    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Entries sorted by `date`, newest first: the ordering export
    /// collaborators receive.
    pub fn newest_first(&self) -> Vec<Transaction> {
        let mut sorted = self.transactions.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Clears the account reference on every entry pointing at `account_id`.
    pub fn detach_account(&mut self, account_id: Uuid) {
        for txn in &mut self.transactions {
            if txn.account_id == Some(account_id) {
                txn.account_id = None;
            }
        }
    }
}
