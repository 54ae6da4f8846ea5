use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A single recorded income or expense entry.
///
/// Entries are immutable once created: amending one is modeled as
/// delete-then-add. Temporal logic must always look at `date`, never at the
/// position of the entry inside the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    /// Records predating the income/expense split lack this field.
    #[serde(default)]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: Category,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Absent for entries created before accounts existed, or after the
    /// referenced account was removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
}

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

/// Caller-supplied fields for a new ledger entry; the id is assigned on
/// insert.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: Category,
    pub title: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub account_id: Option<Uuid>,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: Category,
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            amount,
            category,
            title: title.into(),
            date,
            notes: None,
            account_id: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            title: self.title,
            date: self.date,
            notes: self.notes,
            account_id: self.account_id,
        }
    }
}
