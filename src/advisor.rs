//! Boundary contracts for the external AI capability.
//!
//! The engine never initiates these calls; callers hand a finished result
//! over, and failures become user-facing fallback text rather than engine
//! state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::{Category, Transaction, TransactionKind};

/// Opaque failure from the external capability.
#[derive(Debug, Error)]
#[error("advisor call failed: {message}")]
pub struct AdvisorError {
    pub message: String,
}

impl AdvisorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fields extracted from a scanned receipt. All optional: the scanner
/// returns whatever it could read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReceiptData {
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub category: Option<Category>,
}

/// Extracts transaction fields from a receipt image payload.
pub trait ReceiptScanner {
    fn scan_receipt(&self, image: &[u8]) -> Result<ReceiptData, AdvisorError>;
}

/// One expense entry as sent to the insight capability.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightExpense {
    pub date: chrono::DateTime<chrono::Utc>,
    pub title: String,
    pub amount: f64,
    pub category: Category,
}

/// Produces free-form advisory text from recent expenses.
pub trait InsightProvider {
    fn spending_insights(&self, expenses: &[InsightExpense]) -> Result<String, AdvisorError>;
}

/// Cap on how many expenses are sent per insight request.
pub const INSIGHT_EXPENSE_LIMIT: usize = 50;

pub const INSIGHTS_EMPTY_MESSAGE: &str = "Add some expenses to get AI-powered insights!";
pub const INSIGHTS_FAILURE_MESSAGE: &str = "Unable to connect to AI for insights.";

/// The most recent expenses, newest first, capped at
/// [`INSIGHT_EXPENSE_LIMIT`].
pub fn insight_payload(transactions: &[Transaction]) -> Vec<InsightExpense> {
    let mut expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .collect();
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    expenses
        .into_iter()
        .take(INSIGHT_EXPENSE_LIMIT)
        .map(|t| InsightExpense {
            date: t.date,
            title: t.title.clone(),
            amount: t.amount,
            category: t.category,
        })
        .collect()
}

/// Runs the provider and converts empty input or failure into the
/// user-facing fallback strings.
pub fn insights_or_fallback<P: InsightProvider>(
    provider: &P,
    transactions: &[Transaction],
) -> String {
    let payload = insight_payload(transactions);
    if payload.is_empty() {
        return INSIGHTS_EMPTY_MESSAGE.to_string();
    }
    match provider.spending_insights(&payload) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "insight provider failed");
            INSIGHTS_FAILURE_MESSAGE.to_string()
        }
    }
}
