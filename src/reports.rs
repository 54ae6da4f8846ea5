//! Read-side aggregates consumed by export and dashboard collaborators.
//!
//! Everything here is a pure function of the transaction list; nothing
//! mutates engine state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::ledger::{BudgetPeriod, Category, Transaction, TransactionKind};

/// Headline figures for report headers and the dashboard balance card.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub transaction_count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let total_expense: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    LedgerSummary {
        transaction_count: transactions.len(),
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// Total amount per category, largest first, for the summary breakdown
/// sheet.
pub fn category_totals(transactions: &[Transaction]) -> Vec<(Category, f64)> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for txn in transactions {
        *totals.entry(txn.category).or_insert(0.0) += txn.amount;
    }
    let mut sorted: Vec<(Category, f64)> = totals.into_iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Symbol for a display currency code, `$` when the code is unknown.
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "CAD" => "C$",
        "AUD" => "A$",
        "BRL" => "R$",
        _ => "$",
    }
}

/// Progress of the weekly logging challenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyActivity {
    pub logged: usize,
    pub goal: usize,
    /// Capped at 100.
    pub progress_percent: f64,
}

/// Default number of entries the weekly challenge asks for.
pub const WEEKLY_GOAL: usize = 5;

/// Counts entries dated inside the week containing `now` (Monday anchor).
pub fn weekly_activity(
    transactions: &[Transaction],
    now: DateTime<Utc>,
    goal: usize,
) -> WeeklyActivity {
    let week_start = BudgetPeriod::Weekly.start(now.date_naive());
    let logged = transactions
        .iter()
        .filter(|t| t.date.date_naive() >= week_start)
        .count();
    let progress_percent = if goal == 0 {
        100.0
    } else {
        ((logged as f64 / goal as f64) * 100.0).min(100.0)
    };
    WeeklyActivity {
        logged,
        goal,
        progress_percent,
    }
}
