use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    category::Category,
    transaction::{Transaction, TransactionKind},
};

/// Spending limit configuration embedded in the user profile.
///
/// An `amount` of zero means no budget has been set; it is a sentinel, not a
/// real limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetConfig {
    pub amount: f64,
    pub period: BudgetPeriod,
    #[serde(default)]
    pub category_limits: BTreeMap<Category, f64>,
}

impl BudgetConfig {
    pub fn new(amount: f64, period: BudgetPeriod) -> Self {
        Self {
            amount,
            period,
            category_limits: BTreeMap::new(),
        }
    }

    pub fn with_category_limit(mut self, category: Category, limit: f64) -> Self {
        let _ = self.category_limits.insert(category, limit);
        self
    }

    /// Whether an overall limit has been configured.
    pub fn is_set(&self) -> bool {
        self.amount > 0.0
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new(0.0, BudgetPeriod::Monthly)
    }
}

/// Recurring window over which a spending limit is measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// First calendar day of the period containing `today`.
    ///
    /// Weeks start on Monday; a Sunday reference anchors six days back.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            BudgetPeriod::Weekly => {
                let delta = today.weekday().num_days_from_monday() as i64;
                today - Duration::days(delta)
            }
            BudgetPeriod::Monthly => today.with_day(1).unwrap_or(today),
            BudgetPeriod::Yearly => {
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
            }
        }
    }
}

/// Consumption of the active budget period.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub period_start: NaiveDate,
    pub total_spent: f64,
    /// Never negative, even when the limit is blown.
    pub remaining: f64,
    pub overall_exceeded: bool,
    /// Configured categories with spend this period, highest utilization
    /// first.
    pub categories: Vec<CategoryBudgetStatus>,
}

/// Per-category consumption against a configured limit.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBudgetStatus {
    pub category: Category,
    pub limit: f64,
    pub spent: f64,
    pub exceeded: bool,
}

impl CategoryBudgetStatus {
    pub fn utilization(&self) -> f64 {
        self.spent / self.limit
    }
}

/// Computes spend against `config` for the period containing `now`.
///
/// Expenses dated from the period start onwards count; the period has no
/// upper bound. Categories with a non-positive configured limit are excluded
/// from the per-category list, as are configured categories with no spend.
pub fn budget_status(
    config: &BudgetConfig,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> BudgetStatus {
    let period_start = config.period.start(now.date_naive());

    let in_period: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.date.date_naive() >= period_start)
        .collect();

    let total_spent: f64 = in_period.iter().map(|t| t.amount).sum();

    let mut categories: Vec<CategoryBudgetStatus> = config
        .category_limits
        .iter()
        .filter(|(_, limit)| **limit > 0.0)
        .filter_map(|(category, limit)| {
            let spent: f64 = in_period
                .iter()
                .filter(|t| t.category == *category)
                .map(|t| t.amount)
                .sum();
            if spent > 0.0 {
                Some(CategoryBudgetStatus {
                    category: *category,
                    limit: *limit,
                    spent,
                    exceeded: spent > *limit,
                })
            } else {
                None
            }
        })
        .collect();
    categories.sort_by(|a, b| {
        b.utilization()
            .partial_cmp(&a.utilization())
            .unwrap_or(Ordering::Equal)
    });

    BudgetStatus {
        period_start,
        total_spent,
        remaining: (config.amount - total_spent).max(0.0),
        overall_exceeded: config.is_set() && total_spent > config.amount,
        categories,
    }
}
