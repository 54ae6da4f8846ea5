use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// Closed set of category labels shared by all transactions.
///
/// Each label has a natural kind, but a transaction is free to carry any
/// label regardless of its own kind; the split only drives which subset a
/// form offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Education,
    Others,
    Salary,
    Freelance,
    Investments,
    Gift,
    #[serde(rename = "Other Income")]
    OtherIncome,
}

impl Category {
    pub const EXPENSE: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Others,
    ];

    pub const INCOME: [Category; 5] = [
        Category::Salary,
        Category::Freelance,
        Category::Investments,
        Category::Gift,
        Category::OtherIncome,
    ];

    /// The transaction kind this label naturally belongs to.
    pub fn kind(&self) -> TransactionKind {
        if Self::INCOME.contains(self) {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Others => "Others",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investments => "Investments",
            Category::Gift => "Gift",
            Category::OtherIncome => "Other Income",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚌",
            Category::Shopping => "🛍️",
            Category::Bills => "🧾",
            Category::Entertainment => "🎬",
            Category::Health => "🏥",
            Category::Education => "🎓",
            Category::Others => "📦",
            Category::Salary => "💰",
            Category::Freelance => "💻",
            Category::Investments => "📈",
            Category::Gift => "🎁",
            Category::OtherIncome => "💵",
        }
    }

    /// Hex color used by chart and progress rendering.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#FF6B6B",
            Category::Transport => "#4ECDC4",
            Category::Shopping => "#45B7D1",
            Category::Bills => "#FF9F43",
            Category::Entertainment => "#9B59B6",
            Category::Health => "#2ECC71",
            Category::Education => "#3498DB",
            Category::Others => "#95A5A6",
            Category::Salary => "#27ae60",
            Category::Freelance => "#2ecc71",
            Category::Investments => "#1abc9c",
            Category::Gift => "#f1c40f",
            Category::OtherIncome => "#16a085",
        }
    }
}
