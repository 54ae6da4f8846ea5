use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named bucket transactions can optionally be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The pair seeded into brand-new and migrated profiles.
    pub fn default_pair() -> Vec<Account> {
        vec![
            Account::new("Cash", AccountKind::Cash).with_color("#10b981"),
            Account::new("Bank Account", AccountKind::Bank).with_color("#3b82f6"),
        ]
    }
}

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Bank,
    Cash,
    Credit,
    Other,
}
