use crate::ledger::{Transaction, TransactionKind};
use crate::profile::UserProfile;

/// Points granted for each newly earned badge.
pub const BADGE_POINTS: u64 = 100;

/// The fixed, enumerable set of earnable achievements.
///
/// Each kind carries its predicate; no kind depends on another being earned,
/// so evaluation order never matters. A badge stays earned even if its
/// condition later turns false again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Rookie,
    TrackerPro,
    BigTicket,
    SuperSaver,
    StreakThree,
    StreakSeven,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 6] = [
        BadgeKind::Rookie,
        BadgeKind::TrackerPro,
        BadgeKind::BigTicket,
        BadgeKind::SuperSaver,
        BadgeKind::StreakThree,
        BadgeKind::StreakSeven,
    ];

    /// Stable identifier stored in the profile's badge set.
    pub fn id(&self) -> &'static str {
        match self {
            BadgeKind::Rookie => "rookie",
            BadgeKind::TrackerPro => "tracker_pro",
            BadgeKind::BigTicket => "big_spender",
            BadgeKind::SuperSaver => "saver",
            BadgeKind::StreakThree => "streak_3",
            BadgeKind::StreakSeven => "streak_7",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BadgeKind::Rookie => "Rookie Tracker",
            BadgeKind::TrackerPro => "Tracker Pro",
            BadgeKind::BigTicket => "Big Ticket",
            BadgeKind::SuperSaver => "Super Saver",
            BadgeKind::StreakThree => "Heating Up",
            BadgeKind::StreakSeven => "On Fire",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BadgeKind::Rookie => "Tracked your first transaction",
            BadgeKind::TrackerPro => "Tracked 50+ transactions",
            BadgeKind::BigTicket => "Added a transaction over 500 units",
            BadgeKind::SuperSaver => "Income exceeds expenses by 20%",
            BadgeKind::StreakThree => "Log transactions 3 days in a row",
            BadgeKind::StreakSeven => "Log transactions 7 days in a row",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BadgeKind::Rookie => "🌱",
            BadgeKind::TrackerPro => "📊",
            BadgeKind::BigTicket => "💎",
            BadgeKind::SuperSaver => "🐷",
            BadgeKind::StreakThree => "🕯️",
            BadgeKind::StreakSeven => "🔥",
        }
    }

    /// Evaluates this badge's condition against the full history and the
    /// post-streak-update profile.
    pub fn is_earned(&self, transactions: &[Transaction], profile: &UserProfile) -> bool {
        match self {
            BadgeKind::Rookie => !transactions.is_empty(),
            BadgeKind::TrackerPro => transactions.len() >= 50,
            BadgeKind::BigTicket => transactions.iter().any(|t| t.amount > 500.0),
            BadgeKind::SuperSaver => {
                let income: f64 = transactions
                    .iter()
                    .filter(|t| t.kind == TransactionKind::Income)
                    .map(|t| t.amount)
                    .sum();
                let expense: f64 = transactions
                    .iter()
                    .filter(|t| t.kind == TransactionKind::Expense)
                    .map(|t| t.amount)
                    .sum();
                income > 0.0 && (income - expense) > income * 0.2
            }
            BadgeKind::StreakThree => profile.current_streak >= 3,
            BadgeKind::StreakSeven => profile.current_streak >= 7,
        }
    }
}

/// Outcome of one evaluation pass: the kinds that newly became true and the
/// point delta the caller merges into the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeEvaluation {
    pub newly_earned: Vec<BadgeKind>,
    pub points_awarded: u64,
}

/// Checks every badge not yet in `profile.badges`. Already-earned badges are
/// skipped, so repeated evaluation on unchanged inputs awards nothing.
pub fn evaluate_badges(transactions: &[Transaction], profile: &UserProfile) -> BadgeEvaluation {
    let mut evaluation = BadgeEvaluation::default();
    for badge in BadgeKind::ALL {
        if profile.has_badge(badge.id()) {
            continue;
        }
        if badge.is_earned(transactions, profile) {
            tracing::info!(badge = badge.id(), "badge earned");
            evaluation.newly_earned.push(badge);
            evaluation.points_awarded += BADGE_POINTS;
        }
    }
    evaluation
}
