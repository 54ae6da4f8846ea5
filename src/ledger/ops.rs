use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gamification::{evaluate_badges, update_streak_on_new_transaction, BadgeKind};
use crate::profile::UserProfile;

use super::{ledger::Ledger, transaction::NewTransaction};

/// What a single insert changed, for callers that surface awards in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub transaction_id: Uuid,
    pub points_awarded: u64,
    pub new_badges: Vec<BadgeKind>,
}

/// Inserts a new entry and applies the gamification pipeline.
///
/// The streak update runs first and its result is merged before badges are
/// evaluated, so streak-gated badges see the post-update value. Both updated
/// collections are returned for the caller to persist.
pub fn record_transaction(
    ledger: Ledger,
    profile: UserProfile,
    input: NewTransaction,
    now: DateTime<Utc>,
) -> (Ledger, UserProfile, RecordOutcome) {
    let mut ledger = ledger;
    let transaction_id = ledger.insert(input.into_transaction());

    let points_before = profile.points;
    let mut updated = update_streak_on_new_transaction(&profile, now);

    let evaluation = evaluate_badges(ledger.transactions(), &updated);
    for badge in &evaluation.newly_earned {
        let _ = updated.badges.insert(badge.id().to_string());
    }
    updated.points += evaluation.points_awarded;

    let outcome = RecordOutcome {
        transaction_id,
        points_awarded: updated.points - points_before,
        new_badges: evaluation.newly_earned,
    };
    tracing::info!(
        id = %outcome.transaction_id,
        points = outcome.points_awarded,
        badges = outcome.new_badges.len(),
        "transaction recorded"
    );
    (ledger, updated, outcome)
}

/// Removes an entry by id. Unknown ids leave the ledger unchanged; this is
/// not an error condition.
pub fn delete_transaction(ledger: Ledger, id: Uuid) -> Ledger {
    let mut ledger = ledger;
    ledger.remove(id);
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::{BADGE_POINTS, STREAK_STARTED_POINTS};
    use crate::ledger::{Category, TransactionKind};
    use chrono::TimeZone;

    fn profile() -> UserProfile {
        UserProfile::new("Ada", "", "🦊", "USD", Utc::now())
    }

    fn entry(amount: f64) -> NewTransaction {
        NewTransaction::new(
            TransactionKind::Expense,
            amount,
            Category::Food,
            "groceries",
            Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn first_record_awards_streak_and_rookie_points() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let (ledger, updated, outcome) =
            record_transaction(Ledger::new(), profile(), entry(12.0), now);

        assert_eq!(ledger.len(), 1);
        assert_eq!(updated.current_streak, 1);
        assert!(updated.has_badge("rookie"));
        assert_eq!(
            outcome.points_awarded,
            STREAK_STARTED_POINTS + BADGE_POINTS
        );
        assert_eq!(updated.points, outcome.points_awarded);
    }

    #[test]
    fn badges_see_the_post_update_streak() {
        let mut p = profile();
        p.current_streak = 2;
        p.longest_streak = 2;
        p.last_transaction_date =
            Some(Utc.with_ymd_and_hms(2025, 6, 9, 12, 0, 0).unwrap());
        let _ = p.badges.insert("rookie".to_string());

        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let mut ledger = Ledger::new();
        ledger.insert(entry(5.0).into_transaction());

        let (_, updated, outcome) = record_transaction(ledger, p, entry(5.0), now);
        assert_eq!(updated.current_streak, 3);
        assert!(updated.has_badge("streak_3"));
        assert!(outcome.new_badges.contains(&BadgeKind::StreakThree));
    }

    #[test]
    fn delete_of_unknown_id_is_a_silent_no_op() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let (ledger, _, _) = record_transaction(Ledger::new(), profile(), entry(3.0), now);
        let after = delete_transaction(ledger.clone(), Uuid::new_v4());
        assert_eq!(after, ledger);
    }

    #[test]
    fn delete_then_add_models_an_amend() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let (ledger, p, outcome) =
            record_transaction(Ledger::new(), profile(), entry(30.0), now);
        let ledger = delete_transaction(ledger, outcome.transaction_id);
        assert!(ledger.is_empty());

        let (ledger, p, _) = record_transaction(ledger, p, entry(35.0), now);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].amount, 35.0);
        // Same-day re-entry adds no further streak points.
        assert_eq!(p.current_streak, 1);
    }
}
