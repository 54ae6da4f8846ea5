use chrono::{DateTime, Utc};

use crate::profile::UserProfile;

/// Points for extending a streak onto a consecutive day.
pub const STREAK_CONTINUED_POINTS: u64 = 10;
/// Points for starting (or restarting) a streak.
pub const STREAK_STARTED_POINTS: u64 = 5;

/// Applies the daily-logging streak rules for a transaction recorded at
/// `now` and returns the updated profile.
///
/// Calendar days are compared after truncating both `now` and the stored
/// last-transaction instant with the same `date_naive()` source, so the
/// rules behave consistently across midnight. A second call on the same
/// calendar day returns the profile unchanged: the streak is per-day, not
/// per-entry, and no duplicate points are awarded.
pub fn update_streak_on_new_transaction(
    profile: &UserProfile,
    now: DateTime<Utc>,
) -> UserProfile {
    let today = now.date_naive();
    let last_day = profile.last_transaction_date.map(|d| d.date_naive());

    if last_day == Some(today) {
        return profile.clone();
    }

    let continued = last_day.is_some() && last_day == today.pred_opt();

    let mut updated = profile.clone();
    updated.current_streak = if continued {
        profile.current_streak + 1
    } else {
        1
    };
    updated.longest_streak = updated.longest_streak.max(updated.current_streak);
    updated.last_transaction_date = Some(now);
    updated.points += if updated.current_streak > 1 {
        STREAK_CONTINUED_POINTS
    } else {
        STREAK_STARTED_POINTS
    };

    tracing::debug!(
        streak = updated.current_streak,
        longest = updated.longest_streak,
        "streak updated"
    );
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile() -> UserProfile {
        UserProfile::new("Ada", "", "🦊", "USD", Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn first_transaction_starts_a_streak() {
        let updated = update_streak_on_new_transaction(&profile(), at(2025, 6, 10, 12));
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 1);
        assert_eq!(updated.points, STREAK_STARTED_POINTS);
        assert_eq!(updated.last_transaction_date, Some(at(2025, 6, 10, 12)));
    }

    #[test]
    fn same_day_logging_is_idempotent() {
        let once = update_streak_on_new_transaction(&profile(), at(2025, 6, 10, 9));
        let twice = update_streak_on_new_transaction(&once, at(2025, 6, 10, 21));
        assert_eq!(twice, once);
    }

    #[test]
    fn consecutive_day_extends_the_streak() {
        let mut p = profile();
        p.current_streak = 2;
        p.longest_streak = 2;
        p.last_transaction_date = Some(at(2025, 6, 9, 18));
        let before = p.points;

        let updated = update_streak_on_new_transaction(&p, at(2025, 6, 10, 8));
        assert_eq!(updated.current_streak, 3);
        assert_eq!(updated.longest_streak, 3);
        assert_eq!(updated.points, before + STREAK_CONTINUED_POINTS);
    }

    #[test]
    fn gap_resets_to_day_one_without_touching_longest() {
        let mut p = profile();
        p.current_streak = 9;
        p.longest_streak = 9;
        p.last_transaction_date = Some(at(2025, 6, 1, 12));

        let updated = update_streak_on_new_transaction(&p, at(2025, 6, 10, 12));
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 9);
        assert_eq!(updated.points, STREAK_STARTED_POINTS);
    }

    #[test]
    fn cross_midnight_boundary_counts_as_consecutive() {
        let mut p = profile();
        p.current_streak = 1;
        p.longest_streak = 1;
        p.last_transaction_date = Some(at(2025, 6, 9, 23));

        let updated = update_streak_on_new_transaction(&p, at(2025, 6, 10, 0));
        assert_eq!(updated.current_streak, 2);
    }
}
