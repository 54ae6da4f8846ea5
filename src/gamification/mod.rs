//! Streaks, badges, and avatar unlocks layered on top of the ledger.

pub mod avatar;
pub mod badges;
pub mod streak;

pub use avatar::{catalog as avatar_catalog, is_unlocked, AvatarItem, UnlockRule};
pub use badges::{evaluate_badges, BadgeEvaluation, BadgeKind, BADGE_POINTS};
pub use streak::{
    update_streak_on_new_transaction, STREAK_CONTINUED_POINTS, STREAK_STARTED_POINTS,
};
