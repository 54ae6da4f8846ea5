use once_cell::sync::Lazy;

use crate::profile::UserProfile;

/// How an avatar becomes selectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockRule {
    /// Available from onboarding onwards.
    Default,
    /// Requires at least this many points.
    Points(u64),
    /// Requires the badge with this id.
    Badge(&'static str),
}

/// A selectable avatar and its unlock gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarItem {
    pub id: &'static str,
    pub emoji: &'static str,
    pub name: &'static str,
    pub unlock: UnlockRule,
}

static CATALOG: Lazy<Vec<AvatarItem>> = Lazy::new(|| {
    vec![
        AvatarItem {
            id: "dev",
            emoji: "🧑‍💻",
            name: "Dev",
            unlock: UnlockRule::Default,
        },
        AvatarItem {
            id: "artist",
            emoji: "👩‍🎨",
            name: "Artist",
            unlock: UnlockRule::Default,
        },
        AvatarItem {
            id: "fox",
            emoji: "🦊",
            name: "Fox",
            unlock: UnlockRule::Default,
        },
        AvatarItem {
            id: "panda",
            emoji: "🐼",
            name: "Panda",
            unlock: UnlockRule::Default,
        },
        AvatarItem {
            id: "hero",
            emoji: "🦸‍♂️",
            name: "Hero",
            unlock: UnlockRule::Points(100),
        },
        AvatarItem {
            id: "wizard",
            emoji: "🧙",
            name: "Wizard",
            unlock: UnlockRule::Points(300),
        },
        AvatarItem {
            id: "tiger",
            emoji: "🐯",
            name: "Tiger",
            unlock: UnlockRule::Points(500),
        },
        AvatarItem {
            id: "robot",
            emoji: "🤖",
            name: "Bot",
            unlock: UnlockRule::Points(1000),
        },
        AvatarItem {
            id: "rich",
            emoji: "💎",
            name: "Tycoon",
            unlock: UnlockRule::Badge("big_spender"),
        },
        AvatarItem {
            id: "piggy",
            emoji: "🐷",
            name: "Saver",
            unlock: UnlockRule::Badge("saver"),
        },
        AvatarItem {
            id: "fire",
            emoji: "🔥",
            name: "On Fire",
            unlock: UnlockRule::Badge("streak_7"),
        },
    ]
});

/// The full avatar catalog, defaults first.
pub fn catalog() -> &'static [AvatarItem] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static AvatarItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Reports eligibility only; selection enforcement is the caller's job.
pub fn is_unlocked(item: &AvatarItem, profile: &UserProfile) -> bool {
    match &item.unlock {
        UnlockRule::Default => true,
        UnlockRule::Points(threshold) => profile.points >= *threshold,
        UnlockRule::Badge(id) => profile.has_badge(id),
    }
}
