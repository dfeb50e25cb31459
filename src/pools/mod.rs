pub mod industry;
pub mod objective;
pub mod platform;

pub use industry::{industry_keywords, resolve_industry};
pub use objective::{objective_emojis, objective_keywords};
pub use platform::{platform_emojis, platform_hashtag_seeds, platform_keywords};

/// Generic "flavor" keywords mixed into every composed keyword list.
pub const FLAVOR_KEYWORDS: &[&str] = &[
    "premium",
    "best",
    "top",
    "exclusive",
    "quality",
    "affordable",
    "trusted",
    "new",
    "popular",
    "recommended",
    "authentic",
    "proven",
    "effortless",
    "modern",
    "reliable",
    "standout",
];

pub const GENERIC_EMOJIS: &[&str] = &["😊", "🎈", "🌞", "🥇"];

/// Generic hashtags appended after seeded and triggered tags.
pub const FILLER_HASHTAGS: &[&str] = &[
    "#marketingtips",
    "#smallbusiness",
    "#brand",
    "#onlinemarketing",
    "#growthhacking",
    "#advertising",
    "#digital",
    "#content",
    "#socialmediamarketing",
    "#entrepreneur",
    "#startup",
    "#branding",
    "#strategy",
    "#engagementboost",
    "#promo",
];
