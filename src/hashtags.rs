use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::compose::dedupe;
use crate::pools::{platform_hashtag_seeds, FILLER_HASHTAGS};
use crate::Platform;

struct TriggerRule {
    triggers: &'static [&'static str],
    tags: &'static [&'static str],
}

/// Keyword-triggered hashtag groups. A rule fires when any of its trigger
/// words appears in the (lowercased) content.
const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        triggers: &["fitness", "workout", "gym"],
        tags: &["#fitness", "#workout", "#gym", "#fitfam", "#training"],
    },
    TriggerRule {
        triggers: &["health", "wellness"],
        tags: &["#health", "#wellness", "#lifestyle", "#selfcare", "#healthyliving"],
    },
    TriggerRule {
        triggers: &["food", "recipe", "cooking"],
        tags: &["#food", "#foodie", "#delicious", "#recipes", "#homecooking"],
    },
    TriggerRule {
        triggers: &["travel", "vacation", "trip"],
        tags: &["#travel", "#wanderlust", "#adventure", "#vacation", "#explore"],
    },
    TriggerRule {
        triggers: &["fashion", "style", "outfit"],
        tags: &["#fashion", "#style", "#ootd", "#trendy", "#outfitinspo"],
    },
    TriggerRule {
        triggers: &["beauty", "skincare", "makeup"],
        tags: &["#beauty", "#skincare", "#makeup", "#glow", "#selflove"],
    },
    TriggerRule {
        triggers: &["tech", "software", "app"],
        tags: &["#tech", "#technology", "#innovation", "#software", "#ai"],
    },
    TriggerRule {
        triggers: &["money", "finance", "invest"],
        tags: &["#finance", "#investing", "#money", "#wealth", "#financialfreedom"],
    },
    TriggerRule {
        triggers: &["sale", "discount", "deal"],
        tags: &["#sale", "#discount", "#deals", "#shopping", "#savings"],
    },
    TriggerRule {
        triggers: &["learn", "course", "education"],
        tags: &["#learning", "#education", "#courses", "#skills", "#growth"],
    },
    TriggerRule {
        triggers: &["game", "gaming", "esports"],
        tags: &["#gaming", "#gamer", "#esports", "#videogames", "#gamenight"],
    },
    TriggerRule {
        triggers: &["car", "drive", "vehicle"],
        tags: &["#cars", "#automotive", "#carlovers", "#drive", "#roadtrip"],
    },
];

pub fn generate_hashtags(content: &str, platform: Platform, cap: usize) -> Vec<String> {
    generate_hashtags_with_seed(content, platform, cap, rand::random())
}

/// Platform seed tags first, then keyword-triggered groups, then generic
/// fillers; order-preserving dedupe and a hard cap. Seeded and triggered
/// tags sit ahead of the fillers so the cap never evicts them.
pub fn generate_hashtags_with_seed(
    content: &str,
    platform: Platform,
    cap: usize,
    seed: u64,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lowered = content.to_lowercase();

    let mut tags: Vec<String> = platform_hashtag_seeds(platform)
        .iter()
        .map(|tag| tag.to_string())
        .collect();

    for rule in TRIGGER_RULES {
        if rule.triggers.iter().any(|trigger| lowered.contains(trigger)) {
            tags.extend(rule.tags.iter().map(|tag| tag.to_string()));
        }
    }

    let mut fillers: Vec<String> = FILLER_HASHTAGS.iter().map(|tag| tag.to_string()).collect();
    fillers.shuffle(&mut rng);
    tags.extend(fillers);

    let mut tags = dedupe(tags);
    tags.truncate(cap.max(1));
    tags
}
