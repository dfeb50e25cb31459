use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::CopyLimits;
use crate::pools::{
    industry_keywords, objective_emojis, objective_keywords, platform_emojis,
    platform_hashtag_seeds, platform_keywords, FILLER_HASHTAGS, FLAVOR_KEYWORDS, GENERIC_EMOJIS,
};
use crate::{slugify, AdCopyRequest, Objective, Platform};

const FLAVOR_SAMPLE: usize = 8;

/// Keywords for a response: base tags, then the industry/platform/objective
/// pools and a random flavor subset. Deduplicated, shuffled, truncated to a
/// randomized bound.
pub fn compose_keywords(
    request: &AdCopyRequest,
    industry: &'static str,
    limits: &CopyLimits,
    rng: &mut StdRng,
) -> Vec<String> {
    let mut candidates: Vec<String> = vec![
        slugify(&request.product_name),
        request.objective.label().to_string(),
        request.platform.label().to_string(),
        "ad".to_string(),
        "marketing".to_string(),
        "promotion".to_string(),
    ];

    candidates.extend(owned(industry_keywords(industry)));
    candidates.extend(owned(platform_keywords(request.platform)));
    candidates.extend(owned(objective_keywords(request.objective)));
    candidates.extend(flavor_sample(rng));

    finish(candidates, limits.keywords_min, limits.keywords_max, rng)
}

pub fn compose_hashtags(
    request: &AdCopyRequest,
    industry: &'static str,
    limits: &CopyLimits,
    rng: &mut StdRng,
) -> Vec<String> {
    let mut candidates: Vec<String> = vec![hashtagify(&request.product_name)];
    candidates.extend(owned(platform_hashtag_seeds(request.platform)));
    candidates.extend(industry_keywords(industry).iter().map(|tag| hashtagify(tag)));
    candidates.extend(
        objective_keywords(request.objective)
            .iter()
            .map(|tag| hashtagify(tag)),
    );
    candidates.extend(owned(FILLER_HASHTAGS));

    finish(candidates, limits.hashtags_min, limits.hashtags_max, rng)
}

pub fn compose_emojis(
    objective: Objective,
    platform: Platform,
    limits: &CopyLimits,
    rng: &mut StdRng,
) -> Vec<String> {
    let mut candidates = owned(objective_emojis(objective));
    candidates.extend(owned(platform_emojis(platform)));
    candidates.extend(owned(GENERIC_EMOJIS));

    finish(candidates, limits.emojis_min, limits.emojis_max, rng)
}

pub fn hashtagify(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        "#ad".to_string()
    } else {
        format!("#{}", cleaned)
    }
}

pub fn dedupe(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

fn finish(candidates: Vec<String>, min: usize, max: usize, rng: &mut StdRng) -> Vec<String> {
    let mut values = dedupe(candidates);
    values.shuffle(rng);
    let bound = if max > min {
        rng.gen_range(min..=max)
    } else {
        max
    };
    values.truncate(bound.min(values.len()).max(1));
    values
}

fn flavor_sample(rng: &mut StdRng) -> Vec<String> {
    let mut flavor = owned(FLAVOR_KEYWORDS);
    flavor.shuffle(rng);
    flavor.truncate(FLAVOR_SAMPLE);
    flavor
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
