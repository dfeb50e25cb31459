use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, ScoreBands};
use crate::{generate_with_provider, AdCopyRequest, AdCopyResponse, Objective, Platform};

struct RegionProfile {
    name: &'static str,
    locales: &'static [&'static str],
    reach_min: u64,
    reach_max: u64,
}

const REGIONS: &[RegionProfile] = &[
    RegionProfile {
        name: "North America",
        locales: &["en-US", "en-CA", "es-MX"],
        reach_min: 2_000_000,
        reach_max: 9_000_000,
    },
    RegionProfile {
        name: "Western Europe",
        locales: &["en-GB", "de-DE", "fr-FR", "es-ES"],
        reach_min: 1_500_000,
        reach_max: 7_000_000,
    },
    RegionProfile {
        name: "Southeast Asia",
        locales: &["en-SG", "id-ID", "th-TH", "vi-VN"],
        reach_min: 2_500_000,
        reach_max: 10_000_000,
    },
    RegionProfile {
        name: "Latin America",
        locales: &["es-AR", "pt-BR", "es-CO"],
        reach_min: 1_800_000,
        reach_max: 8_000_000,
    },
    RegionProfile {
        name: "Middle East",
        locales: &["ar-AE", "ar-SA", "en-AE"],
        reach_min: 800_000,
        reach_max: 4_000_000,
    },
    RegionProfile {
        name: "Oceania",
        locales: &["en-AU", "en-NZ"],
        reach_min: 400_000,
        reach_max: 1_500_000,
    },
    RegionProfile {
        name: "South Asia",
        locales: &["en-IN", "hi-IN", "bn-BD"],
        reach_min: 3_000_000,
        reach_max: 12_000_000,
    },
    RegionProfile {
        name: "East Asia",
        locales: &["ja-JP", "ko-KR", "zh-TW"],
        reach_min: 1_200_000,
        reach_max: 6_000_000,
    },
];

fn audience_segments(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Awareness => &[
            "broad interest lookalikes",
            "new-to-brand shoppers",
            "category browsers",
            "video viewers 25-44",
            "early adopters",
            "trend followers",
        ],
        Objective::Traffic => &[
            "blog readers",
            "comparison shoppers",
            "newsletter clickers",
            "search-intent visitors",
            "deal hunters",
            "mobile-first browsers",
        ],
        Objective::Conversions => &[
            "cart abandoners",
            "past purchasers",
            "high-intent visitors",
            "wishlist savers",
            "checkout drop-offs",
            "repeat buyers",
        ],
        Objective::Engagement => &[
            "page followers",
            "frequent commenters",
            "content sharers",
            "community members",
            "poll participants",
            "video completers",
        ],
        Objective::Leads => &[
            "webinar attendees",
            "whitepaper downloaders",
            "free-trial browsers",
            "demo requesters",
            "pricing-page visitors",
            "b2b decision makers",
        ],
        Objective::Sales => &[
            "seasonal shoppers",
            "discount subscribers",
            "loyalty members",
            "high-ltv lookalikes",
            "flash-sale responders",
            "gift buyers",
        ],
    }
}

fn platform_notes(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Facebook => &[
            "Broad targeting with creative testing tends to beat narrow stacking here.",
            "Keep frequency under 3 per week to avoid fatigue in smaller regions.",
        ],
        Platform::Instagram => &[
            "Lead with vertical creative; feed-only placements limit reach.",
            "Reels placements skew younger across every region.",
        ],
        Platform::Google => &[
            "Localize keywords per locale rather than translating them literally.",
            "Separate campaigns per region keep bid strategies comparable.",
        ],
        Platform::Youtube => &[
            "Skippable in-stream works best for reach; bumpers for frequency.",
            "Subtitled creative lifts completion rates in non-English locales.",
        ],
        Platform::Linkedin => &[
            "Job-function targeting travels better across regions than job titles.",
            "Weekday delivery windows matter more here than on other platforms.",
        ],
        Platform::Tiktok => &[
            "Native-feeling creative localizes better than polished brand spots.",
            "Spark Ads from regional creators outperform dark posts.",
        ],
        Platform::Twitter => &[
            "Anchor regional pushes to live moments and trending windows.",
            "Keep copy short; translated long-form loses engagement fast.",
        ],
        Platform::Website => &[
            "Serve localized landing pages before scaling paid traffic to a region.",
            "Currency and shipping clarity drive regional conversion rates.",
        ],
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRecommendation {
    pub region: String,
    pub locales: Vec<String>,
    pub estimated_reach: u64,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalTargeting {
    pub regions: Vec<RegionRecommendation>,
    pub audience_segments: Vec<String>,
    pub notes: Vec<String>,
}

pub fn generate_global_targeting(objective: Objective, platform: Platform) -> GlobalTargeting {
    generate_global_targeting_with_seed(objective, platform, rand::random())
}

pub fn generate_global_targeting_with_seed(
    objective: Objective,
    platform: Platform,
    seed: u64,
) -> GlobalTargeting {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut indices: Vec<usize> = (0..REGIONS.len()).collect();
    indices.shuffle(&mut rng);
    let region_count = rng.gen_range(4..=6);
    indices.truncate(region_count);

    let regions = indices
        .into_iter()
        .enumerate()
        .map(|(rank, idx)| {
            let profile = &REGIONS[idx];
            RegionRecommendation {
                region: profile.name.to_string(),
                locales: profile.locales.iter().map(|l| l.to_string()).collect(),
                estimated_reach: rng.gen_range(profile.reach_min..=profile.reach_max),
                priority: match rank {
                    0 => "high".to_string(),
                    1 | 2 => "medium".to_string(),
                    _ => "standard".to_string(),
                },
            }
        })
        .collect();

    let mut segments: Vec<String> = audience_segments(objective)
        .iter()
        .map(|segment| segment.to_string())
        .collect();
    segments.shuffle(&mut rng);
    segments.truncate(4);

    GlobalTargeting {
        regions,
        audience_segments: segments,
        notes: platform_notes(platform)
            .iter()
            .map(|note| note.to_string())
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Starter,
    Growth,
    Pro,
    Enterprise,
}

impl PackageTier {
    pub fn label(self) -> &'static str {
        match self {
            PackageTier::Starter => "starter",
            PackageTier::Growth => "growth",
            PackageTier::Pro => "pro",
            PackageTier::Enterprise => "enterprise",
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            PackageTier::Starter => &[
                "1 connected ad account",
                "5 generated creatives per month",
                "Basic performance estimates",
            ],
            PackageTier::Growth => &[
                "3 connected ad accounts",
                "50 generated creatives per month",
                "Hashtag and keyword suggestions",
                "Email support",
            ],
            PackageTier::Pro => &[
                "10 connected ad accounts",
                "Unlimited generated creatives",
                "Global targeting recommendations",
                "Priority support",
            ],
            PackageTier::Enterprise => &[
                "Unlimited ad accounts",
                "Unlimited generated creatives",
                "Dedicated account manager",
                "Custom integrations",
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecommendation {
    pub package: PackageTier,
    pub monthly_budget: f64,
    pub features: Vec<String>,
    pub rationale: Vec<String>,
}

pub fn recommend_package(monthly_budget: f64) -> PackageRecommendation {
    let budget = monthly_budget.max(0.0);
    let package = if budget < 300.0 {
        PackageTier::Starter
    } else if budget < 1500.0 {
        PackageTier::Growth
    } else if budget < 5000.0 {
        PackageTier::Pro
    } else {
        PackageTier::Enterprise
    };

    let mut rationale = vec![format!(
        "A monthly ad budget around ${:.0} fits the {} tier.",
        budget,
        package.label()
    )];
    match package {
        PackageTier::Starter => rationale.push(
            "Start small: validate creatives on one account before scaling spend.".to_string(),
        ),
        PackageTier::Growth => rationale.push(
            "Enough volume to A/B test copy variants across a few accounts.".to_string(),
        ),
        PackageTier::Pro => rationale.push(
            "At this spend, unlimited creatives and targeting guidance pay for themselves."
                .to_string(),
        ),
        PackageTier::Enterprise => rationale.push(
            "Budgets at this level usually need custom integrations and hands-on help."
                .to_string(),
        ),
    }

    PackageRecommendation {
        package,
        monthly_budget: budget,
        features: package.features().iter().map(|f| f.to_string()).collect(),
        rationale,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPrediction {
    pub channel: String,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub estimated_ctr: f64,
    pub estimated_cpc: f64,
}

pub fn generate_performance_predictions(
    budget: f64,
    platforms: &[Platform],
    bands: &ScoreBands,
) -> Vec<ChannelPrediction> {
    generate_performance_predictions_with_seed(budget, platforms, bands, rand::random())
}

/// Projects per-channel volume from the budget using the same bounded bands
/// as the scorer. Not a forecast: the CTR/CPC draws are random within their
/// ranges, only the arithmetic between them is real.
pub fn generate_performance_predictions_with_seed(
    budget: f64,
    platforms: &[Platform],
    bands: &ScoreBands,
    seed: u64,
) -> Vec<ChannelPrediction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let channels: Vec<Platform> = if platforms.is_empty() {
        vec![Platform::Facebook, Platform::Google, Platform::Instagram]
    } else {
        platforms.to_vec()
    };

    let budget = budget.max(0.0);
    let spend_per_channel = budget / channels.len() as f64;

    channels
        .into_iter()
        .map(|platform| {
            let estimated_cpc = rng.gen_range(bands.cpc_min..=bands.cpc_max);
            let estimated_ctr = rng.gen_range(bands.ctr_min..=bands.ctr_max);
            let clicks = spend_per_channel / estimated_cpc;
            let impressions = clicks / (estimated_ctr / 100.0);
            let conversion_rate = rng.gen_range(0.02..=0.08);
            let conversions = clicks * conversion_rate;

            ChannelPrediction {
                channel: platform.label().to_string(),
                spend: spend_per_channel,
                impressions: impressions.round() as u64,
                clicks: clicks.round() as u64,
                conversions: conversions.round() as u64,
                estimated_ctr,
                estimated_cpc,
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct OptimizeRequest {
    pub copy_request: AdCopyRequest,
    pub current_ctr: f64,
    pub current_cpc: f64,
    pub daily_spend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub suggestions: Vec<String>,
    pub revised: AdCopyResponse,
    pub improvement_potential: f64,
}

pub fn optimize_ad(request: &OptimizeRequest, config: &GeneratorConfig) -> OptimizationReport {
    optimize_ad_with_seed(request, config, rand::random())
}

pub fn optimize_ad_with_seed(
    request: &OptimizeRequest,
    config: &GeneratorConfig,
    seed: u64,
) -> OptimizationReport {
    let suggestions = build_optimization_suggestions(request, &config.bands);
    let revised = generate_with_provider(&request.copy_request, None, seed, config);
    let improvement_potential = revised.improvement_potential;

    OptimizationReport {
        suggestions,
        revised,
        improvement_potential,
    }
}

fn build_optimization_suggestions(request: &OptimizeRequest, bands: &ScoreBands) -> Vec<String> {
    let mut suggestions = Vec::new();

    if request.current_ctr < bands.ctr_min {
        suggestions.push(
            "CTR is below the typical range; test a sharper headline and a stronger first line."
                .to_string(),
        );
    }
    if request.current_cpc > bands.cpc_max {
        suggestions.push(
            "CPC is running high; tighten audience targeting or lower bids on broad placements."
                .to_string(),
        );
    }
    if request.daily_spend > 0.0 && request.daily_spend < 10.0 {
        suggestions.push(
            "Daily spend under $10 rarely exits the learning phase; consolidate budget into one ad set."
                .to_string(),
        );
    }
    if request.daily_spend > 500.0 {
        suggestions.push(
            "At this spend level, split the budget across two creatives to hedge fatigue."
                .to_string(),
        );
    }

    match request.copy_request.objective {
        Objective::Awareness => suggestions.push(
            "Optimize for reach frequency of 2-3 per week rather than raw impressions.".to_string(),
        ),
        Objective::Traffic => suggestions.push(
            "Send clicks to a fast, focused landing page; match its headline to the ad.".to_string(),
        ),
        Objective::Conversions | Objective::Sales => suggestions.push(
            "Add urgency to the call to action and keep the path to checkout short.".to_string(),
        ),
        Objective::Engagement => suggestions.push(
            "End the primary text with a direct question to invite comments.".to_string(),
        ),
        Objective::Leads => suggestions.push(
            "Shorten the form; each extra field costs a measurable share of signups.".to_string(),
        ),
    }

    match request.copy_request.platform {
        Platform::Instagram | Platform::Tiktok => suggestions.push(
            "Refresh creative every 1-2 weeks; visual fatigue hits fastest on this platform."
                .to_string(),
        ),
        Platform::Google => suggestions.push(
            "Mirror the top search terms in the headline to lift quality score.".to_string(),
        ),
        _ => {}
    }

    suggestions
}
