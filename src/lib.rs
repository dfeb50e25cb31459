pub mod compose;
pub mod config;
pub mod hashtags;
pub mod insights;
pub mod pools;
pub mod score;
pub mod templates;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::compose::{compose_emojis, compose_hashtags, compose_keywords};
use crate::config::GeneratorConfig;
use crate::score::score_objective;
use crate::templates::{select_benefits, select_tagline, select_templates, select_value_proposition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
    Google,
    Youtube,
    Linkedin,
    Tiktok,
    Twitter,
    Website,
}

impl Platform {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "facebook" | "fb" => Some(Platform::Facebook),
            "instagram" | "ig" => Some(Platform::Instagram),
            "google" | "search" => Some(Platform::Google),
            "youtube" | "yt" => Some(Platform::Youtube),
            "linkedin" => Some(Platform::Linkedin),
            "tiktok" => Some(Platform::Tiktok),
            "twitter" | "x" => Some(Platform::Twitter),
            "website" | "web" => Some(Platform::Website),
            _ => None,
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        Platform::from_str(value).unwrap_or(Platform::Google)
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Google => "google",
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
            Platform::Website => "website",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Awareness,
    Traffic,
    Conversions,
    Engagement,
    Leads,
    Sales,
}

impl Objective {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "awareness" | "brand" => Some(Objective::Awareness),
            "traffic" | "clicks" => Some(Objective::Traffic),
            "conversions" | "conversion" => Some(Objective::Conversions),
            "engagement" => Some(Objective::Engagement),
            "leads" | "lead" => Some(Objective::Leads),
            "sales" | "sale" => Some(Objective::Sales),
            _ => None,
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        Objective::from_str(value).unwrap_or(Objective::Awareness)
    }

    pub fn label(self) -> &'static str {
        match self {
            Objective::Awareness => "awareness",
            Objective::Traffic => "traffic",
            Objective::Conversions => "conversions",
            Objective::Engagement => "engagement",
            Objective::Leads => "leads",
            Objective::Sales => "sales",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Funny,
    Urgent,
    Inspirational,
    Emotional,
    Authoritative,
}

impl Tone {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "funny" | "humorous" => Some(Tone::Funny),
            "urgent" => Some(Tone::Urgent),
            "inspirational" | "inspiring" => Some(Tone::Inspirational),
            "emotional" => Some(Tone::Emotional),
            "authoritative" => Some(Tone::Authoritative),
            _ => None,
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        Tone::from_str(value).unwrap_or(Tone::Professional)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Funny => "funny",
            Tone::Urgent => "urgent",
            Tone::Inspirational => "inspirational",
            Tone::Emotional => "emotional",
            Tone::Authoritative => "authoritative",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdCopyRequest {
    pub product_name: String,
    pub target_audience: String,
    pub platform: Platform,
    pub objective: Objective,
    pub tone: Tone,
    pub industry: String,
    pub max_length: Option<usize>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub budget: Option<f64>,
}

impl Default for AdCopyRequest {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            target_audience: String::new(),
            platform: Platform::Facebook,
            objective: Objective::Awareness,
            tone: Tone::Professional,
            industry: "technology".to_string(),
            max_length: None,
            language: None,
            region: None,
            budget: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    pub performance_score: f64,
    pub estimated_ctr: f64,
    pub estimated_cpc: f64,
    pub improvement_potential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCopyResponse {
    pub creative_id: String,
    pub headline: String,
    pub primary_text: String,
    pub call_to_action: String,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub emojis: Vec<String>,
    pub performance_score: f64,
    pub estimated_ctr: f64,
    pub estimated_cpc: f64,
    pub improvement_potential: f64,
    pub tagline: String,
    pub value_proposition: String,
    pub benefits: Vec<String>,
}

/// Copy drafted by a remote generative provider, overlaid on the template
/// output when present. Missing fields keep the template values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderCopy {
    pub headline: Option<String>,
    pub primary_text: Option<String>,
    pub call_to_action: Option<String>,
    pub tagline: Option<String>,
    pub value_proposition: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

pub fn generate_ad_copy(request: &AdCopyRequest) -> AdCopyResponse {
    generate_ad_copy_with_seed(request, rand::random())
}

pub fn generate_ad_copy_with_seed(request: &AdCopyRequest, seed: u64) -> AdCopyResponse {
    let config = load_generator_config();
    generate_with_provider(request, None, seed, &config)
}

/// Main generation entry point. Internal failures degrade to a generic
/// fallback response; this layer never surfaces an error to its caller.
pub fn generate_with_provider(
    request: &AdCopyRequest,
    provider: Option<&ProviderCopy>,
    seed: u64,
    config: &GeneratorConfig,
) -> AdCopyResponse {
    build_response(request, provider, seed, config)
        .unwrap_or_else(|_| fallback_response(request, config))
}

fn build_response(
    request: &AdCopyRequest,
    provider: Option<&ProviderCopy>,
    seed: u64,
    config: &GeneratorConfig,
) -> Result<AdCopyResponse, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let limits = &config.limits;

    let industry = pools::resolve_industry(&request.industry);
    let selected = select_templates(request.objective, &request.product_name, &mut rng)?;

    let mut headline = truncate_chars(&selected.headline, limits.headline_max);
    let mut primary_text = compose_primary_text(&selected.description, &request.target_audience);
    let text_max = request
        .max_length
        .map(|value| value.min(limits.primary_text_max))
        .unwrap_or(limits.primary_text_max);
    primary_text = truncate_chars(&primary_text, text_max);
    let mut call_to_action = selected.call_to_action;

    let suggestions = templates::alternate_headlines(
        request.objective,
        &request.product_name,
        &headline,
        limits.suggestions,
        limits.headline_max,
    );

    let keywords = compose_keywords(request, industry, limits, &mut rng);
    let hashtags = compose_hashtags(request, industry, limits, &mut rng);
    let emojis = compose_emojis(request.objective, request.platform, limits, &mut rng);

    let estimate = score_objective(request.objective, &config.bands, &mut rng);

    let mut tagline = select_tagline(request.tone, &request.product_name, &mut rng);
    let mut value_proposition =
        select_value_proposition(request.tone, &request.product_name, &mut rng);
    let mut benefits = select_benefits(&mut rng);

    if let Some(copy) = provider {
        if let Some(value) = non_empty(copy.headline.as_deref()) {
            headline = truncate_chars(value, limits.headline_max);
        }
        if let Some(value) = non_empty(copy.primary_text.as_deref()) {
            primary_text = truncate_chars(value, text_max);
        }
        if let Some(value) = non_empty(copy.call_to_action.as_deref()) {
            call_to_action = value.to_string();
        }
        if let Some(value) = non_empty(copy.tagline.as_deref()) {
            tagline = value.to_string();
        }
        if let Some(value) = non_empty(copy.value_proposition.as_deref()) {
            value_proposition = value.to_string();
        }
        if !copy.benefits.is_empty() {
            benefits = copy
                .benefits
                .iter()
                .map(|benefit| benefit.trim().to_string())
                .filter(|benefit| !benefit.is_empty())
                .take(5)
                .collect();
        }
    }

    Ok(AdCopyResponse {
        creative_id: derive_creative_id(request),
        headline,
        primary_text,
        call_to_action,
        suggestions,
        keywords,
        hashtags,
        emojis,
        performance_score: estimate.performance_score,
        estimated_ctr: estimate.estimated_ctr,
        estimated_cpc: estimate.estimated_cpc,
        improvement_potential: estimate.improvement_potential,
        tagline,
        value_proposition,
        benefits,
    })
}

pub fn fallback_response(request: &AdCopyRequest, config: &GeneratorConfig) -> AdCopyResponse {
    let limits = &config.limits;
    let product = if request.product_name.trim().is_empty() {
        "Your Product"
    } else {
        request.product_name.trim()
    };
    let headline = truncate_chars(
        &format!("{}: Quality You Can Trust", product),
        limits.headline_max,
    );
    let primary_text = truncate_chars(
        &format!(
            "{} delivers real value for people like you. See what it can do today.",
            product
        ),
        limits.primary_text_max,
    );

    AdCopyResponse {
        creative_id: derive_creative_id(request),
        headline,
        primary_text,
        call_to_action: "Learn More".to_string(),
        suggestions: vec![
            truncate_chars(&format!("Discover {}", product), limits.headline_max),
            truncate_chars(&format!("{} Is Here", product), limits.headline_max),
        ],
        keywords: vec![
            slugify(product),
            request.objective.label().to_string(),
            request.platform.label().to_string(),
            "marketing".to_string(),
            "promotion".to_string(),
        ],
        hashtags: vec![
            format!("#{}", slugify(product).replace('-', "")),
            "#marketing".to_string(),
            "#brand".to_string(),
        ],
        emojis: vec!["✨".to_string(), "🚀".to_string(), "🎯".to_string()],
        performance_score: midpoint(config.bands.performance_min, config.bands.performance_max),
        estimated_ctr: midpoint(config.bands.ctr_min, config.bands.ctr_max),
        estimated_cpc: midpoint(config.bands.cpc_min, config.bands.cpc_max),
        improvement_potential: midpoint(config.bands.improvement_min, config.bands.improvement_max),
        tagline: format!("{}. Built for you.", product),
        value_proposition: format!(
            "{} combines quality and value in a way you can see from day one.",
            product
        ),
        benefits: vec![
            "Quality you can count on".to_string(),
            "Flexible options for every budget".to_string(),
            "Backed by responsive support".to_string(),
        ],
    }
}

fn compose_primary_text(description: &str, audience: &str) -> String {
    let audience = audience.trim();
    if audience.is_empty() {
        description.to_string()
    } else {
        format!("{} Perfect for {}.", description, audience)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn midpoint(low: f64, high: f64) -> f64 {
    (low + high) / 2.0
}

fn load_generator_config() -> GeneratorConfig {
    GeneratorConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default()
}

pub fn derive_creative_id(request: &AdCopyRequest) -> String {
    let payload = format!(
        "{}:{}:{}",
        request.product_name.trim().to_lowercase(),
        request.platform.label(),
        request.objective.label()
    );
    format!("creative_{:x}", stable_hash64(&payload))
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "product".to_string()
    } else {
        slug
    }
}

pub fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        value.chars().take(max).collect()
    }
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
