use adcopy_gen::config::GeneratorConfig;
use adcopy_gen::pools::{industry_keywords, resolve_industry};
use adcopy_gen::{
    generate_ad_copy_with_seed, generate_with_provider, AdCopyRequest, Objective, Platform,
    ProviderCopy, Tone,
};

fn request(product: &str, platform: Platform, objective: Objective) -> AdCopyRequest {
    let mut request = AdCopyRequest::default();
    request.product_name = product.to_string();
    request.platform = platform;
    request.objective = objective;
    request
}

#[test]
fn headline_and_primary_text_respect_length_caps() {
    let platforms = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Google,
        Platform::Tiktok,
    ];
    let objectives = [
        Objective::Awareness,
        Objective::Traffic,
        Objective::Conversions,
        Objective::Engagement,
        Objective::Leads,
        Objective::Sales,
    ];

    for seed in 0..25 {
        for platform in platforms {
            for objective in objectives {
                let mut req = request("Northwind Analytics Suite", platform, objective);
                req.target_audience = "small business owners".to_string();
                let response = generate_ad_copy_with_seed(&req, seed);

                assert!(response.headline.chars().count() <= 40);
                assert!(response.primary_text.chars().count() <= 100);
                assert!(!response.headline.is_empty());
                assert!(!response.primary_text.is_empty());
                assert!(!response.call_to_action.is_empty());
            }
        }
    }
}

#[test]
fn max_length_truncates_primary_text() {
    let mut req = request("Acme Shoes", Platform::Facebook, Objective::Conversions);
    req.max_length = Some(50);

    for seed in 0..10 {
        let response = generate_ad_copy_with_seed(&req, seed);
        assert!(response.primary_text.chars().count() <= 50);
    }
}

#[test]
fn tag_lists_contain_no_duplicates() {
    for seed in 0..25 {
        let req = request("Glow Serum", Platform::Instagram, Objective::Sales);
        let response = generate_ad_copy_with_seed(&req, seed);

        for list in [&response.keywords, &response.hashtags, &response.emojis] {
            let mut deduped = list.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), list.len(), "duplicate entries in {:?}", list);
        }
    }
}

#[test]
fn tag_lists_respect_count_bounds() {
    for seed in 0..25 {
        let req = request("Glow Serum", Platform::Youtube, Objective::Leads);
        let response = generate_ad_copy_with_seed(&req, seed);

        assert!(response.keywords.len() >= 25 && response.keywords.len() <= 30);
        assert!(response.hashtags.len() >= 15 && response.hashtags.len() <= 20);
        assert!(response.emojis.len() >= 8 && response.emojis.len() <= 12);
    }
}

#[test]
fn unknown_industry_falls_back_to_technology() {
    assert_eq!(resolve_industry("quantum basket weaving"), "technology");
    assert_eq!(
        industry_keywords("quantum basket weaving"),
        industry_keywords("technology")
    );
    assert_eq!(resolve_industry("FASHION"), "fashion");
    assert_eq!(resolve_industry("Real Estate"), "realestate");

    let mut req = request("Widget", Platform::Google, Objective::Traffic);
    req.industry = "quantum basket weaving".to_string();
    let response = generate_ad_copy_with_seed(&req, 3);
    assert!(!response.keywords.is_empty());
}

#[test]
fn performance_estimates_stay_inside_bands() {
    let objectives = [
        Objective::Awareness,
        Objective::Traffic,
        Objective::Conversions,
        Objective::Engagement,
        Objective::Leads,
        Objective::Sales,
    ];

    for seed in 0..100 {
        for objective in objectives {
            let req = request("Acme Shoes", Platform::Facebook, objective);
            let response = generate_ad_copy_with_seed(&req, seed);

            assert!(response.performance_score >= 75.0 && response.performance_score <= 95.0);
            assert!(response.estimated_ctr >= 2.0 && response.estimated_ctr <= 5.0);
            assert!(response.estimated_cpc >= 1.0 && response.estimated_cpc <= 3.0);
            assert!(
                response.improvement_potential >= 5.0 && response.improvement_potential <= 20.0
            );
        }
    }
}

#[test]
fn identical_seed_reproduces_identical_output() {
    let req = request("Acme Shoes", Platform::Facebook, Objective::Conversions);
    let first = generate_ad_copy_with_seed(&req, 42);
    let second = generate_ad_copy_with_seed(&req, 42);

    assert_eq!(first.headline, second.headline);
    assert_eq!(first.keywords, second.keywords);
    assert_eq!(first.performance_score, second.performance_score);
}

#[test]
fn conversions_scenario_for_acme_shoes() {
    let conversion_ctas = ["Buy Now", "Get Started", "Order Today", "Shop Now", "Buy Today"];

    for seed in 0..20 {
        let mut req = request("Acme Shoes", Platform::Facebook, Objective::Conversions);
        req.tone = Tone::Professional;
        req.industry = "fashion".to_string();
        let response = generate_ad_copy_with_seed(&req, seed);

        assert!(
            response.headline.contains("Acme Shoes"),
            "headline missing product: {}",
            response.headline
        );
        assert!(
            conversion_ctas.contains(&response.call_to_action.as_str()),
            "unexpected CTA: {}",
            response.call_to_action
        );
        assert!(response.keywords.len() >= 25 && response.keywords.len() <= 30);
    }
}

#[test]
fn enrichment_fields_are_always_populated() {
    for seed in 0..10 {
        let mut req = request("Acme Shoes", Platform::Linkedin, Objective::Awareness);
        req.tone = Tone::Inspirational;
        let response = generate_ad_copy_with_seed(&req, seed);

        assert!(!response.tagline.is_empty());
        assert!(!response.value_proposition.is_empty());
        assert_eq!(response.benefits.len(), 3);
        assert!(!response.suggestions.is_empty());
        assert!(response.suggestions.len() <= 3);
        assert!(response.creative_id.starts_with("creative_"));
    }
}

#[test]
fn provider_copy_overrides_template_fields() {
    let config = GeneratorConfig::default();
    let req = request("Acme Shoes", Platform::Facebook, Objective::Conversions);
    let provider = ProviderCopy {
        headline: Some("Acme Shoes: Run Faster".to_string()),
        primary_text: Some("Lightweight shoes engineered for speed.".to_string()),
        call_to_action: Some("Order Today".to_string()),
        tagline: None,
        value_proposition: None,
        benefits: vec!["Featherlight sole".to_string(), "30-day trial".to_string()],
    };

    let response = generate_with_provider(&req, Some(&provider), 7, &config);

    assert_eq!(response.headline, "Acme Shoes: Run Faster");
    assert_eq!(response.primary_text, "Lightweight shoes engineered for speed.");
    assert_eq!(response.call_to_action, "Order Today");
    assert_eq!(response.benefits.len(), 2);
    assert!(!response.tagline.is_empty());
    assert!(response.keywords.len() >= 25);
}

#[test]
fn oversized_provider_copy_is_truncated() {
    let config = GeneratorConfig::default();
    let req = request("Acme Shoes", Platform::Facebook, Objective::Conversions);
    let provider = ProviderCopy {
        headline: Some("A".repeat(120)),
        primary_text: Some("B".repeat(300)),
        ..ProviderCopy::default()
    };

    let response = generate_with_provider(&req, Some(&provider), 7, &config);
    assert_eq!(response.headline.chars().count(), 40);
    assert_eq!(response.primary_text.chars().count(), 100);
}
