use adcopy_gen::config::GeneratorConfig;
use adcopy_gen::insights::{
    generate_global_targeting_with_seed, generate_performance_predictions_with_seed,
    optimize_ad_with_seed, recommend_package, OptimizeRequest, PackageTier,
};
use adcopy_gen::{AdCopyRequest, Objective, Platform};

#[test]
fn package_tiers_follow_budget_thresholds() {
    assert_eq!(recommend_package(0.0).package, PackageTier::Starter);
    assert_eq!(recommend_package(299.99).package, PackageTier::Starter);
    assert_eq!(recommend_package(300.0).package, PackageTier::Growth);
    assert_eq!(recommend_package(1499.0).package, PackageTier::Growth);
    assert_eq!(recommend_package(1500.0).package, PackageTier::Pro);
    assert_eq!(recommend_package(4999.0).package, PackageTier::Pro);
    assert_eq!(recommend_package(5000.0).package, PackageTier::Enterprise);
    // Negative budgets clamp to zero instead of erroring.
    assert_eq!(recommend_package(-50.0).package, PackageTier::Starter);
}

#[test]
fn package_recommendation_carries_features_and_rationale() {
    let recommendation = recommend_package(2000.0);
    assert!(!recommendation.features.is_empty());
    assert_eq!(recommendation.rationale.len(), 2);
    assert!(recommendation.rationale[0].contains("pro"));
}

#[test]
fn predictions_stay_inside_bands_and_split_budget() {
    let bands = GeneratorConfig::default().bands;
    let platforms = [Platform::Facebook, Platform::Google];

    for seed in 0..50 {
        let predictions =
            generate_performance_predictions_with_seed(1000.0, &platforms, &bands, seed);
        assert_eq!(predictions.len(), 2);

        let total_spend: f64 = predictions.iter().map(|p| p.spend).sum();
        assert!((total_spend - 1000.0).abs() < 1e-6);

        for prediction in predictions {
            assert!(prediction.estimated_ctr >= 2.0 && prediction.estimated_ctr <= 5.0);
            assert!(prediction.estimated_cpc >= 1.0 && prediction.estimated_cpc <= 3.0);
            assert!(prediction.impressions >= prediction.clicks);
            assert!(prediction.clicks >= prediction.conversions);
        }
    }
}

#[test]
fn predictions_default_to_three_channels() {
    let bands = GeneratorConfig::default().bands;
    let predictions = generate_performance_predictions_with_seed(900.0, &[], &bands, 5);
    assert_eq!(predictions.len(), 3);
}

#[test]
fn targeting_recommends_bounded_region_set() {
    for seed in 0..20 {
        let targeting =
            generate_global_targeting_with_seed(Objective::Conversions, Platform::Facebook, seed);

        assert!(targeting.regions.len() >= 4 && targeting.regions.len() <= 6);
        assert_eq!(targeting.regions[0].priority, "high");
        assert_eq!(targeting.audience_segments.len(), 4);
        assert!(!targeting.notes.is_empty());
        for region in &targeting.regions {
            assert!(region.estimated_reach > 0);
            assert!(!region.locales.is_empty());
        }
    }
}

#[test]
fn targeting_segments_track_objective() {
    let targeting = generate_global_targeting_with_seed(Objective::Leads, Platform::Linkedin, 11);
    // Every recommended segment comes from the leads segment table.
    let leads_segments = [
        "webinar attendees",
        "whitepaper downloaders",
        "free-trial browsers",
        "demo requesters",
        "pricing-page visitors",
        "b2b decision makers",
    ];
    for segment in &targeting.audience_segments {
        assert!(leads_segments.contains(&segment.as_str()));
    }
}

#[test]
fn optimization_flags_weak_metrics() {
    let config = GeneratorConfig::default();
    let mut copy_request = AdCopyRequest::default();
    copy_request.product_name = "Acme Shoes".to_string();
    copy_request.objective = Objective::Conversions;
    copy_request.platform = Platform::Google;

    let request = OptimizeRequest {
        copy_request,
        current_ctr: 0.8,
        current_cpc: 4.5,
        daily_spend: 6.0,
    };

    let report = optimize_ad_with_seed(&request, &config, 13);
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.contains("CTR is below")));
    assert!(report.suggestions.iter().any(|s| s.contains("CPC")));
    assert!(report.suggestions.iter().any(|s| s.contains("learning phase")));
    assert!(report.revised.headline.chars().count() <= 40);
    assert!(report.improvement_potential >= 5.0 && report.improvement_potential <= 20.0);
}

#[test]
fn optimization_with_healthy_metrics_keeps_generic_tips_only() {
    let config = GeneratorConfig::default();
    let mut copy_request = AdCopyRequest::default();
    copy_request.product_name = "Acme Shoes".to_string();
    copy_request.objective = Objective::Awareness;

    let request = OptimizeRequest {
        copy_request,
        current_ctr: 3.5,
        current_cpc: 1.5,
        daily_spend: 50.0,
    };

    let report = optimize_ad_with_seed(&request, &config, 13);
    assert!(!report.suggestions.iter().any(|s| s.contains("CTR is below")));
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.contains("reach frequency")));
}
