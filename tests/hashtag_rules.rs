use adcopy_gen::hashtags::generate_hashtags_with_seed;
use adcopy_gen::Platform;

const CAP: usize = 30;

#[test]
fn fitness_content_on_instagram_triggers_expected_tags() {
    for seed in 0..10 {
        let tags = generate_hashtags_with_seed(
            "I love fitness and health",
            Platform::Instagram,
            CAP,
            seed,
        );

        for expected in ["#fitness", "#health", "#wellness", "#lifestyle", "#instagram"] {
            assert!(
                tags.contains(&expected.to_string()),
                "missing {} in {:?}",
                expected,
                tags
            );
        }
        assert!(tags.len() <= CAP);
    }
}

#[test]
fn hashtags_are_unique_and_well_formed() {
    let tags = generate_hashtags_with_seed(
        "sale on travel deals for foodies",
        Platform::Facebook,
        CAP,
        9,
    );

    let mut deduped = tags.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), tags.len());
    assert!(tags.iter().all(|tag| tag.starts_with('#')));
}

#[test]
fn trigger_matching_is_case_insensitive() {
    let tags = generate_hashtags_with_seed("FITNESS Goals 2026", Platform::Tiktok, CAP, 1);
    assert!(tags.contains(&"#fitness".to_string()));
    assert!(tags.contains(&"#workout".to_string()));
}

#[test]
fn cap_holds_when_many_rules_fire() {
    let content =
        "fitness health food travel fashion beauty tech money sale learn gaming car";
    for seed in 0..5 {
        let tags = generate_hashtags_with_seed(content, Platform::Instagram, CAP, seed);
        assert_eq!(tags.len(), CAP);
        // Seeded and triggered tags outrank fillers, so the cap keeps them.
        assert!(tags.contains(&"#instagram".to_string()));
        assert!(tags.contains(&"#fitness".to_string()));
    }
}

#[test]
fn plain_content_still_yields_seeds_and_fillers() {
    let tags = generate_hashtags_with_seed("hello world", Platform::Google, CAP, 4);
    assert!(tags.contains(&"#google".to_string()));
    assert_eq!(tags.len(), 20); // 5 seeds + 15 fillers, no triggers
}

#[test]
fn unknown_platform_string_falls_back_to_google_seeds() {
    let platform = Platform::parse_or_default("myspace");
    assert_eq!(platform, Platform::Google);

    let tags = generate_hashtags_with_seed("new product launch", platform, CAP, 2);
    assert!(tags.contains(&"#google".to_string()));
}
