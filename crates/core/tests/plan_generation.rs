use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use reelplan_core::{
    Delivery, FormatStyle, Goal, HookStyle, Pace, PlanConfig, derive_timeframe,
    generate_plan, generate_plan_with_rng, generate_scenes,
};

#[test]
fn test_sample_brief_end_to_end() {
    let config = PlanConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let plan = generate_plan_with_rng(&config, &mut rng);

    assert_eq!(plan.scenes.len(), 8);
    assert_eq!(plan.scenes.last().map(|s| s.end), Some(42.0));
    assert_eq!(plan.metric_to_watch, "Track saves per view and completion rate");
    for bonus in [
        "Macro shot of ingredients hitting the pan",
        "Fridge organization reveal with timer overlay",
    ] {
        assert!(plan.broll_ideas.iter().any(|idea| idea == bonus), "missing {bonus}");
    }
    assert_eq!(plan.backup_hooks.len(), 3);
    assert_eq!(plan.velocity_tips.len(), 5);
    assert_eq!(plan.posting_windows.len(), 3);
    assert_eq!(plan.overlay_prompts.len(), 4);
    assert_eq!(plan.caption.body.len(), 3);
    assert!(!plan.primary_hook.contains('{'));
}

#[test]
fn test_scene_timeline_properties() {
    let mut rng = StdRng::seed_from_u64(7);
    for pace in Pace::ALL {
        for duration in 15..=90 {
            let config = PlanConfig {
                duration,
                pace,
                ..PlanConfig::default()
            };
            let scenes = generate_scenes(&config, &mut rng);
            assert!(
                (4..=8).contains(&scenes.len()),
                "{} scenes for {duration}s at {pace}",
                scenes.len()
            );
            assert_eq!(scenes[0].start, 0.0);
            assert_eq!(scenes[scenes.len() - 1].end, duration as f64);
            for pair in scenes.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert_eq!(scenes[0].label, "Hook");
        }
    }
}

#[test]
fn test_hashtags_and_unique_picks_across_styles() {
    let mut rng = StdRng::seed_from_u64(99);
    for format_style in FormatStyle::ALL {
        for goal in Goal::ALL {
            let config = PlanConfig {
                format_style,
                goal,
                ..PlanConfig::default()
            };
            let plan = generate_plan_with_rng(&config, &mut rng);

            assert_eq!(plan.hashtags.len(), 3);
            assert_eq!(plan.hashtags[0].len(), 5);
            for tag in plan.hashtags.iter().flatten() {
                assert!(tag.starts_with('#') && tag.len() > 1, "{tag}");
                assert!(!tag.contains(char::is_whitespace), "{tag}");
                assert!(tag[1..].chars().all(char::is_alphanumeric), "{tag}");
            }

            let devices: HashSet<_> = plan.retention_devices.iter().collect();
            let transitions: HashSet<_> = plan.transitions.iter().collect();
            assert_eq!(devices.len(), 3);
            assert_eq!(transitions.len(), 3);
        }
    }
}

#[test]
fn test_timeframe_examples() {
    assert_eq!(derive_timeframe(30), "30 seconds");
    assert_eq!(derive_timeframe(45), "45 seconds");
    assert_eq!(derive_timeframe(60), "under a minute");
    assert_eq!(derive_timeframe(90), "a minute");
}

#[test]
fn test_flags_only_touch_their_lists() {
    let base = PlanConfig {
        hook_style: HookStyle::StoryTeaser,
        delivery: Delivery::TextLed,
        ..PlanConfig::default()
    };
    let no_broll = PlanConfig {
        include_broll: false,
        ..base.clone()
    };
    let no_captions = PlanConfig {
        include_captions: false,
        ..base.clone()
    };

    let full = generate_plan_with_rng(&base, &mut StdRng::seed_from_u64(5));
    let without_broll = generate_plan_with_rng(&no_broll, &mut StdRng::seed_from_u64(5));
    let without_overlays = generate_plan_with_rng(&no_captions, &mut StdRng::seed_from_u64(5));

    assert!(without_broll.broll_ideas.is_empty());
    assert_eq!(without_broll.overlay_prompts, full.overlay_prompts);
    assert!(without_overlays.overlay_prompts.is_empty());
    assert_eq!(without_overlays.broll_ideas, full.broll_ideas);

    let strip = |mut plan: reelplan_core::ReelPlan| {
        plan.broll_ideas.clear();
        plan.overlay_prompts.clear();
        plan
    };
    assert_eq!(strip(without_broll), strip(full.clone()));
    assert_eq!(strip(without_overlays), strip(full));
}

#[test]
fn test_same_seed_same_plan() {
    let config = PlanConfig {
        trending_audio: true,
        ..PlanConfig::default()
    };
    let a = generate_plan_with_rng(&config, &mut StdRng::seed_from_u64(31));
    let b = generate_plan_with_rng(&config, &mut StdRng::seed_from_u64(31));
    assert_eq!(a, b);
}

#[test]
fn test_thread_rng_entry_point() {
    let plan = generate_plan(&PlanConfig {
        duration: 15,
        pace: Pace::Slow,
        ..PlanConfig::default()
    });
    assert_eq!(plan.scenes.len(), 4);
    assert_eq!(plan.scenes[3].end, 15.0);
    assert!(plan.scenes.iter().all(|s| s.label != "CTA"));
}

#[test]
fn test_plan_serializes_with_camel_case_keys() {
    let plan = generate_plan_with_rng(&PlanConfig::default(), &mut StdRng::seed_from_u64(1));
    let json = serde_json::to_value(&plan).unwrap();
    assert!(json.get("primaryHook").is_some());
    assert!(json.get("metricToWatch").is_some());
    assert_eq!(json["scenes"][0]["id"], 1);
}
