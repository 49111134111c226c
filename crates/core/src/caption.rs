use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Caption, Goal, PlanConfig, Scene};

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_\s]").unwrap();
}

const CAPTION_BODY_LINES: usize = 3;

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"meal prep ideas!"` -> `"#mealPrepIdeas"`.
pub fn camel_hashtag(phrase: &str) -> String {
    let cleaned = NON_WORD.replace_all(phrase, "");
    let mut tag = String::from("#");
    for (index, word) in cleaned.split_whitespace().enumerate() {
        if index == 0 {
            tag.push_str(&word.to_ascii_lowercase());
        } else {
            let (head, tail) = word.split_at(1);
            tag.push_str(&head.to_ascii_uppercase());
            tag.push_str(&tail.to_ascii_lowercase());
        }
    }
    tag
}

pub fn build_caption(config: &PlanConfig, scenes: &[Scene]) -> Caption {
    let body = scenes
        .iter()
        .filter(|scene| scene.label != "Hook" && scene.label != "CTA")
        .take(CAPTION_BODY_LINES)
        .map(|scene| {
            let focus = scene.focus.strip_suffix('.').unwrap_or(&scene.focus);
            format!("• {}: {}.", scene.label, focus)
        })
        .collect();

    let tagline = match config.goal {
        Goal::GrowFollowers => "Follow for the full playbook.",
        _ => "DM me “REEL” for the template.",
    };

    Caption {
        opener: format!(
            "🚀 {} for {}",
            capitalize(&config.topic),
            capitalize(&config.audience)
        ),
        body,
        closer: format!("{} {}", config.call_to_action, tagline),
    }
}

/// Base stack from the brief plus two editorial variants.
pub fn build_hashtags(config: &PlanConfig) -> Vec<Vec<String>> {
    let base = vec![
        camel_hashtag(&config.topic),
        camel_hashtag(&config.audience),
        camel_hashtag(&format!("{}Reels", config.format_style)),
        camel_hashtag(config.goal.as_str()),
        camel_hashtag("content strategy"),
    ];

    let discovery: Vec<String> = [
        "how to",
        "creator tips",
        "reel ideas",
        "viral hooks",
        "content that converts",
    ]
    .into_iter()
    .map(camel_hashtag)
    .collect();

    let tutorial = camel_hashtag(&format!("{} tutorial", config.topic));
    let formula: Vec<String> = std::iter::once(tutorial)
        .chain(
            ["instagram reels", "reelsstrategy", "hook formula", "reelsthatperform"]
                .into_iter()
                .map(camel_hashtag),
        )
        .collect();

    vec![base, discovery, formula]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormatStyle;

    #[test]
    fn camel_hashtag_formats_exactly() {
        assert_eq!(camel_hashtag("content strategy"), "#contentStrategy");
        assert_eq!(
            camel_hashtag("3-step 10-minute meal prep for busy weeks"),
            "#3step10minuteMealPrepForBusyWeeks"
        );
        assert_eq!(camel_hashtag("  Drive   SAVES "), "#driveSaves");
        assert_eq!(camel_hashtag("tutorialReels"), "#tutorialreels");
        assert_eq!(camel_hashtag("before & afterReels"), "#beforeAfterreels");
        assert_eq!(camel_hashtag("!!!"), "#");
    }

    #[test]
    fn hashtag_stacks_are_well_formed() {
        let config = PlanConfig::default();
        let stacks = build_hashtags(&config);
        assert_eq!(stacks.len(), 3);
        assert_eq!(stacks[0].len(), 5);
        assert_eq!(
            stacks[0],
            [
                "#3step10minuteMealPrepForBusyWeeks",
                "#youngProfessionalsWhoWantHealthyFoodFast",
                "#tutorialreels",
                "#driveSaves",
                "#contentStrategy"
            ]
        );
        assert_eq!(stacks[2][0], "#3step10minuteMealPrepForBusyWeeksTutorial");
        for tag in stacks.iter().flatten() {
            assert!(tag.starts_with('#') && tag.len() > 1, "{tag}");
            assert!(tag[1..].chars().all(|c| c.is_ascii_alphanumeric()), "{tag}");
        }
    }

    #[test]
    fn caption_skips_hook_and_cta() {
        let scene = |label: &str, focus: &str| Scene {
            id: 0,
            label: label.into(),
            start: 0.0,
            end: 1.0,
            focus: focus.into(),
            script: String::new(),
            visual: String::new(),
            camera: String::new(),
        };
        let scenes = vec![
            scene("Hook", "hook"),
            scene("Context Snapshot", "Paint the frustration."),
            scene("Breakdown Step", "Show the steps"),
            scene("Proof / Credibility", "Validate it."),
            scene("Micro Tip", "Bonus tip."),
            scene("CTA", "Save this"),
        ];
        let config = PlanConfig {
            goal: Goal::GrowFollowers,
            format_style: FormatStyle::Story,
            ..PlanConfig::default()
        };

        let caption = build_caption(&config, &scenes);
        assert_eq!(
            caption.body,
            [
                "• Context Snapshot: Paint the frustration.",
                "• Breakdown Step: Show the steps.",
                "• Proof / Credibility: Validate it."
            ]
        );
        assert_eq!(
            caption.opener,
            "🚀 3-step 10-minute meal prep for busy weeks for Young professionals who want healthy food fast"
        );
        assert_eq!(
            caption.closer,
            "Save this so your Sunday prep is stress-free Follow for the full playbook."
        );
    }

    #[test]
    fn closer_defaults_to_dm_prompt() {
        let caption = build_caption(&PlanConfig::default(), &[]);
        assert!(caption.body.is_empty());
        assert!(caption.closer.ends_with("DM me “REEL” for the template."));
    }
}
