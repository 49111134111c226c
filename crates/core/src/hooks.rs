use rand::Rng;

use crate::{
    sampling::pick_random,
    template::TokenContext,
    types::{HookStyle, PlanConfig},
};

pub const BACKUP_HOOK_COUNT: usize = 3;

const BACKUP_ANGLE: &str = "micro-shift you haven't tried";

const BACKUP_HOOKS: [&str; 5] = [
    "You're {steps} micro-shifts away from {desired_outcome}.",
    "If you only copy one {format_style} today, make it this one.",
    "Screenshots won't cut it—save this so you can actually execute.",
    "Watch me turn {pain_point_description} into {desired_outcome} in {timeframe}.",
    "Spoiler: {unexpected_angle} is the cheat code your feed needed.",
];

pub fn hook_blueprints(style: HookStyle) -> &'static [&'static str; 3] {
    match style {
        HookStyle::Question => &[
            "Did you know {audience} lose hours every week trying to {topic_fragment}?",
            "What if {audience} could {outcome} in just {timeframe}?",
            "Are you still {undesired_action}? Here's how to switch it up today.",
        ],
        HookStyle::BoldClaim => &[
            "This {timeframe} switch rewired how {audience} tackle {topic_fragment}.",
            "Stop scrolling. This is the simplest {topic_fragment} you'll see all week.",
            "I bet you haven't tried this {unexpected_angle} for {topic_fragment}.",
        ],
        HookStyle::PatternInterrupt => &[
            "*Record scratch* {pain_point} ends now. Here's the play-by-play.",
            "You're overcomplicating {topic_fragment}. Steal this instead.",
            "Pause. Swap your usual move for this {format_style} blueprint.",
        ],
        HookStyle::StoryTeaser => &[
            "Last {timeframe}, I was {pain_point_description}. Here's what fixed it.",
            "POV: You're {audience_descriptor} and everything feels like chaos until this.",
            "The moment I switched to this {format_style} flow, everything changed.",
        ],
    }
}

/// One hook drawn from the configured style's bank.
pub fn build_hook<R>(config: &PlanConfig, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let template = pick_random(hook_blueprints(config.hook_style), rng);
    TokenContext::new(config).fill(template)
}

/// `count` style-agnostic hooks, sampled with replacement.
pub fn build_backup_hooks<R>(config: &PlanConfig, count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let ctx = TokenContext::new(config).with_unexpected_angle(BACKUP_ANGLE);
    (0..count)
        .map(|_| ctx.fill(*pick_random(&BACKUP_HOOKS, rng)))
        .collect()
}
