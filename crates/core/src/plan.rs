use rand::Rng;
use tracing::debug;

use crate::{
    caption::{build_caption, build_hashtags},
    hooks::{BACKUP_HOOK_COUNT, build_backup_hooks, build_hook},
    selectors::{
        build_broll_ideas, build_overlay_prompts, build_velocity_tips, format_notes,
        metric_to_watch, recommend_posting_windows, select_audio, select_retention_devices,
        select_transitions,
    },
    timeline::generate_scenes,
    types::{PlanConfig, ReelPlan},
};

/// Generate a full production plan using the thread-local random source.
pub fn generate_plan(config: &PlanConfig) -> ReelPlan {
    generate_plan_with_rng(config, &mut rand::thread_rng())
}

/// Generate a full production plan, drawing every random choice from `rng`.
pub fn generate_plan_with_rng<R>(config: &PlanConfig, rng: &mut R) -> ReelPlan
where
    R: Rng + ?Sized,
{
    let scenes = generate_scenes(config, rng);
    let caption = build_caption(config, &scenes);

    let plan = ReelPlan {
        primary_hook: build_hook(config, rng),
        backup_hooks: build_backup_hooks(config, BACKUP_HOOK_COUNT, rng),
        narrative_angle: format_notes(config.format_style).to_string(),
        caption,
        hashtags: build_hashtags(config),
        audio: select_audio(config, rng),
        posting_windows: recommend_posting_windows(config),
        retention_devices: select_retention_devices(rng),
        transitions: select_transitions(rng),
        velocity_tips: build_velocity_tips(config, rng),
        metric_to_watch: metric_to_watch(config.goal).to_string(),
        broll_ideas: build_broll_ideas(config),
        overlay_prompts: build_overlay_prompts(config),
        scenes,
    };

    debug!(
        scenes = plan.scenes.len(),
        broll = plan.broll_ideas.len(),
        overlays = plan.overlay_prompts.len(),
        "assembled plan"
    );
    plan
}
