//! Beat sequencing and scene timing.
//!
//! A plan always opens with the five core beats in fixed order. Longer reels get
//! expansion beats, cycled in order, slotted in just before the closing CTA.

use rand::Rng;
use tracing::debug;

use crate::{
    hooks::build_hook,
    lexicon::{derive_pain_point, derive_timeframe},
    types::{Delivery, FormatStyle, Goal, PlanConfig, Scene},
};

pub const MIN_SCENES: usize = 4;
pub const MAX_SCENES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatKind {
    Core,
    Expansion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    Hook,
    ContextSnapshot,
    BreakdownStep,
    Proof,
    Cta,
    MicroTip,
    ObjectionCrusher,
    RetentionLoop,
}

pub const CORE_BEATS: [Beat; 5] = [
    Beat::Hook,
    Beat::ContextSnapshot,
    Beat::BreakdownStep,
    Beat::Proof,
    Beat::Cta,
];

pub const EXPANSION_BEATS: [Beat; 3] = [
    Beat::MicroTip,
    Beat::ObjectionCrusher,
    Beat::RetentionLoop,
];

impl Beat {
    pub fn label(&self) -> &'static str {
        match self {
            Beat::Hook => "Hook",
            Beat::ContextSnapshot => "Context Snapshot",
            Beat::BreakdownStep => "Breakdown Step",
            Beat::Proof => "Proof / Credibility",
            Beat::Cta => "CTA",
            Beat::MicroTip => "Micro Tip",
            Beat::ObjectionCrusher => "Objection Crusher",
            Beat::RetentionLoop => "Retention Loop",
        }
    }

    pub fn kind(&self) -> BeatKind {
        match self {
            Beat::MicroTip | Beat::ObjectionCrusher | Beat::RetentionLoop => BeatKind::Expansion,
            _ => BeatKind::Core,
        }
    }

    pub fn focus<R: Rng + ?Sized>(&self, config: &PlanConfig, rng: &mut R) -> String {
        match self {
            Beat::Hook => build_hook(config, rng),
            Beat::ContextSnapshot => format!(
                "Paint the current frustration {} feels about {}.",
                config.audience, config.topic
            ),
            Beat::BreakdownStep => format!(
                "Show step-by-step {} with emphasis on quick win.",
                config.topic.to_lowercase()
            ),
            Beat::Proof => "Validate the method with data, results, or social proof.".into(),
            Beat::Cta => config.call_to_action.clone(),
            Beat::MicroTip => format!(
                "Bonus optimization to help {} execute faster.",
                config.audience
            ),
            Beat::ObjectionCrusher => "Remove biggest excuse or friction point.".into(),
            Beat::RetentionLoop => {
                "Insert a loop-worthy nugget the viewer will want to rewatch.".into()
            }
        }
    }

    /// Script line. The proof beat keeps a `{result}` placeholder for the caller.
    pub fn script<R: Rng + ?Sized>(&self, config: &PlanConfig, rng: &mut R) -> String {
        match self {
            Beat::Hook => build_hook(config, rng),
            Beat::ContextSnapshot => format!(
                "If you're {}, you probably {}. Here's the exact system I use.",
                config.audience,
                derive_pain_point(&config.topic, &config.audience)
            ),
            Beat::BreakdownStep => {
                let opener = if config.topic.split(' ').next() == Some("3-step") {
                    "Start with the quick reset"
                } else {
                    "Do this first so the rest is easy"
                };
                format!("Step 1: {opener}. Highlight why it matters in 1 sentence.")
            }
            Beat::Proof => format!(
                "I've used this to {{result}}. Swipe to see the difference in just one {}.",
                derive_timeframe(config.duration)
            ),
            Beat::Cta => format!(
                "{}. Drop a 🔥 if you're trying this {} flow.",
                config.call_to_action,
                derive_timeframe(config.duration)
            ),
            Beat::MicroTip => "Pro-tip: Batch this with a timer so you never overthink it.".into(),
            Beat::ObjectionCrusher => {
                "Think you don't have the gear? Use whatever's in your fridge—we're focusing on momentum."
                    .into()
            }
            Beat::RetentionLoop => {
                "Replay this shot so you catch the exact order. The timing matters.".into()
            }
        }
    }

    pub fn visual(&self, config: &PlanConfig) -> &'static str {
        match self {
            Beat::Hook if config.delivery == Delivery::TextLed => {
                "Overlay bold kinetic text with quick cut of end result."
            }
            Beat::Hook => {
                "Punch-in shot with confident gesture. Flash end result within first 2 seconds."
            }
            Beat::ContextSnapshot if config.format_style == FormatStyle::Story => {
                "Cut to candid B-roll illustrating the 'before' moment."
            }
            Beat::ContextSnapshot => {
                "Show the messy setup or the problem in action with overlay text."
            }
            Beat::BreakdownStep if config.delivery == Delivery::Voiceover => {
                "Overlay close-up demo shot with captions and highlight key detail."
            }
            Beat::BreakdownStep => {
                "Split screen between you explaining and the process happening."
            }
            Beat::Proof => {
                "Cut to results montage, analytics screenshot, or before/after overlay."
            }
            Beat::Cta if config.delivery == Delivery::OnCamera => {
                "Back to you on camera with confident smile and gesture toward CTA text."
            }
            Beat::Cta => "Final beauty shot with animated arrow toward CTA overlay.",
            Beat::MicroTip => "Overlay timer graphic and highlight micro-step with pop text.",
            Beat::ObjectionCrusher => "Show simplified version proving accessibility.",
            Beat::RetentionLoop => "Add subtle text cue 'rewatch to lock it in'.",
        }
    }

    pub fn camera(&self) -> &'static str {
        match self {
            Beat::Hook => "Start with a rapid punch-in shot at eye level, add subtle hand movement.",
            Beat::ContextSnapshot => "Handheld movement or quick pan to keep energy lifted.",
            Beat::BreakdownStep => "Alternate between 1x and 0.5x zoom for dynamic pacing.",
            Beat::Proof => "Use a quick dolly-in or spotlight effect to amplify transformation.",
            Beat::Cta => "Return to original framing for consistency and handshake outro.",
            Beat::MicroTip => "Cut-in macro detail with 120fps slow motion for contrast.",
            Beat::ObjectionCrusher => "Switch to selfie mode for a conversational beat.",
            Beat::RetentionLoop => "Use quick reverse playback or boomerang moment.",
        }
    }
}

/// How many beats a reel of `duration` seconds supports at `target_beat_seconds` each.
pub fn scene_count(duration: u32, target_beat_seconds: u32) -> usize {
    let raw = (duration as f64 / target_beat_seconds as f64).round() as usize;
    raw.clamp(MIN_SCENES, MAX_SCENES)
}

/// Core beats plus round-robin expansion beats ahead of the final one, cut to `count`.
pub fn expand_beats(count: usize) -> Vec<Beat> {
    let extra = count.saturating_sub(CORE_BEATS.len());
    let (closing, opening) = match CORE_BEATS.split_last() {
        Some(split) => split,
        None => return Vec::new(),
    };

    opening
        .iter()
        .copied()
        .chain(EXPANSION_BEATS.iter().copied().cycle().take(extra))
        .chain(std::iter::once(*closing))
        .take(count)
        .collect()
}

fn proof_result(goal: Goal) -> &'static str {
    match goal {
        Goal::PromoteProduct => "turn casual browsers into buyers",
        _ => "save hours every week",
    }
}

pub fn generate_scenes<R>(config: &PlanConfig, rng: &mut R) -> Vec<Scene>
where
    R: Rng + ?Sized,
{
    let count = scene_count(config.duration, config.pace.target_beat_seconds());
    let beats = expand_beats(count);
    debug!(
        duration = config.duration,
        pace = config.pace.as_str(),
        scenes = beats.len(),
        "sequenced beats"
    );

    let duration = config.duration as f64;
    let unit = duration / beats.len() as f64;
    let last = beats.len() - 1;
    let mut cursor = 0.0;

    beats
        .iter()
        .enumerate()
        .map(|(index, beat)| {
            let start = cursor;
            let end = if index == last { duration } else { cursor + unit };
            cursor = end;

            Scene {
                id: index + 1,
                label: beat.label().to_string(),
                start,
                end,
                focus: beat.focus(config, rng),
                script: beat
                    .script(config, rng)
                    .replacen("{result}", proof_result(config.goal), 1),
                visual: beat.visual(config).to_string(),
                camera: beat.camera().to_string(),
            }
        })
        .collect()
}
