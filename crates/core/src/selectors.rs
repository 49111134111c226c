use rand::Rng;

use crate::{
    lexicon::TopicKeyword,
    sampling::{pick_random, pick_unique},
    types::{AudioChoice, Delivery, FormatStyle, Goal, Pace, PlanConfig},
};

pub const RETENTION_DEVICE_COUNT: usize = 3;
pub const TRANSITION_COUNT: usize = 3;

const RETENTION_DEVICES: [&str; 7] = [
    "Jump cuts synced to the beat",
    "Fast-paced headline overlays every 2 seconds",
    "Pattern interrupt with a quick zoom punch-in",
    "Overlay a progress bar to signal completion",
    "Call-to-action indicator pops in at the 70% mark",
    "Swap between wide and detail shots to reset attention",
    "Use on-screen subtitles with emojis to match pacing",
];

const TRANSITIONS: [&str; 6] = [
    "Snap transition",
    "Match cut using hand clap",
    "Finger cover transition",
    "Speed ramp between scenes",
    "Whip pan to reset the scene",
    "Vertical slide with masked motion",
];

const TRENDING_AUDIO: [(&str, &str); 3] = [
    (
        "Trending chill-hop loop @85bpm",
        "Pairs well with voiceovers and keeps energy without overpowering narration.",
    ),
    (
        "Upbeat percussion loop (IG trending)",
        "Complements fast cuts and emphasizes transitions for a punchy delivery.",
    ),
    (
        "Dreamy synth pad build",
        "Great for story-driven reels and before/after reveals with emotional lift.",
    ),
];

const ORIGINAL_AUDIO: (&str, &str) = (
    "Original voiceover with subtle room tone",
    "Keeps focus on your message while allowing custom pacing. Layer soft risers under key beats.",
);

const BASE_BROLL: [&str; 5] = [
    "Overhead shot of workspace reset",
    "Close-up of hands executing the key step",
    "Screen recording of process with cursor highlights",
    "Quick reaction shot or smile to humanize",
    "Product or tool hero shot with slow push-in",
];

const OVERLAY_PROMPTS: [&str; 4] = [
    "Hook text: bold 4-word promise with emoji accent",
    "Add timer overlay during key steps to inject urgency",
    "Feature CTA banner at 80% view duration with arrow toward link",
    "Use color-coded keywords (action verbs in accent color)",
];

/// Editing notes per format. Doubles as the plan's narrative angle.
pub fn format_notes(format_style: FormatStyle) -> &'static str {
    match format_style {
        FormatStyle::Tutorial => {
            "Teaching something actionable step-by-step. Lean on over-the-shoulder shots and crisp overlays."
        }
        FormatStyle::Story => {
            "Narrative arc with tension and release. Alternate between speaker and cutaways to maintain pacing."
        }
        FormatStyle::BehindTheScenes => {
            "Show raw process snippets, layer progress markers, and end with polished reveal."
        }
        FormatStyle::Listicle => {
            "Rapid-fire list with snappy transitions; anchor each beat with bold text and supporting visual."
        }
        FormatStyle::BeforeAfter => {
            "Contrast the messy 'before' with the polished 'after'. Use match cuts and emphasize transformation."
        }
    }
}

pub fn delivery_notes(delivery: Delivery) -> &'static str {
    match delivery {
        Delivery::OnCamera => {
            "High-energy direct-to-camera delivery with clean background and good lighting"
        }
        Delivery::Voiceover => {
            "Voiceover layered on top of visually engaging B-roll; keep narration punchy with micro-pauses"
        }
        Delivery::TextLed => {
            "Minimal voice, rely on bold kinetic typography synced to beat; mix in gestures for emphasis"
        }
    }
}

fn goal_tactics(goal: Goal) -> &'static [&'static str; 3] {
    match goal {
        Goal::DriveSaves => &[
            "Call out exactly when viewers should tap the ribbon icon.",
            "Stack multiple quick wins to increase replay value.",
            "Show an on-screen checklist to reward saves.",
        ],
        Goal::GrowFollowers => &[
            "Speak in insider language so viewers feel part of the club.",
            "Tease tomorrow's post to encourage the follow.",
            "Flash micro-proof like DMs or comments to build social proof.",
        ],
        Goal::PromoteProduct => &[
            "Show tactile product close-ups to trigger desire.",
            "Highlight the transformation before mentioning price.",
            "Use text overlays to reinforce the product name and benefit.",
        ],
        Goal::IncreaseWebsiteClicks => &[
            "Use a gestural CTA pointing toward the link sticker.",
            "Promise a downloadable bonus available only via the link.",
            "Add urgency with a countdown or limited-time copy on screen.",
        ],
    }
}

pub fn metric_to_watch(goal: Goal) -> &'static str {
    match goal {
        Goal::DriveSaves => "Track saves per view and completion rate",
        Goal::GrowFollowers => "Monitor profile visits and follows per reach",
        Goal::PromoteProduct => "Watch click-throughs and adds-to-cart",
        Goal::IncreaseWebsiteClicks => "Focus on link taps and retention to CTA",
    }
}

pub fn select_audio<R>(config: &PlanConfig, rng: &mut R) -> AudioChoice
where
    R: Rng + ?Sized,
{
    let (title, rationale) = if config.trending_audio {
        *pick_random(&TRENDING_AUDIO, rng)
    } else {
        ORIGINAL_AUDIO
    };
    AudioChoice {
        title: title.to_string(),
        rationale: rationale.to_string(),
    }
}

fn posting_slots(pace: Pace) -> [&'static str; 3] {
    match pace {
        Pace::Fast => ["Mon 8:15a", "Wed 11:30a", "Sun 6:45p"],
        Pace::Steady => ["Tue 9:30a", "Thu 12:05p", "Sat 10:20a"],
        Pace::Slow => ["Mon 7:45p", "Wed 8:10p", "Sun 9:00a"],
    }
}

pub fn recommend_posting_windows(config: &PlanConfig) -> Vec<String> {
    let segment = config
        .audience
        .split(' ')
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");
    posting_slots(config.pace)
        .iter()
        .map(|slot| format!("{slot} • {segment} engagement spike"))
        .collect()
}

pub fn select_retention_devices<R>(rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    pick_unique(&RETENTION_DEVICES, RETENTION_DEVICE_COUNT, rng)
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn select_transitions<R>(rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    pick_unique(&TRANSITIONS, TRANSITION_COUNT, rng)
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn build_broll_ideas(config: &PlanConfig) -> Vec<String> {
    if !config.include_broll {
        return Vec::new();
    }

    let extras: &[&str] = match TopicKeyword::detect(&config.topic) {
        Some(TopicKeyword::Meal) => &[
            "Macro shot of ingredients hitting the pan",
            "Fridge organization reveal with timer overlay",
        ],
        Some(TopicKeyword::Content) => &[
            "Calendar view of content plan filling in",
            "BTS of filming setup with lighting adjustments",
        ],
        Some(TopicKeyword::Fitness) => &[
            "Before/after posture comparison",
            "Quick sweat wipe moment to show authenticity",
        ],
        None => &[],
    };

    // Extras are appended whole so topic-specific shots are never cut.
    BASE_BROLL
        .iter()
        .chain(extras)
        .map(|idea| idea.to_string())
        .collect()
}

pub fn build_overlay_prompts(config: &PlanConfig) -> Vec<String> {
    if !config.include_captions {
        return Vec::new();
    }
    OVERLAY_PROMPTS.iter().map(|p| p.to_string()).collect()
}

pub fn build_velocity_tips<R>(config: &PlanConfig, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    vec![
        format!(
            "Pacing: Keep clips to ~{}s each to align with a {} delivery.",
            config.pace.target_beat_seconds(),
            config.pace
        ),
        format!(
            "Tone: Keep the vibe {}. Script in phrases you would naturally say on camera.",
            config.tone
        ),
        format!("Delivery: {}", delivery_notes(config.delivery)),
        format!("Format emphasis: {}", format_notes(config.format_style)),
        pick_random(goal_tactics(config.goal), rng).to_string(),
    ]
}
