use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Lowercases and folds `-`, `_` and `&` so "Before-After" and "before & after" compare equal.
fn normalize_option(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['-', '_'], " ")
        .replace('&', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Goal {
    #[serde(rename = "drive saves")]
    DriveSaves,
    #[serde(rename = "grow followers")]
    GrowFollowers,
    #[serde(rename = "promote product")]
    PromoteProduct,
    #[serde(rename = "increase website clicks")]
    IncreaseWebsiteClicks,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::DriveSaves,
        Goal::GrowFollowers,
        Goal::PromoteProduct,
        Goal::IncreaseWebsiteClicks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::DriveSaves => "drive saves",
            Goal::GrowFollowers => "grow followers",
            Goal::PromoteProduct => "promote product",
            Goal::IncreaseWebsiteClicks => "increase website clicks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum HookStyle {
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "bold claim")]
    BoldClaim,
    #[serde(rename = "pattern interrupt")]
    PatternInterrupt,
    #[serde(rename = "story teaser")]
    StoryTeaser,
}

impl HookStyle {
    pub const ALL: [HookStyle; 4] = [
        HookStyle::Question,
        HookStyle::BoldClaim,
        HookStyle::PatternInterrupt,
        HookStyle::StoryTeaser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookStyle::Question => "question",
            HookStyle::BoldClaim => "bold claim",
            HookStyle::PatternInterrupt => "pattern interrupt",
            HookStyle::StoryTeaser => "story teaser",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FormatStyle {
    #[serde(rename = "tutorial")]
    Tutorial,
    #[serde(rename = "story")]
    Story,
    #[serde(rename = "behind the scenes")]
    BehindTheScenes,
    #[serde(rename = "listicle")]
    Listicle,
    #[serde(rename = "before & after")]
    BeforeAfter,
}

impl FormatStyle {
    pub const ALL: [FormatStyle; 5] = [
        FormatStyle::Tutorial,
        FormatStyle::Story,
        FormatStyle::BehindTheScenes,
        FormatStyle::Listicle,
        FormatStyle::BeforeAfter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatStyle::Tutorial => "tutorial",
            FormatStyle::Story => "story",
            FormatStyle::BehindTheScenes => "behind the scenes",
            FormatStyle::Listicle => "listicle",
            FormatStyle::BeforeAfter => "before & after",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    Steady,
    Slow,
}

impl Pace {
    pub const ALL: [Pace; 3] = [Pace::Fast, Pace::Steady, Pace::Slow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Fast => "fast",
            Pace::Steady => "steady",
            Pace::Slow => "slow",
        }
    }

    /// Target length of one beat, in seconds.
    pub fn target_beat_seconds(&self) -> u32 {
        match self {
            Pace::Fast => 4,
            Pace::Steady => 6,
            Pace::Slow => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Delivery {
    #[serde(rename = "on-camera")]
    OnCamera,
    #[serde(rename = "voiceover")]
    Voiceover,
    #[serde(rename = "text-led")]
    TextLed,
}

impl Delivery {
    pub const ALL: [Delivery; 3] = [Delivery::OnCamera, Delivery::Voiceover, Delivery::TextLed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::OnCamera => "on-camera",
            Delivery::Voiceover => "voiceover",
            Delivery::TextLed => "text-led",
        }
    }
}

macro_rules! option_text_impls {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = PlanError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_option(s);
                <$ty>::ALL
                    .into_iter()
                    .find(|option| normalize_option(option.as_str()) == wanted)
                    .ok_or_else(|| PlanError::UnknownOption {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl TryFrom<String> for $ty {
            type Error = PlanError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

option_text_impls!(Goal, "goal");
option_text_impls!(HookStyle, "hook style");
option_text_impls!(FormatStyle, "format style");
option_text_impls!(Pace, "pace");
option_text_impls!(Delivery, "delivery");

/// The brief a plan is generated from. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub topic: String,
    pub audience: String,
    pub goal: Goal,
    pub tone: String,
    #[serde(alias = "callToAction")]
    pub call_to_action: String,
    /// Seconds.
    pub duration: u32,
    #[serde(alias = "hookStyle")]
    pub hook_style: HookStyle,
    #[serde(alias = "formatStyle")]
    pub format_style: FormatStyle,
    pub pace: Pace,
    pub delivery: Delivery,
    #[serde(alias = "includeBroll")]
    pub include_broll: bool,
    #[serde(alias = "includeCaptions")]
    pub include_captions: bool,
    #[serde(alias = "trendingAudio")]
    pub trending_audio: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            topic: "3-step 10-minute meal prep for busy weeks".into(),
            audience: "young professionals who want healthy food fast".into(),
            goal: Goal::DriveSaves,
            tone: "energetic and encouraging".into(),
            call_to_action: "Save this so your Sunday prep is stress-free".into(),
            duration: 42,
            hook_style: HookStyle::Question,
            format_style: FormatStyle::Tutorial,
            pace: Pace::Fast,
            delivery: Delivery::Voiceover,
            include_broll: true,
            include_captions: true,
            trending_audio: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: usize,
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub focus: String,
    pub script: String,
    pub visual: String,
    pub camera: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub opener: String,
    pub body: Vec<String>,
    pub closer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioChoice {
    pub title: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPlan {
    pub primary_hook: String,
    pub backup_hooks: Vec<String>,
    pub narrative_angle: String,
    pub scenes: Vec<Scene>,
    pub caption: Caption,
    pub hashtags: Vec<Vec<String>>,
    pub audio: AudioChoice,
    pub posting_windows: Vec<String>,
    pub retention_devices: Vec<String>,
    pub transitions: Vec<String>,
    pub velocity_tips: Vec<String>,
    pub metric_to_watch: String,
    pub broll_ideas: Vec<String>,
    pub overlay_prompts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_parse_from_labels_and_aliases() {
        assert_eq!("drive saves".parse::<Goal>().unwrap(), Goal::DriveSaves);
        assert_eq!("Drive-Saves".parse::<Goal>().unwrap(), Goal::DriveSaves);
        assert_eq!(
            "before-after".parse::<FormatStyle>().unwrap(),
            FormatStyle::BeforeAfter
        );
        assert_eq!(
            "before & after".parse::<FormatStyle>().unwrap(),
            FormatStyle::BeforeAfter
        );
        assert_eq!("on camera".parse::<Delivery>().unwrap(), Delivery::OnCamera);
        assert_eq!("STEADY".parse::<Pace>().unwrap(), Pace::Steady);
    }

    #[test]
    fn unknown_option_names_the_field() {
        let err = "viral".parse::<HookStyle>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown hook style option: \"viral\"");
    }

    #[test]
    fn brief_files_accept_the_same_labels_as_flags() {
        let config: PlanConfig = serde_json::from_str(
            r#"{"goal": "Drive Saves", "hookStyle": "BOLD-CLAIM", "formatStyle": "Before & After", "pace": "Steady", "delivery": "on camera"}"#,
        )
        .unwrap();
        assert_eq!(config.goal, Goal::DriveSaves);
        assert_eq!(config.hook_style, HookStyle::BoldClaim);
        assert_eq!(config.format_style, FormatStyle::BeforeAfter);
        assert_eq!(config.pace, Pace::Steady);
        assert_eq!(config.delivery, Delivery::OnCamera);

        let err = serde_json::from_str::<PlanConfig>(r#"{"pace": "glacial"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown pace option"), "{err}");
    }

    #[test]
    fn labels_serialize_as_written() {
        assert_eq!(
            serde_json::to_string(&FormatStyle::BeforeAfter).unwrap(),
            "\"before & after\""
        );
        assert_eq!(serde_json::to_string(&Delivery::OnCamera).unwrap(), "\"on-camera\"");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for style in FormatStyle::ALL {
            assert_eq!(style.to_string().parse::<FormatStyle>().unwrap(), style);
        }
    }
}
