//! Reelplan Core Library
//!
//! Turns a short-form video brief into a production plan: hooks, a timed scene
//! script, caption, hashtag stacks, audio, posting windows and editing notes.

pub mod caption;
pub mod config;
pub mod error;
pub mod format;
pub mod hooks;
pub mod lexicon;
pub mod plan;
pub mod sampling;
pub mod selectors;
pub mod template;
pub mod timeline;
pub mod types;

// Re-export commonly used items at crate root
pub use caption::camel_hashtag;
pub use error::{PlanError, Result};
pub use format::{format_plan_readable, format_scene_window, format_seconds};
pub use lexicon::{derive_outcome, derive_pain_point, derive_timeframe};
pub use plan::{generate_plan, generate_plan_with_rng};
pub use timeline::generate_scenes;
pub use types::{
    AudioChoice, Caption, Delivery, FormatStyle, Goal, HookStyle, Pace, PlanConfig, ReelPlan,
    Scene,
};
