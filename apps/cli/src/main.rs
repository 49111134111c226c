use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{Level, debug};

use reelplan_core::{
    Delivery, FormatStyle, Goal, HookStyle, Pace, PlanConfig, ReelPlan, format_plan_readable,
    generate_plan, generate_plan_with_rng,
};

#[derive(Parser)]
#[command(name = "reelplan", version)]
#[command(
    about = "Turn a short-form video brief into hooks, a timed script, captions, hashtags and posting windows"
)]
struct Cli {
    /// Brief file (.toml or .json). Flags below override its fields.
    #[arg(short, long)]
    brief: Option<PathBuf>,

    /// What the reel is about
    #[arg(long)]
    topic: Option<String>,

    /// Who the reel is for
    #[arg(long)]
    audience: Option<String>,

    /// drive saves | grow followers | promote product | increase website clicks
    #[arg(long)]
    goal: Option<Goal>,

    /// Voice the script should keep (e.g. "playful and direct")
    #[arg(long)]
    tone: Option<String>,

    /// Closing call to action
    #[arg(long)]
    cta: Option<String>,

    /// Reel length in seconds (15-90 recommended)
    #[arg(short, long)]
    duration: Option<u32>,

    /// question | bold claim | pattern interrupt | story teaser
    #[arg(long)]
    hook_style: Option<HookStyle>,

    /// tutorial | story | behind the scenes | listicle | before & after
    #[arg(long)]
    format_style: Option<FormatStyle>,

    /// fast | steady | slow
    #[arg(short, long)]
    pace: Option<Pace>,

    /// on-camera | voiceover | text-led
    #[arg(long)]
    delivery: Option<Delivery>,

    /// Include B-roll ideas
    #[arg(long, overrides_with = "no_broll")]
    broll: bool,

    /// Skip B-roll ideas
    #[arg(long, overrides_with = "broll")]
    no_broll: bool,

    /// Include on-screen overlay prompts
    #[arg(long, overrides_with = "no_captions")]
    captions: bool,

    /// Skip on-screen overlay prompts
    #[arg(long, overrides_with = "captions")]
    no_captions: bool,

    /// Recommend a trending track
    #[arg(long, overrides_with = "original_audio")]
    trending_audio: bool,

    /// Recommend original audio instead of a trending track
    #[arg(long, overrides_with = "trending_audio")]
    original_audio: bool,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Resolves an `--x` / `--no-x` pair; the last one given wins.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    fn config(&self) -> reelplan_core::Result<PlanConfig> {
        let mut config = match &self.brief {
            Some(path) => PlanConfig::from_file(path)?,
            None => PlanConfig::default(),
        };

        if let Some(topic) = &self.topic {
            config.topic = topic.clone();
        }
        if let Some(audience) = &self.audience {
            config.audience = audience.clone();
        }
        if let Some(goal) = self.goal {
            config.goal = goal;
        }
        if let Some(tone) = &self.tone {
            config.tone = tone.clone();
        }
        if let Some(cta) = &self.cta {
            config.call_to_action = cta.clone();
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }
        if let Some(hook_style) = self.hook_style {
            config.hook_style = hook_style;
        }
        if let Some(format_style) = self.format_style {
            config.format_style = format_style;
        }
        if let Some(pace) = self.pace {
            config.pace = pace;
        }
        if let Some(delivery) = self.delivery {
            config.delivery = delivery;
        }
        if let Some(include) = switch(self.broll, self.no_broll) {
            config.include_broll = include;
        }
        if let Some(include) = switch(self.captions, self.no_captions) {
            config.include_captions = include;
        }
        if let Some(trending) = switch(self.trending_audio, self.original_audio) {
            config.trending_audio = trending;
        }

        config.validate()?;
        Ok(config)
    }
}

fn print_summary(config: &PlanConfig, plan: &ReelPlan) {
    println!(
        "\n{}  {}\n",
        style("reelplan").cyan().bold(),
        style("Reel Planner").dim()
    );
    println!(
        "{} Plan generated: {} scenes over {}s, {} pace, {}",
        style("✓").green().bold(),
        plan.scenes.len(),
        config.duration,
        style(config.pace).yellow(),
        style(config.goal).yellow()
    );
    println!(
        "{} {}",
        style("Audio:").dim(),
        style(&plan.audio.title).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    debug!(?config, "resolved brief");

    let plan = match cli.seed {
        Some(seed) => generate_plan_with_rng(&config, &mut StdRng::seed_from_u64(seed)),
        None => generate_plan(&config),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_summary(&config, &plan);

    // Human-readable output
    let readable = format_plan_readable(&plan);
    println!("{}", readable);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn brief_with_features_off(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "reelplan-cli-{}-{name}.toml",
            std::process::id()
        ));
        fs::write(
            &path,
            "includeBroll = false\nincludeCaptions = false\ntrendingAudio = false\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn flags_can_re_enable_features_off_in_brief() {
        let path = brief_with_features_off("enable");
        let cli = Cli::try_parse_from([
            "reelplan",
            "--brief",
            path.to_str().unwrap(),
            "--broll",
            "--captions",
            "--trending-audio",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        fs::remove_file(&path).ok();

        assert!(config.include_broll);
        assert!(config.include_captions);
        assert!(config.trending_audio);
    }

    #[test]
    fn brief_values_stand_without_flags() {
        let path = brief_with_features_off("keep");
        let cli = Cli::try_parse_from(["reelplan", "--brief", path.to_str().unwrap()]).unwrap();
        let config = cli.config().unwrap();
        fs::remove_file(&path).ok();

        assert!(!config.include_broll);
        assert!(!config.include_captions);
        assert!(!config.trending_audio);
    }

    #[test]
    fn last_switch_wins() {
        let cli = Cli::try_parse_from(["reelplan", "--broll", "--no-broll", "--original-audio"])
            .unwrap();
        let config = cli.config().unwrap();
        assert!(!config.include_broll);
        assert!(config.include_captions);
        assert!(!config.trending_audio);

        let cli = Cli::try_parse_from(["reelplan", "--no-broll", "--broll"]).unwrap();
        assert!(cli.config().unwrap().include_broll);
    }
}
