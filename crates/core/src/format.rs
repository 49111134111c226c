use crate::types::{ReelPlan, Scene};

/// Format seconds as a whole-second label, e.g. `5s`
pub fn format_seconds(seconds: f64) -> String {
    format!("{}s", seconds.round() as i64)
}

/// Format a scene's window as `start → end`
pub fn format_scene_window(scene: &Scene) -> String {
    format!(
        "{} → {}",
        format_seconds(scene.start),
        format_seconds(scene.end)
    )
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("## {}\n\n", title));
    for item in items {
        output.push_str(&format!("• {}\n", item));
    }
    output.push('\n');
}

/// Format a plan as human-readable markdown
pub fn format_plan_readable(plan: &ReelPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", plan.primary_hook));

    output.push_str("## Backup hooks\n\n");
    for (i, hook) in plan.backup_hooks.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, hook));
    }
    output.push('\n');

    output.push_str("## Narrative angle\n\n");
    output.push_str(&plan.narrative_angle);
    output.push_str("\n\n");

    output.push_str("## Timeline\n\n");
    for scene in &plan.scenes {
        output.push_str(&format!(
            "### {}. [{}] {}\n\n",
            scene.id,
            format_scene_window(scene),
            scene.label
        ));
        output.push_str(&format!("**Focus:** {}\n", scene.focus));
        output.push_str(&format!("**Script:** {}\n", scene.script));
        output.push_str(&format!("**Visual:** {}\n", scene.visual));
        output.push_str(&format!("**Camera:** {}\n\n", scene.camera));
    }

    output.push_str("## Caption\n\n");
    output.push_str(&format!("{}\n", plan.caption.opener));
    for line in &plan.caption.body {
        output.push_str(&format!("{}\n", line));
    }
    output.push_str(&format!("{}\n\n", plan.caption.closer));

    output.push_str("## Hashtags\n\n");
    for stack in &plan.hashtags {
        output.push_str(&format!("{}\n", stack.join(" ")));
    }
    output.push('\n');

    output.push_str("## Audio\n\n");
    output.push_str(&format!(
        "**{}**: {}\n\n",
        plan.audio.title, plan.audio.rationale
    ));

    push_list(&mut output, "Posting windows", &plan.posting_windows);
    push_list(&mut output, "Retention devices", &plan.retention_devices);
    push_list(&mut output, "Transitions", &plan.transitions);
    push_list(&mut output, "Velocity tips", &plan.velocity_tips);

    output.push_str("## Metric to watch\n\n");
    output.push_str(&plan.metric_to_watch);
    output.push_str("\n\n");

    push_list(&mut output, "B-roll ideas", &plan.broll_ideas);
    push_list(&mut output, "Overlay prompts", &plan.overlay_prompts);

    output
}
