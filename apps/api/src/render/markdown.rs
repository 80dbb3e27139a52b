//! Markdown export of a generated bundle.
//!
//! Section order is fixed and is the file format downstream consumers rely on:
//! title, profile metadata, Customer Profile, Pain Points, Dreams & Desires,
//! Offer Ladder, 30-Day Content Plan. Output is `\n`-terminated with a single
//! trailing newline, and every free-text value goes through `escape_inline`.

use crate::models::bundle::{ContentPlanDay, GeneratedBundle};
use crate::models::profile::InputProfile;
use crate::render::escape::escape_inline;

pub const TITLE: &str = "Marketing Game Plan";
pub const CUSTOMER_PROFILE_HEADING: &str = "Customer Profile";
pub const PAIN_POINTS_HEADING: &str = "Pain Points";
pub const DESIRES_HEADING: &str = "Dreams & Desires";
pub const OFFER_LADDER_HEADING: &str = "Offer Ladder";
pub const CONTENT_PLAN_HEADING: &str = "30-Day Content Plan";

const NO_CHANNELS: &str = "none (no channels selected)";

/// Renders the whole bundle as one markdown document.
pub fn compose(profile: &InputProfile, bundle: &GeneratedBundle) -> String {
    let mut lines: Vec<String> = Vec::new();

    let niche = escape_inline(&profile.niche);
    if niche.is_empty() {
        lines.push(format!("# {TITLE}"));
    } else {
        lines.push(format!("# {TITLE}: {niche}"));
    }
    lines.push(String::new());
    push_metadata(&mut lines, profile);

    // Customer Profile
    let cp = &bundle.customer_profile;
    push_heading(&mut lines, 2, CUSTOMER_PROFILE_HEADING);
    lines.push(escape_inline(&cp.summary));
    lines.push(String::new());
    push_heading(&mut lines, 3, "Demographics");
    push_list(&mut lines, &cp.demographics);
    push_heading(&mut lines, 3, "Psychographics");
    push_list(&mut lines, &cp.psychographics);

    // Pain Points
    push_heading(&mut lines, 2, PAIN_POINTS_HEADING);
    for group in &bundle.pain_points {
        push_heading(&mut lines, 3, &escape_inline(&group.category));
        push_list(&mut lines, &group.items);
    }

    // Dreams & Desires
    push_heading(&mut lines, 2, DESIRES_HEADING);
    push_list(&mut lines, &bundle.dreams_desires);

    // Offer Ladder
    push_heading(&mut lines, 2, OFFER_LADDER_HEADING);
    for tier in &bundle.offer_ladder {
        push_heading(
            &mut lines,
            3,
            &format!("{} ({})", escape_inline(&tier.name), escape_inline(&tier.price)),
        );
        lines.push(escape_inline(&tier.promise));
        lines.push(String::new());
        push_list(&mut lines, &tier.components);
    }

    // 30-Day Content Plan
    push_heading(&mut lines, 2, CONTENT_PLAN_HEADING);
    for day in &bundle.content_plan {
        push_plan_day(&mut lines, day);
    }
    lines.push(String::new());

    let mut out = lines.join("\n");
    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn push_metadata(lines: &mut Vec<String>, profile: &InputProfile) {
    let mut fields: Vec<(&str, String)> = vec![
        ("Product", escape_inline(&profile.product)),
        ("Ideal customer", escape_inline(&profile.ideal_customer)),
        ("Primary goal", escape_inline(&profile.primary_goal)),
        ("Voice", profile.voice.label().to_string()),
        ("Price point", profile.price_point.label().to_string()),
        ("Channels", channel_list(profile)),
    ];
    let competitors = profile
        .competitor_list()
        .iter()
        .map(|c| escape_inline(c))
        .collect::<Vec<_>>()
        .join(", ");
    fields.push(("Competitors", competitors));
    fields.push(("Differentiator", escape_inline(&profile.differentiator)));

    for (label, value) in fields.into_iter().filter(|(_, v)| !v.is_empty()) {
        lines.push(format!("- **{label}:** {value}"));
    }
    lines.push(String::new());
}

fn channel_list(profile: &InputProfile) -> String {
    if profile.channels.is_empty() {
        return NO_CHANNELS.to_string();
    }
    profile
        .channels
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_heading(lines: &mut Vec<String>, level: usize, text: &str) {
    lines.push(format!("{} {text}", "#".repeat(level)));
    lines.push(String::new());
}

fn push_list(lines: &mut Vec<String>, items: &[String]) {
    for item in items {
        lines.push(format!("- {}", escape_inline(item)));
    }
    lines.push(String::new());
}

fn push_plan_day(lines: &mut Vec<String>, day: &ContentPlanDay) {
    let repurpose = if day.repurpose.is_empty() {
        NO_CHANNELS.to_string()
    } else {
        day.repurpose
            .iter()
            .map(|r| format!("{} → {}", r.channel, escape_inline(&r.format)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    lines.push(format!("- **Day {}:** {}", day.day, escape_inline(&day.idea)));
    lines.push(format!("  - CTA: {}", escape_inline(&day.cta)));
    lines.push(format!("  - Repurpose: {repurpose}"));
}
