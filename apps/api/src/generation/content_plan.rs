//! Content Plan: 30 days of ideas, calls to action and channel repurposing.
//!
//! Ideas: a fixed pool of templates walked with a seeded offset and a stride that
//! is coprime with the pool size. Any run of `IDEA_TEMPLATES.len()` days is a
//! permutation of the pool, and the walk never lands on the same template twice
//! in a row, including across the wrap.
//!
//! Repurposing: each day takes the next `k = min(n, MAX_CHANNELS_PER_DAY)`
//! channels from the selected set in canonical order, continuing where the
//! previous day stopped. Seven days therefore cover `7k >= n` consecutive
//! positions, which puts every selected channel in every 7-day window.

use crate::generation::customer_profile::{
    FALLBACK_CUSTOMER, FALLBACK_GOAL, FALLBACK_NICHE, FALLBACK_PRODUCT,
};
use crate::generation::seed::stable_seed;
use crate::generation::tone::get_tone_examples;
use crate::generation::{field_or, mid_sentence};
use crate::models::bundle::{ContentPlanDay, RepurposeEntry};
use crate::models::profile::{Channel, InputProfile};

pub const PLAN_DAYS: u32 = 30;

/// Every selected channel appears at least once in any window of this many days.
pub const COVERAGE_WINDOW: usize = 7;

const MAX_CHANNELS_PER_DAY: usize = 3;

/// Placeholders: `{niche}`, `{goal}`, `{customer}`.
pub const IDEA_TEMPLATES: [&str; 12] = [
    "The biggest mistake {customer} make in {niche}",
    "3 signs you're ready for {goal}",
    "Behind the scenes of how we approach {niche}",
    "A simple framework for {goal}",
    "Myth vs. reality in {niche}",
    "Client story: from stuck to {goal}",
    "What {customer} should stop doing this week",
    "Checklist for your first 30 minutes on {goal}",
    "The tool stack we rely on for {niche}",
    "Answering the top question from {customer}",
    "Before and after: what changes when you focus on {goal}",
    "Lessons from a {niche} experiment that failed",
];

/// Strides coprime with `IDEA_TEMPLATES.len()`.
const IDEA_STRIDES: [usize; 4] = [1, 5, 7, 11];

// ────────────────────────────────────────────────────────────────────────────
// Goal focus → calls to action
// ────────────────────────────────────────────────────────────────────────────

/// What the primary goal is really asking for. Drives the CTA set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalFocus {
    Leads,
    Sales,
    Audience,
    General,
}

const LEAD_KEYWORDS: &[&str] = &[
    "lead",
    "leads",
    "call",
    "calls",
    "booking",
    "bookings",
    "booked",
    "pipeline",
    "inquiry",
    "inquiries",
    "demo",
    "demos",
    "appointment",
    "appointments",
];

const SALES_KEYWORDS: &[&str] = &[
    "sale",
    "sales",
    "revenue",
    "sell",
    "selling",
    "convert",
    "conversion",
    "conversions",
    "purchase",
    "purchases",
    "mrr",
    "customers",
];

const AUDIENCE_KEYWORDS: &[&str] = &[
    "follower",
    "followers",
    "audience",
    "subscriber",
    "subscribers",
    "reach",
    "awareness",
    "brand",
    "branding",
    "community",
    "grow",
    "growth",
];

/// Whole-word keyword match on the lowercased goal; leads win over sales over audience.
pub fn detect_goal_focus(goal: &str) -> GoalFocus {
    let goal_lower = goal.to_lowercase();
    let words: Vec<&str> = goal_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let hit = |keywords: &[&str]| words.iter().any(|w| keywords.contains(w));

    if hit(LEAD_KEYWORDS) {
        GoalFocus::Leads
    } else if hit(SALES_KEYWORDS) {
        GoalFocus::Sales
    } else if hit(AUDIENCE_KEYWORDS) {
        GoalFocus::Audience
    } else {
        GoalFocus::General
    }
}

/// Placeholders: `{niche}`, `{goal}`, `{product}`.
fn cta_templates(focus: GoalFocus) -> &'static [&'static str] {
    match focus {
        GoalFocus::Leads => &[
            "Book a free strategy call to plan {goal}",
            "Download the free {niche} checklist",
            "Reply PLAN to get the template",
            "Join the waitlist for the next intake",
        ],
        GoalFocus::Sales => &[
            "Start with the Quick-Start Kit today",
            "See what's inside {product}",
            "Claim your spot before this round closes",
            "Book a call to see if it's a fit",
        ],
        GoalFocus::Audience => &[
            "Follow for daily {niche} playbooks",
            "Share this with someone working on {goal}",
            "Subscribe to the newsletter for weekly tips",
            "Comment with your biggest question",
        ],
        GoalFocus::General => &[
            "Save this for your next planning session",
            "Reply with your take on {goal}",
            "Subscribe for the weekly playbook",
            "Book a call to talk through your plan",
        ],
    }
}

/// Fills `{name}` placeholders in one pass over `template`. Values are copied
/// through literally, so a value that itself contains a placeholder is left alone.
/// Unknown placeholders stay as written.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Rotation
// ────────────────────────────────────────────────────────────────────────────

/// Template index for a 1-based day under the given seed. Day 0 is treated as day 1.
pub fn idea_index(seed: u64, day: u32) -> usize {
    let pool = IDEA_TEMPLATES.len();
    let offset = (seed % pool as u64) as usize;
    let stride = IDEA_STRIDES[((seed >> 32) % IDEA_STRIDES.len() as u64) as usize];
    (offset + day.saturating_sub(1) as usize * stride) % pool
}

/// Channels for a 1-based day, in canonical order starting where the previous day stopped.
/// Day 0 is treated as day 1.
pub fn rotate_channels(channels: &[Channel], day: u32) -> Vec<RepurposeEntry> {
    let n = channels.len();
    if n == 0 {
        return Vec::new();
    }
    let per_day = n.min(MAX_CHANNELS_PER_DAY);
    let elapsed = day.saturating_sub(1) as usize;
    let start = (elapsed * per_day) % n;
    let week = elapsed / 7;

    (0..per_day)
        .map(|j| {
            let channel = channels[(start + j) % n];
            let formats = channel.formats();
            RepurposeEntry {
                channel,
                format: formats[week % formats.len()].to_string(),
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Scheduler
// ────────────────────────────────────────────────────────────────────────────

pub fn schedule(profile: &InputProfile) -> Vec<ContentPlanDay> {
    let tone = get_tone_examples(profile.voice);

    let niche = mid_sentence(field_or(&profile.niche, FALLBACK_NICHE));
    let goal = mid_sentence(field_or(&profile.primary_goal, FALLBACK_GOAL));
    let customer = mid_sentence(field_or(&profile.ideal_customer, FALLBACK_CUSTOMER));
    let product = mid_sentence(field_or(&profile.product, FALLBACK_PRODUCT));

    let seed = stable_seed(&[
        profile.niche.trim(),
        profile.primary_goal.trim(),
        profile.voice.label(),
    ]);
    let ctas = cta_templates(detect_goal_focus(&profile.primary_goal));
    let channels: Vec<Channel> = profile.channels.iter().copied().collect();
    let values = [
        ("{niche}", niche.as_str()),
        ("{goal}", goal.as_str()),
        ("{customer}", customer.as_str()),
        ("{product}", product.as_str()),
    ];

    (1..=PLAN_DAYS)
        .map(|day| {
            let i = day as usize - 1;
            let body = fill(IDEA_TEMPLATES[idea_index(seed, day)], &values);
            let hook = tone.idea_hooks[i % tone.idea_hooks.len()];
            let cta = fill(ctas[i % ctas.len()], &values);

            ContentPlanDay {
                day,
                idea: format!("{hook}: {body}"),
                cta,
                repurpose: rotate_channels(&channels, day),
            }
        })
        .collect()
}
