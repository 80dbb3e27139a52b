//! Customer Profile: one-paragraph summary plus demographic and psychographic bullets.

use crate::generation::tone::get_tone_examples;
use crate::generation::{field_or, mid_sentence};
use crate::models::bundle::CustomerProfile;
use crate::models::profile::InputProfile;

pub(crate) const FALLBACK_CUSTOMER: &str = "your ideal customer";
pub(crate) const FALLBACK_NICHE: &str = "your niche";
pub(crate) const FALLBACK_GOAL: &str = "your primary goal";
pub(crate) const FALLBACK_PRODUCT: &str = "your offer";

/// Builds the customer profile. Never fails; blank fields fall back to generic phrasing.
pub fn synthesize(profile: &InputProfile) -> CustomerProfile {
    let tone = get_tone_examples(profile.voice);

    let customer = field_or(&profile.ideal_customer, FALLBACK_CUSTOMER);
    let niche = field_or(&profile.niche, FALLBACK_NICHE);
    let goal = field_or(&profile.primary_goal, FALLBACK_GOAL);

    let summary = format!(
        "{} {} in {}, working toward {}. {}",
        tone.summary_lead,
        mid_sentence(customer),
        mid_sentence(niche),
        mid_sentence(goal),
        tone.summary_close
    );

    let mut demographics = vec![
        format!("Segment: {customer}"),
        format!("Industry: {niche}"),
        format!(
            "Decision maker or direct influencer on {} marketing spend",
            mid_sentence(niche)
        ),
    ];
    if !profile.channels.is_empty() {
        let channels = profile
            .channels
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ");
        demographics.push(format!("Reachable on {channels}"));
    }

    let differentiator = profile.differentiator.trim();
    let psychographics = vec![
        format!("Motivated by {}", mid_sentence(goal)),
        if differentiator.is_empty() {
            "Values proof over promises".to_string()
        } else {
            format!("Drawn to {}", mid_sentence(differentiator))
        },
        format!("Skeptical of one-size-fits-all {} advice", mid_sentence(niche)),
        format!("Responds best to {}", tone.preference),
    ];

    CustomerProfile {
        summary,
        demographics,
        psychographics,
    }
}
