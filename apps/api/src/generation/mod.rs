// Generation pipeline: profile synthesis, pain points, desires, offer ladder, content plan.
// Every section is a pure function of the InputProfile; nothing here touches I/O or clocks.

pub mod content_plan;
pub mod customer_profile;
pub mod desires;
pub mod handlers;
pub mod offers;
pub mod pain_points;
pub mod seed;
pub mod tone;

use tracing::debug;

use crate::models::bundle::GeneratedBundle;
use crate::models::profile::InputProfile;

/// Derives the full bundle for one profile.
///
/// Identical profiles always produce equal bundles. The five sections are
/// independent of each other and only read from `profile`.
pub fn generate(profile: &InputProfile) -> GeneratedBundle {
    let bundle = GeneratedBundle {
        customer_profile: customer_profile::synthesize(profile),
        pain_points: pain_points::extract(profile),
        dreams_desires: desires::generate(profile),
        offer_ladder: offers::build(profile),
        content_plan: content_plan::schedule(profile),
    };

    debug!(
        niche = %profile.niche,
        voice = %profile.voice,
        price_point = %profile.price_point,
        channels = profile.channels.len(),
        "Generated bundle: {} pain point groups, {} offer tiers, {} plan days",
        bundle.pain_points.len(),
        bundle.offer_ladder.len(),
        bundle.content_plan.len()
    );

    bundle
}

/// Trimmed field text, or `fallback` when the field is blank.
pub(crate) fn field_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    match value.trim() {
        "" => fallback,
        trimmed => trimmed,
    }
}

/// Lowercases a leading capital so free text reads naturally mid-sentence.
///
/// Only touches the first word when the rest of it is already lowercase, so
/// "Coaching" becomes "coaching" while "SaaS" and "B2B" stay as typed.
pub(crate) fn mid_sentence(value: &str) -> String {
    let value = value.trim_start();
    let first_word = value.split_whitespace().next().unwrap_or("");
    let mut chars = first_word.chars();
    let Some(first) = chars.next() else {
        return value.to_string();
    };
    let rest = chars.as_str();
    if first.is_uppercase() && !rest.is_empty() && rest.chars().all(|c| !c.is_uppercase()) {
        let mut out: String = first.to_lowercase().collect();
        out.push_str(&value[first.len_utf8()..]);
        out
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Channel, PricePoint, Voice};
    use std::collections::BTreeSet;

    #[test]
    fn test_mid_sentence_lowercases_plain_words() {
        assert_eq!(mid_sentence("Coaching"), "coaching");
        assert_eq!(mid_sentence("More qualified leads"), "more qualified leads");
    }

    #[test]
    fn test_mid_sentence_keeps_acronyms_and_brands() {
        assert_eq!(mid_sentence("SaaS"), "SaaS");
        assert_eq!(mid_sentence("B2B founders"), "B2B founders");
        assert_eq!(mid_sentence("I"), "I");
        assert_eq!(mid_sentence(""), "");
    }

    #[test]
    fn test_mid_sentence_handles_multibyte_first_char() {
        assert_eq!(mid_sentence("Élan studios"), "élan studios");
    }

    #[test]
    fn test_field_or_trims_and_falls_back() {
        assert_eq!(field_or("  Coaching ", "x"), "Coaching");
        assert_eq!(field_or(" \n ", "fallback"), "fallback");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let profile = InputProfile {
            competitors: "Acme, Globex".to_string(),
            price_point: PricePoint::High,
            voice: Voice::ProfessionalDataDriven,
            ..InputProfile::default()
        };
        assert_eq!(generate(&profile), generate(&profile));
    }

    #[test]
    fn test_generate_populates_every_section() {
        let bundle = generate(&InputProfile::default());
        assert!(!bundle.customer_profile.summary.is_empty());
        assert_eq!(bundle.pain_points.len(), 4);
        assert!(!bundle.dreams_desires.is_empty());
        assert_eq!(bundle.offer_ladder.len(), 3);
        assert_eq!(bundle.content_plan.len(), 30);
    }

    #[test]
    fn test_generate_with_only_some_channels() {
        let profile = InputProfile {
            channels: [Channel::LinkedIn, Channel::Email].into_iter().collect(),
            ..InputProfile::default()
        };
        let used: BTreeSet<Channel> = generate(&profile)
            .content_plan
            .iter()
            .flat_map(|d| d.repurpose.iter().map(|r| r.channel))
            .collect();
        assert_eq!(used, profile.channels);
    }

    #[test]
    fn test_bundle_serializes_with_ui_field_names() {
        let value = serde_json::to_value(generate(&InputProfile::default())).unwrap();
        for key in [
            "customerProfile",
            "painPoints",
            "dreamsDesires",
            "offerLadder",
            "contentPlan",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["contentPlan"][0]["repurpose"][0]["channel"], "LinkedIn");
    }
}
