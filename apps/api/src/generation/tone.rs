//! Tone calibration: maps the selected voice to the phrasing every generator shares.
//!
//! Each voice gets a summary frame, a set of idea hooks rotated across the content
//! plan, and a word list the copy should lean on. Generators never branch on
//! `Voice` directly; they read these tables.

use crate::models::profile::Voice;

/// Phrasing calibrated to a specific voice.
#[derive(Debug, Clone)]
pub struct ToneExamples {
    /// Opens the customer summary, followed by the ideal customer.
    pub summary_lead: &'static str,
    /// Closing sentence of the customer summary.
    pub summary_close: &'static str,
    /// Prefixes rotated across content ideas, one per day.
    pub idea_hooks: Vec<&'static str>,
    /// How this audience likes to be spoken to, used in psychographics.
    pub preference: &'static str,
    /// Verb the offer promises open with.
    pub promise_verb: &'static str,
    /// Adjectives for offer components; at least two per voice.
    pub power_words: Vec<&'static str>,
}

/// Returns the phrasing table for the selected voice.
pub fn get_tone_examples(voice: Voice) -> ToneExamples {
    match voice {
        Voice::ClearActionable => ToneExamples {
            summary_lead: "Your best-fit buyer is",
            summary_close: "They want a clear next step, not more theory.",
            idea_hooks: vec!["Step by step", "Quick win", "Do this today"],
            preference: "plain, step-by-step guidance they can act on the same day",
            promise_verb: "Get",
            power_words: vec!["simple", "practical", "step-by-step"],
        },
        Voice::FriendlyEncouraging => ToneExamples {
            summary_lead: "You're here to help",
            summary_close: "They need encouragement and a plan that feels doable.",
            idea_hooks: vec!["You've got this", "Small steps", "Friendly reminder"],
            preference: "warm, encouraging advice that celebrates progress",
            promise_verb: "Feel confident as you reach",
            power_words: vec!["bite-sized", "doable", "supportive"],
        },
        Voice::BoldContrarian => ToneExamples {
            summary_lead: "Forget the generic persona. Your real buyer is",
            summary_close: "They are tired of recycled advice and ready for a sharper take.",
            idea_hooks: vec!["Hot take", "Unpopular opinion", "Stop doing this"],
            preference: "direct, opinionated takes that challenge industry defaults",
            promise_verb: "Break from the pack and hit",
            power_words: vec!["no-fluff", "unconventional", "sharper"],
        },
        Voice::ProfessionalDataDriven => ToneExamples {
            summary_lead: "Primary target segment:",
            summary_close: "They decide on evidence and expect measurable ROI.",
            idea_hooks: vec!["By the numbers", "Case study", "Benchmark"],
            preference: "evidence, benchmarks and measurable outcomes",
            promise_verb: "Reach a measurable lift in",
            power_words: vec!["benchmarked", "measurable", "proven"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_voice_has_idea_hooks() {
        for voice in Voice::ALL {
            let t = get_tone_examples(voice);
            assert!(!t.idea_hooks.is_empty(), "{voice} has no idea hooks");
            assert!(!t.summary_lead.is_empty());
            assert!(t.power_words.len() >= 2);
        }
    }

    #[test]
    fn test_contrarian_tone_uses_hot_take() {
        let t = get_tone_examples(Voice::BoldContrarian);
        assert!(t.idea_hooks.contains(&"Hot take"));
    }

    #[test]
    fn test_data_driven_tone_mentions_roi() {
        let t = get_tone_examples(Voice::ProfessionalDataDriven);
        assert!(t.summary_close.contains("ROI"));
        assert!(t.power_words.contains(&"measurable"));
    }

    #[test]
    fn test_voices_have_distinct_summary_leads() {
        let leads: std::collections::HashSet<_> = Voice::ALL
            .into_iter()
            .map(|v| get_tone_examples(v).summary_lead)
            .collect();
        assert_eq!(leads.len(), Voice::ALL.len());
    }
}
