//! Offer Ladder: three ascending tiers priced from the selected bracket.

use crate::generation::customer_profile::{FALLBACK_GOAL, FALLBACK_PRODUCT};
use crate::generation::tone::get_tone_examples;
use crate::generation::{field_or, mid_sentence};
use crate::models::bundle::OfferTier;
use crate::models::profile::{InputProfile, PricePoint};

pub const ENTRY_TIER: &str = "Quick-Start Kit";
pub const CORE_TIER: &str = "Core Program";
pub const PREMIUM_TIER: &str = "Premium Partnership";

/// Tier prices in USD for one bracket, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBracket {
    pub entry: u32,
    pub core: u32,
    pub premium: u32,
}

impl PriceBracket {
    pub fn as_array(&self) -> [u32; 3] {
        [self.entry, self.core, self.premium]
    }
}

/// Maps a price point to its bracket. Every tier price stays inside
/// `[entry, premium]` of the bracket for that setting.
pub fn bracket_for(price_point: PricePoint) -> PriceBracket {
    match price_point {
        PricePoint::Low => PriceBracket {
            entry: 27,
            core: 97,
            premium: 297,
        },
        PricePoint::Mid => PriceBracket {
            entry: 97,
            core: 497,
            premium: 1_497,
        },
        PricePoint::High => PriceBracket {
            entry: 497,
            core: 2_500,
            premium: 7_500,
        },
    }
}

/// Formats whole dollars with thousands separators: 1497 -> "$1,497".
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

pub fn build(profile: &InputProfile) -> Vec<OfferTier> {
    let tone = get_tone_examples(profile.voice);
    let bracket = bracket_for(profile.price_point);

    let product = mid_sentence(field_or(&profile.product, FALLBACK_PRODUCT));
    let goal = mid_sentence(field_or(&profile.primary_goal, FALLBACK_GOAL));
    let verb = tone.promise_verb;
    let light = tone.power_words[0];
    let core_word = tone.power_words[1];

    let differentiator = profile.differentiator.trim();
    let finish = |promise: String| -> String {
        if differentiator.is_empty() {
            format!("{promise}.")
        } else {
            format!("{promise}. Built on {}.", mid_sentence(differentiator))
        }
    };

    vec![
        OfferTier {
            name: ENTRY_TIER.to_string(),
            price: format_usd(bracket.entry),
            promise: finish(format!(
                "{verb} {goal} with a self-serve starter version of {product}"
            )),
            components: vec![
                format!("Self-paced playbook with {light} checklists"),
                "Templates for your first five posts".to_string(),
                "Recorded audit of your current messaging".to_string(),
            ],
        },
        OfferTier {
            name: CORE_TIER.to_string(),
            price: format_usd(bracket.core),
            promise: finish(format!(
                "{verb} {goal} with {product}, implemented alongside you over 90 days"
            )),
            components: vec![
                format!("Everything in the {ENTRY_TIER}"),
                format!("90-day {core_word} content roadmap"),
                "Bi-weekly group coaching calls".to_string(),
                "Offer and messaging workshop".to_string(),
            ],
        },
        OfferTier {
            name: PREMIUM_TIER.to_string(),
            price: format_usd(bracket.premium),
            promise: finish(format!(
                "{verb} {goal} with {product}, done with you end to end"
            )),
            components: vec![
                format!("Everything in the {CORE_TIER}"),
                "Private 1:1 strategy sessions".to_string(),
                "Done-with-you content production".to_string(),
                "Quarterly performance review against your goal".to_string(),
                "Priority async support between sessions".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_usd(price: &str) -> u32 {
        price
            .trim_start_matches('$')
            .replace(',', "")
            .parse()
            .unwrap()
    }

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(27), "$27");
        assert_eq!(format_usd(497), "$497");
        assert_eq!(format_usd(1_497), "$1,497");
        assert_eq!(format_usd(7_500), "$7,500");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_ladder_prices_ascend_for_every_bracket() {
        for price_point in PricePoint::ALL {
            let profile = InputProfile {
                price_point,
                ..InputProfile::default()
            };
            let prices: Vec<u32> = build(&profile).iter().map(|t| parse_usd(&t.price)).collect();
            assert_eq!(prices.len(), 3);
            assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{price_point}: {prices:?}");
            assert_eq!(prices, bracket_for(price_point).as_array().to_vec());
        }
    }

    #[test]
    fn test_brackets_do_not_overlap_upwards() {
        let low = bracket_for(PricePoint::Low);
        let mid = bracket_for(PricePoint::Mid);
        let high = bracket_for(PricePoint::High);
        assert!(low.premium < mid.premium && mid.premium < high.premium);
        assert!(low.entry < mid.entry && mid.entry < high.entry);
    }

    #[test]
    fn test_components_scale_with_tier() {
        let ladder = build(&InputProfile::default());
        let counts: Vec<usize> = ladder.iter().map(|t| t.components.len()).collect();
        assert_eq!(counts, vec![3, 4, 5]);
    }

    #[test]
    fn test_promise_uses_product_and_differentiator() {
        let ladder = build(&InputProfile::default());
        assert_eq!(
            ladder[1].promise,
            "Get more qualified leads with marketing strategy + content engine, \
             implemented alongside you over 90 days. \
             Built on simple frameworks that ship weekly results."
        );
    }

    #[test]
    fn test_blank_differentiator_ends_promise_cleanly() {
        let ladder = build(&InputProfile {
            differentiator: "  ".to_string(),
            ..InputProfile::default()
        });
        assert!(ladder.iter().all(|t| t.promise.ends_with('.')));
        assert!(ladder.iter().all(|t| !t.promise.contains("Built on")));
    }
}
