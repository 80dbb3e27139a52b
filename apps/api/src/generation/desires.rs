//! Dreams & Desires: aspirational outcomes, most goal-aligned first.

use crate::generation::customer_profile::FALLBACK_GOAL;
use crate::generation::{field_or, mid_sentence};
use crate::models::profile::{InputProfile, PricePoint};

pub fn generate(profile: &InputProfile) -> Vec<String> {
    let goal = field_or(&profile.primary_goal, FALLBACK_GOAL);
    let product = match profile.product.trim() {
        "" => "An offer",
        product => product,
    };

    let mut desires = vec![
        format!("Achieve {} predictably, month after month", mid_sentence(goal)),
        format!("{product} that runs without constant hand-holding"),
        "Confidence that every post moves the business forward".to_string(),
        "More time back for the work they actually enjoy".to_string(),
    ];

    // Stakes rise with the bracket.
    match profile.price_point {
        PricePoint::Low => {
            desires.push("Quick wins that pay for themselves within weeks".to_string());
        }
        PricePoint::Mid => {
            desires.push("A repeatable system that compounds results every quarter".to_string());
        }
        PricePoint::High => {
            desires.push("Being seen as the go-to authority in their market".to_string());
            desires.push("Premium clients who value expertise over price".to_string());
            desires.push("Category leadership that outlasts any single campaign".to_string());
        }
    }

    desires
}
