//! Pain Points: groups the customer's frustrations into a fixed taxonomy.
//!
//! The category list is stable and exhaustive: every profile yields all four
//! groups in the same order, each with at least one item.

use crate::generation::customer_profile::{
    FALLBACK_CUSTOMER, FALLBACK_GOAL, FALLBACK_NICHE, FALLBACK_PRODUCT,
};
use crate::generation::{field_or, mid_sentence};
use crate::models::bundle::PainPointGroup;
use crate::models::profile::InputProfile;

pub const TIME_CAPACITY: &str = "Time & Capacity";
pub const CONFIDENCE_CLARITY: &str = "Confidence & Clarity";
pub const COST_ROI: &str = "Cost & ROI";
pub const VISIBILITY_TRUST: &str = "Visibility & Trust";

/// Category order as rendered.
pub const CATEGORIES: [&str; 4] = [TIME_CAPACITY, CONFIDENCE_CLARITY, COST_ROI, VISIBILITY_TRUST];

/// Competitors named individually before the list is cut off.
const MAX_NAMED_COMPETITORS: usize = 3;

pub fn extract(profile: &InputProfile) -> Vec<PainPointGroup> {
    let customer = mid_sentence(field_or(&profile.ideal_customer, FALLBACK_CUSTOMER));
    let niche = mid_sentence(field_or(&profile.niche, FALLBACK_NICHE));
    let goal = mid_sentence(field_or(&profile.primary_goal, FALLBACK_GOAL));
    let product = mid_sentence(field_or(&profile.product, FALLBACK_PRODUCT));

    let time = vec![
        format!("Not enough hours to create {niche} content consistently"),
        format!("Client delivery crowds out marketing for {customer}"),
        format!("Ad-hoc posting that never compounds into {goal}"),
    ];

    let clarity = vec![
        format!("Unsure which message actually resonates with {customer}"),
        format!("Second-guessing positioning in a crowded {niche} market"),
        format!("No repeatable framework for turning ideas into {goal}"),
    ];

    let cost = vec![
        format!("Spending on tools and tactics without a clear path to {goal}"),
        format!("Hard to justify investing in {product} without proof of return"),
        "Underpricing because the value is never spelled out".to_string(),
    ];

    let mut visibility = vec![format!("Blending in with every other voice in {niche}")];
    let competitors = profile.competitor_list();
    if competitors.is_empty() {
        visibility.push("Prospects can't tell you apart from the usual alternatives".to_string());
    } else {
        for name in competitors.iter().take(MAX_NAMED_COMPETITORS) {
            visibility.push(format!(
                "Prospects compare you to {name} without seeing the difference"
            ));
        }
        match competitors.len().saturating_sub(MAX_NAMED_COMPETITORS) {
            0 => {}
            1 => visibility.push("1 other competitor competing for the same attention".to_string()),
            rest => visibility.push(format!(
                "{rest} other competitors competing for the same attention"
            )),
        }
    }
    let differentiator = profile.differentiator.trim();
    if differentiator.is_empty() {
        visibility.push("No clear differentiator shows up in public content".to_string());
    } else {
        visibility.push(format!(
            "\"{differentiator}\" is not yet obvious from the outside"
        ));
    }

    CATEGORIES
        .into_iter()
        .zip([time, clarity, cost, visibility])
        .map(|(category, items)| PainPointGroup {
            category: category.to_string(),
            items,
        })
        .collect()
}
