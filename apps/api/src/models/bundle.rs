use serde::{Deserialize, Serialize};

use crate::models::profile::Channel;

/// Who the business sells to, as a summary plus two bullet lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub summary: String,
    pub demographics: Vec<String>,
    pub psychographics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPointGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One rung of the offer ladder. `price` is display text such as "$1,497".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferTier {
    pub name: String,
    pub price: String,
    pub promise: String,
    pub components: Vec<String>,
}

/// How a day's idea is adapted for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepurposeEntry {
    pub channel: Channel,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPlanDay {
    pub day: u32,
    pub idea: String,
    pub cta: String,
    pub repurpose: Vec<RepurposeEntry>,
}

/// Everything one generation call produces. Field names follow the JSON the UI reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBundle {
    pub customer_profile: CustomerProfile,
    pub pain_points: Vec<PainPointGroup>,
    pub dreams_desires: Vec<String>,
    pub offer_ladder: Vec<OfferTier>,
    pub content_plan: Vec<ContentPlanDay>,
}
