use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected option values. Free-text fields never fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("voice: unrecognized option '{0}'")]
    UnknownVoice(String),

    #[error("pricePoint: unrecognized option '{0}'")]
    UnknownPricePoint(String),

    #[error("channels: unrecognized channel '{0}'")]
    UnknownChannel(String),
}

/// Lowercases and strips the separators used in display labels, so that
/// "Clear & Actionable", "clear-actionable" and "ClearActionable" compare equal.
fn normalize_option(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '&' | '-' | ' ' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Voice
// ────────────────────────────────────────────────────────────────────────────

/// Tone used across all generated copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    #[serde(rename = "Clear & Actionable", alias = "ClearActionable")]
    ClearActionable,
    #[serde(rename = "Friendly & Encouraging", alias = "FriendlyEncouraging")]
    FriendlyEncouraging,
    #[serde(rename = "Bold & Contrarian", alias = "BoldContrarian")]
    BoldContrarian,
    #[serde(rename = "Professional & Data-Driven", alias = "ProfessionalDataDriven")]
    ProfessionalDataDriven,
}

impl Voice {
    pub const ALL: [Voice; 4] = [
        Voice::ClearActionable,
        Voice::FriendlyEncouraging,
        Voice::BoldContrarian,
        Voice::ProfessionalDataDriven,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Voice::ClearActionable => "Clear & Actionable",
            Voice::FriendlyEncouraging => "Friendly & Encouraging",
            Voice::BoldContrarian => "Bold & Contrarian",
            Voice::ProfessionalDataDriven => "Professional & Data-Driven",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Voice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_option(s);
        Voice::ALL
            .into_iter()
            .find(|v| normalize_option(v.label()) == wanted)
            .ok_or_else(|| ValidationError::UnknownVoice(s.trim().to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Price point
// ────────────────────────────────────────────────────────────────────────────

/// Selects the pricing bracket of the offer ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricePoint {
    Low,
    #[default]
    Mid,
    High,
}

impl PricePoint {
    pub const ALL: [PricePoint; 3] = [PricePoint::Low, PricePoint::Mid, PricePoint::High];

    pub fn label(self) -> &'static str {
        match self {
            PricePoint::Low => "Low",
            PricePoint::Mid => "Mid",
            PricePoint::High => "High",
        }
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PricePoint {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_option(s);
        PricePoint::ALL
            .into_iter()
            .find(|p| normalize_option(p.label()) == wanted)
            .ok_or_else(|| ValidationError::UnknownPricePoint(s.trim().to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Channel
// ────────────────────────────────────────────────────────────────────────────

/// Distribution channel. Declaration order is the canonical rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    LinkedIn,
    Twitter,
    Instagram,
    YouTube,
    Email,
    Blog,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::LinkedIn,
        Channel::Twitter,
        Channel::Instagram,
        Channel::YouTube,
        Channel::Email,
        Channel::Blog,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Channel::LinkedIn => "LinkedIn",
            Channel::Twitter => "Twitter",
            Channel::Instagram => "Instagram",
            Channel::YouTube => "YouTube",
            Channel::Email => "Email",
            Channel::Blog => "Blog",
        }
    }

    /// Native formats for repurposing, alternated week by week.
    pub fn formats(self) -> [&'static str; 2] {
        match self {
            Channel::LinkedIn => ["carousel", "text post"],
            Channel::Twitter => ["thread", "single post"],
            Channel::Instagram => ["reel", "carousel"],
            Channel::YouTube => ["short", "long-form video"],
            Channel::Email => ["newsletter segment", "nurture email"],
            Channel::Blog => ["long-form post", "how-to guide"],
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_option(s);
        Channel::ALL
            .into_iter()
            .find(|c| normalize_option(c.label()) == wanted)
            .ok_or_else(|| ValidationError::UnknownChannel(s.trim().to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input profile
// ────────────────────────────────────────────────────────────────────────────

/// Validated business description. Every generator reads from this and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProfile {
    pub niche: String,
    pub ideal_customer: String,
    pub product: String,
    pub primary_goal: String,
    pub voice: Voice,
    pub price_point: PricePoint,
    pub channels: BTreeSet<Channel>,
    pub competitors: String,
    pub differentiator: String,
}

impl Default for InputProfile {
    fn default() -> Self {
        Self {
            niche: "Coaching".to_string(),
            ideal_customer: "Busy founders".to_string(),
            product: "Marketing strategy + content engine".to_string(),
            primary_goal: "More qualified leads".to_string(),
            voice: Voice::ClearActionable,
            price_point: PricePoint::Mid,
            channels: [Channel::LinkedIn, Channel::Twitter, Channel::Email]
                .into_iter()
                .collect(),
            competitors: String::new(),
            differentiator: "Simple frameworks that ship weekly results".to_string(),
        }
    }
}

impl InputProfile {
    /// Competitor names split on commas and newlines, trimmed, empties and
    /// case-insensitive duplicates dropped. First occurrence wins.
    pub fn competitor_list(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.competitors
            .split([',', '\n', '\r'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

/// Raw form as the UI submits it: every option still a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub niche: String,
    pub ideal_customer: String,
    pub product: String,
    pub primary_goal: String,
    pub voice: Option<String>,
    pub price_point: Option<String>,
    pub channels: Vec<String>,
    pub competitors: String,
    pub differentiator: String,
}

impl From<&InputProfile> for ProfileForm {
    fn from(profile: &InputProfile) -> Self {
        Self {
            niche: profile.niche.clone(),
            ideal_customer: profile.ideal_customer.clone(),
            product: profile.product.clone(),
            primary_goal: profile.primary_goal.clone(),
            voice: Some(profile.voice.label().to_string()),
            price_point: Some(profile.price_point.label().to_string()),
            channels: profile
                .channels
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            competitors: profile.competitors.clone(),
            differentiator: profile.differentiator.clone(),
        }
    }
}

/// Blank or missing options resolve to the enum default; anything else must parse.
fn parse_option<T>(raw: Option<&str>) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError> + Default,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value.parse(),
    }
}

impl TryFrom<ProfileForm> for InputProfile {
    type Error = ValidationError;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        let voice = parse_option::<Voice>(form.voice.as_deref())?;
        let price_point = parse_option::<PricePoint>(form.price_point.as_deref())?;
        let channels = form
            .channels
            .iter()
            .map(|raw| raw.parse::<Channel>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            niche: form.niche,
            ideal_customer: form.ideal_customer,
            product: form.product,
            primary_goal: form.primary_goal,
            voice,
            price_point,
            channels,
            competitors: form.competitors,
            differentiator: form.differentiator,
        })
    }
}
