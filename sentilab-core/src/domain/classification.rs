//! The five sentiment bands of the index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Sentiment band attached to an index value.
///
/// Variant order is the canonical enumeration order: it drives `Ord`, the
/// frequency table ordering and the mode tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Extreme Fear")]
    ExtremeFear,
    #[serde(rename = "Fear")]
    Fear,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Greed")]
    Greed,
    #[serde(rename = "Extreme Greed")]
    ExtremeGreed,
}

impl Classification {
    /// All classifications in canonical order.
    pub const ALL: [Classification; 5] = [
        Classification::ExtremeFear,
        Classification::Fear,
        Classification::Neutral,
        Classification::Greed,
        Classification::ExtremeGreed,
    ];

    /// Band for a value under the fixed banding rule.
    ///
    /// Values above 100 fall into `ExtremeGreed`.
    pub fn from_value(value: u8) -> Self {
        match value {
            0..=24 => Classification::ExtremeFear,
            25..=44 => Classification::Fear,
            45..=55 => Classification::Neutral,
            56..=75 => Classification::Greed,
            _ => Classification::ExtremeGreed,
        }
    }

    /// Inclusive value range covered by this band.
    pub fn band(&self) -> RangeInclusive<u8> {
        match self {
            Classification::ExtremeFear => 0..=24,
            Classification::Fear => 25..=44,
            Classification::Neutral => 45..=55,
            Classification::Greed => 56..=75,
            Classification::ExtremeGreed => 76..=100,
        }
    }

    /// Upstream label, e.g. "Extreme Fear".
    pub fn label(&self) -> &'static str {
        match self {
            Classification::ExtremeFear => "Extreme Fear",
            Classification::Fear => "Fear",
            Classification::Neutral => "Neutral",
            Classification::Greed => "Greed",
            Classification::ExtremeGreed => "Extreme Greed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = String;

    /// Parses an upstream label. Matching ignores case and surrounding
    /// whitespace; the inner space is optional ("ExtremeFear" is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "extremefear" => Ok(Classification::ExtremeFear),
            "fear" => Ok(Classification::Fear),
            "neutral" => Ok(Classification::Neutral),
            "greed" => Ok(Classification::Greed),
            "extremegreed" => Ok(Classification::ExtremeGreed),
            _ => Err(format!("unknown classification label '{s}'")),
        }
    }
}
