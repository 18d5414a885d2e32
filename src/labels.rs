//! The closed set of craft categories the classifier can output.
//!
//! The label set is configuration, not data: the normalization logic relies
//! on `CraftLabel::ALL` having a fixed, stable enumeration order when it has
//! to synthesize a ranking from a top-1-only server response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five recognized Moroccan handicraft categories.
///
/// Wire names are the lowercase French identifiers the inference service
/// uses (`"babouche"`, `"bijoux"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraftLabel {
    Babouche,
    Bijoux,
    Poterie,
    Tapis,
    Zellige,
}

impl CraftLabel {
    /// Canonical enumeration order. Synthesis picks "other" labels from this
    /// order, so it must never be reordered.
    pub const ALL: [CraftLabel; 5] = [
        CraftLabel::Babouche,
        CraftLabel::Bijoux,
        CraftLabel::Poterie,
        CraftLabel::Tapis,
        CraftLabel::Zellige,
    ];

    /// Wire identifier, as sent and received over the prediction endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            CraftLabel::Babouche => "babouche",
            CraftLabel::Bijoux => "bijoux",
            CraftLabel::Poterie => "poterie",
            CraftLabel::Tapis => "tapis",
            CraftLabel::Zellige => "zellige",
        }
    }

    pub fn parse(s: &str) -> Option<CraftLabel> {
        match s {
            "babouche" => Some(CraftLabel::Babouche),
            "bijoux" => Some(CraftLabel::Bijoux),
            "poterie" => Some(CraftLabel::Poterie),
            "tapis" => Some(CraftLabel::Tapis),
            "zellige" => Some(CraftLabel::Zellige),
            _ => None,
        }
    }

    /// Human-readable craft name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            CraftLabel::Babouche => "Babouche",
            CraftLabel::Bijoux => "Bijoux Berbères",
            CraftLabel::Poterie => "Poterie",
            CraftLabel::Tapis => "Tapis Berbère",
            CraftLabel::Zellige => "Zellige",
        }
    }

    /// Region the craft is traditionally associated with.
    pub fn region(&self) -> &'static str {
        match self {
            CraftLabel::Babouche => "Fès",
            CraftLabel::Bijoux => "Atlas & Souss",
            CraftLabel::Poterie => "Safi",
            CraftLabel::Tapis => "Taznakht",
            CraftLabel::Zellige => "Marrakech & Fès",
        }
    }

    /// Rough age of the tradition, for the heritage badge.
    pub fn heritage(&self) -> &'static str {
        match self {
            CraftLabel::Babouche => "10+ siècles",
            CraftLabel::Bijoux => "8+ siècles",
            CraftLabel::Poterie => "12+ siècles",
            CraftLabel::Tapis => "11+ siècles",
            CraftLabel::Zellige => "9+ siècles",
        }
    }
}

impl fmt::Display for CraftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All labels except `label`, in enumeration order.
pub fn others(label: CraftLabel, labels: &[CraftLabel]) -> Vec<CraftLabel> {
    labels.iter().copied().filter(|l| *l != label).collect()
}
