use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::user::UserError;

/// Learning area a user is interested in.
///
/// Persisted by its display label so stored records stay readable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestArea {
    #[default]
    #[serde(rename = "Inteligência Artificial")]
    ArtificialIntelligence,
    #[serde(rename = "Sustentabilidade")]
    Sustainability,
    #[serde(rename = "Gestão")]
    Management,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    #[serde(rename = "Desenvolvimento Web")]
    WebDevelopment,
}

impl InterestArea {
    /// Every selectable area, in picker order.
    pub const ALL: [InterestArea; 5] = [
        InterestArea::ArtificialIntelligence,
        InterestArea::Sustainability,
        InterestArea::Management,
        InterestArea::SoftSkills,
        InterestArea::WebDevelopment,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InterestArea::ArtificialIntelligence => "Inteligência Artificial",
            InterestArea::Sustainability => "Sustentabilidade",
            InterestArea::Management => "Gestão",
            InterestArea::SoftSkills => "Soft Skills",
            InterestArea::WebDevelopment => "Desenvolvimento Web",
        }
    }

    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.label() == value)
    }
}

impl fmt::Display for InterestArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InterestArea {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim()).ok_or_else(|| UserError::UnknownArea(s.to_owned()))
    }
}
