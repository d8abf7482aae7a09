//! Categorical features extracted from a brief.
//!
//! Each dimension is a closed enum so templates keyed on it are checked
//! exhaustively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Named characters the analyzer recognises.
///
/// Declaration order is the order characters are listed in a plan.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    /// Ivana
    #[display("Ivana")]
    Ivana,
    /// Dr. Manoel
    #[display("Dr. Manoel")]
    DrManoel,
    /// The father of the father/daughter pair
    #[display("Pai")]
    Father,
    /// The daughter of the father/daughter pair
    #[display("Filha")]
    Daughter,
}

/// Scene location.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    /// Museu de Arte de São Paulo
    #[display("MASP")]
    Masp,
    /// An old library
    #[display("biblioteca")]
    Library,
    /// A café
    #[display("café")]
    Cafe,
    /// A subway station
    #[display("metrô")]
    Subway,
}

/// Emotional register of the scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Tense
    #[display("tenso")]
    Tense,
    /// Suspenseful
    #[display("suspense")]
    Suspense,
    /// Emotional
    #[display("emotivo")]
    Emotional,
    /// Action-driven
    #[display("ação")]
    Action,
}

/// Period of the day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Night
    #[display("noite")]
    Night,
    /// Day
    #[display("dia")]
    Day,
    /// Afternoon
    #[display("tarde")]
    Afternoon,
    /// Morning
    #[display("manhã")]
    Morning,
}

/// Weather.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    /// Rain
    #[display("chuva")]
    Rain,
    /// Sun
    #[display("sol")]
    Sun,
}

/// Kind of action or movement in the scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// An encounter or confrontation
    #[display("encontro")]
    Encounter,
    /// An argument
    #[display("discussão")]
    Discussion,
    /// A conversation
    #[display("diálogo")]
    Dialogue,
    /// Crowds and rush
    #[display("movimento intenso")]
    HighMovement,
    /// Empty, quiet surroundings
    #[display("ambiente calmo")]
    Calm,
}

/// Features extracted from one brief.
///
/// Every field defaults to empty/absent. Only `characters` is multi-valued.
///
/// # Examples
///
/// ```
/// use scenewright_core::{FeatureSet, Setting};
///
/// let features = FeatureSet::default();
/// assert!(features.is_empty());
///
/// let features = FeatureSet { setting: Some(Setting::Masp), ..Default::default() };
/// assert!(!features.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Characters present
    pub characters: BTreeSet<Character>,
    /// Location
    pub setting: Option<Setting>,
    /// Emotional register
    pub mood: Option<Mood>,
    /// Period of the day
    pub time_of_day: Option<TimeOfDay>,
    /// Weather
    pub weather: Option<Weather>,
    /// Action or movement
    pub action_type: Option<ActionType>,
}

impl FeatureSet {
    /// True when no dimension matched.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
            && self.setting.is_none()
            && self.mood.is_none()
            && self.time_of_day.is_none()
            && self.weather.is_none()
            && self.action_type.is_none()
    }

    /// True when every character in `pair` is present.
    pub fn has_all(&self, pair: &[Character]) -> bool {
        pair.iter().all(|c| self.characters.contains(c))
    }
}
