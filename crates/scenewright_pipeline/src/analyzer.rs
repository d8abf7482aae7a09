//! Keyword-based feature extraction.
//!
//! Matching is plain substring containment on the lower-cased brief, so a
//! keyword inside a longer unrelated word still matches.

use scenewright_core::{
    ActionType, Brief, Character, FeatureSet, Mood, Setting, TimeOfDay, Weather,
};
use tracing::{debug, instrument};

/// Ordered `(keywords, value)` rules; the first rule with any keyword present wins.
type Rules<T> = &'static [(&'static [&'static str], T)];

const SETTING_RULES: Rules<Setting> = &[
    (&["masp"], Setting::Masp),
    (&["biblioteca"], Setting::Library),
    (&["café"], Setting::Cafe),
    (&["metrô", "metro"], Setting::Subway),
];

const MOOD_RULES: Rules<Mood> = &[
    (&["tenso"], Mood::Tense),
    (&["suspense"], Mood::Suspense),
    (&["emotivo"], Mood::Emotional),
    (&["ação", "acao"], Mood::Action),
];

const TIME_RULES: Rules<TimeOfDay> = &[
    (&["noite"], TimeOfDay::Night),
    (&["dia"], TimeOfDay::Day),
    (&["tarde"], TimeOfDay::Afternoon),
    (&["manhã", "manha"], TimeOfDay::Morning),
];

const WEATHER_RULES: Rules<Weather> = &[
    (&["chuvosa", "chuva"], Weather::Rain),
    (&["sol", "ensolarado"], Weather::Sun),
];

const ACTION_RULES: Rules<ActionType> = &[
    (&["encontro"], ActionType::Encounter),
    (&["discussão", "discutindo"], ActionType::Discussion),
    (&["diálogo", "dialogo"], ActionType::Dialogue),
    (&["rush", "lotado"], ActionType::HighMovement),
    (&["vazio", "silencioso"], ActionType::Calm),
];

/// Character rules; every group whose keywords are all satisfied adds its characters.
///
/// Each inner slice lists alternatives for one required mention.
const CHARACTER_RULES: &[(&[&[&str]], &[Character])] = &[
    (&[&["ivana"]], &[Character::Ivana]),
    (
        &[&["dr. manoel", "manoel", "dr manoel"]],
        &[Character::DrManoel],
    ),
    (
        &[&["pai"], &["filha"]],
        &[Character::Father, Character::Daughter],
    ),
];

fn first_match<T: Copy>(text: &str, rules: Rules<T>) -> Option<T> {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, value)| *value)
}

/// Extract the feature set of a brief.
///
/// Never fails: dimensions without a matching keyword stay empty.
///
/// # Examples
///
/// ```
/// use scenewright_core::{Brief, Mood, Setting};
/// use scenewright_pipeline::analyze;
///
/// let features = analyze(&Brief::from("Uma cena de suspense na biblioteca."));
/// assert_eq!(features.setting, Some(Setting::Library));
/// assert_eq!(features.mood, Some(Mood::Suspense));
/// assert!(features.weather.is_none());
/// ```
#[instrument(skip(brief), fields(brief_length = brief.as_str().len()))]
pub fn analyze(brief: &Brief) -> FeatureSet {
    let text = brief.lowercase();

    let characters = CHARACTER_RULES
        .iter()
        .filter(|(mentions, _)| {
            mentions
                .iter()
                .all(|alternatives| alternatives.iter().any(|k| text.contains(k)))
        })
        .flat_map(|(_, characters)| characters.iter().copied())
        .collect();

    let features = FeatureSet {
        characters,
        setting: first_match(&text, SETTING_RULES),
        mood: first_match(&text, MOOD_RULES),
        time_of_day: first_match(&text, TIME_RULES),
        weather: first_match(&text, WEATHER_RULES),
        action_type: first_match(&text, ACTION_RULES),
    };

    debug!(?features, "Extracted brief features");
    features
}
