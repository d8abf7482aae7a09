//! Plan and analyze command handlers.

use super::commands::OutputFormat;
use scenewright::{Brief, FeatureSet, JsonError, Planner, ScenewrightResult, analyze};

/// Print the scene plan for a brief.
pub fn plan_brief(brief: &str) {
    let plan = Planner::new().plan(&Brief::new(brief));
    println!("{}", plan);
}

/// Print the features extracted from a brief.
pub fn analyze_brief(brief: &str, format: OutputFormat) -> ScenewrightResult<()> {
    let features = analyze(&Brief::new(brief));

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&features)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_features(&features),
    }

    Ok(())
}

fn print_features(features: &FeatureSet) {
    fn show<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
    }

    let characters = if features.characters.is_empty() {
        "-".to_string()
    } else {
        features
            .characters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("Extracted Features:");
    println!("===================");
    println!("Characters:  {}", characters);
    println!("Setting:     {}", show(features.setting));
    println!("Mood:        {}", show(features.mood));
    println!("Time of day: {}", show(features.time_of_day));
    println!("Weather:     {}", show(features.weather));
    println!("Action:      {}", show(features.action_type));
}
