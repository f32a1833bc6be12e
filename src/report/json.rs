use crate::types::profile::{Profile, ScoredProfile};

pub fn to_json(scored: &ScoredProfile<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scored)
}

pub fn listing_to_json(profiles: &[Profile]) -> Result<String, serde_json::Error> {
    let names: Vec<&str> = profiles.iter().map(Profile::name).collect();
    serde_json::to_string_pretty(&names)
}
