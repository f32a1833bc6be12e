use crate::types::profile::{Attribute, Profile, ScoredProfile};
use crate::types::scoring::MAX_SCORE;

pub const DISCLAIMER: &str = "Note: This score is a toy heuristic for educational purposes only.\n\
Always rely on official audits, specifications, and documentation.";

pub fn to_text(scored: &ScoredProfile<'_>) -> String {
    let profile = scored.profile;
    let mut output = String::new();
    output.push_str(&format!("Name: {}\n", profile.name()));
    output.push_str(&format!("Description: {}\n\n", profile.description()));

    output.push_str("Features:\n");
    for attribute in Attribute::ALL {
        output.push_str(&format!(
            "  - {}: {}\n",
            attribute.label(),
            if profile.attributes().is_enabled(attribute) {
                "enabled"
            } else {
                "disabled"
            }
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Estimated privacy-strength score: {}/{}\n\n",
        scored.score, MAX_SCORE
    ));
    output.push_str(DISCLAIMER);
    output
}

pub fn listing_to_text(profiles: &[Profile]) -> String {
    let mut output =
        String::from("Built-in example profiles related to Web3 privacy and soundness:");
    for profile in profiles {
        output.push_str(&format!("\n- {}: {}", profile.name(), profile.description()));
    }
    output
}
