pub mod builtin;

use crate::error::{Result, ScorerError};
use crate::types::profile::{Attributes, Profile};
use builtin::BUILTIN_PROFILES;

pub const DEFAULT_CUSTOM_DESCRIPTION: &str = "User-defined Web3 project privacy profile.";

pub fn list_builtin_profiles() -> Vec<&'static str> {
    BUILTIN_PROFILES.iter().map(|builtin| builtin.name).collect()
}

/// Exact, case-sensitive lookup.
pub fn get_builtin_profile(name: &str) -> Result<Profile> {
    let builtin = BUILTIN_PROFILES
        .iter()
        .find(|builtin| builtin.name == name)
        .ok_or_else(|| ScorerError::UnknownProfile {
            name: name.to_string(),
            available: list_builtin_profiles().join(", "),
        })?;
    tracing::info!(profile = builtin.name, "loaded builtin profile");
    Ok(builtin.to_profile())
}

pub fn builtin_profiles() -> Vec<Profile> {
    BUILTIN_PROFILES
        .iter()
        .map(builtin::BuiltinProfile::to_profile)
        .collect()
}

pub fn make_custom_profile(
    name: &str,
    description: Option<&str>,
    attributes: Attributes,
) -> Result<Profile> {
    if name.trim().is_empty() {
        return Err(ScorerError::InvalidProfile(
            "custom profile requires a non-blank --name".to_string(),
        ));
    }
    let description = description
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(DEFAULT_CUSTOM_DESCRIPTION);
    tracing::info!(profile = name, ?attributes, "built custom profile");
    Ok(Profile::new(name, description, attributes))
}
