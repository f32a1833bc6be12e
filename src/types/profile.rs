use crate::types::scoring::Score;
use serde::Serialize;

/// One of the five scored project attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    ZeroKnowledge,
    HomomorphicEncryption,
    OpenSource,
    Audited,
    SoundnessFocus,
}

impl Attribute {
    /// Report order.
    pub const ALL: [Attribute; 5] = [
        Attribute::ZeroKnowledge,
        Attribute::HomomorphicEncryption,
        Attribute::OpenSource,
        Attribute::Audited,
        Attribute::SoundnessFocus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::ZeroKnowledge => "Uses zero-knowledge proofs",
            Attribute::HomomorphicEncryption => "Uses fully homomorphic encryption",
            Attribute::OpenSource => "Open source code",
            Attribute::Audited => "External audits",
            Attribute::SoundnessFocus => "Formal soundness focus",
        }
    }
}

/// The boolean half of a profile. Every flag defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub uses_zk: bool,
    pub uses_fhe: bool,
    pub open_source: bool,
    pub audited: bool,
    pub soundness_focus: bool,
}

impl Attributes {
    pub fn is_enabled(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::ZeroKnowledge => self.uses_zk,
            Attribute::HomomorphicEncryption => self.uses_fhe,
            Attribute::OpenSource => self.open_source,
            Attribute::Audited => self.audited,
            Attribute::SoundnessFocus => self.soundness_focus,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| self.is_enabled(*attribute))
    }
}

/// Immutable description of a project. Construct through
/// [`crate::profiles`] so the non-blank name invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: String,
    description: String,
    #[serde(flatten)]
    attributes: Attributes,
}

impl Profile {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A profile paired with the score derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProfile<'a> {
    #[serde(flatten)]
    pub profile: &'a Profile,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_default_to_disabled() {
        let attributes = Attributes::default();
        assert!(Attribute::ALL
            .iter()
            .all(|attribute| !attributes.is_enabled(*attribute)));
        assert_eq!(attributes.enabled().count(), 0);
    }

    #[test]
    fn enabled_follows_report_order() {
        let attributes = Attributes {
            soundness_focus: true,
            uses_zk: true,
            ..Attributes::default()
        };
        let enabled: Vec<_> = attributes.enabled().collect();
        assert_eq!(
            enabled,
            vec![Attribute::ZeroKnowledge, Attribute::SoundnessFocus]
        );
    }

    #[test]
    fn profile_serializes_flat() {
        let profile = Profile::new(
            "demo",
            "demo project",
            Attributes {
                uses_fhe: true,
                ..Attributes::default()
            },
        );
        let value = serde_json::to_value(&profile).expect("profile should serialize");
        assert_eq!(value["name"], "demo");
        assert_eq!(value["uses_fhe"], true);
        assert_eq!(value["uses_zk"], false);
        assert!(value.get("attributes").is_none());
    }
}
