use crate::types::profile::{Attributes, Profile};

pub struct BuiltinProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: Attributes,
}

impl BuiltinProfile {
    pub fn to_profile(&self) -> Profile {
        Profile::new(self.name, self.description, self.attributes)
    }
}

pub static BUILTIN_PROFILES: [BuiltinProfile; 3] = [
    BuiltinProfile {
        name: "aztec",
        description: "Aztec-like L2: privacy-oriented zk rollup with private smart contracts.",
        attributes: Attributes {
            uses_zk: true,
            uses_fhe: false,
            open_source: true,
            audited: true,
            soundness_focus: false,
        },
    },
    BuiltinProfile {
        name: "zama",
        description: "Zama-like FHE stack: computation over encrypted data with fully homomorphic encryption.",
        attributes: Attributes {
            uses_zk: false,
            uses_fhe: true,
            open_source: true,
            audited: true,
            soundness_focus: false,
        },
    },
    BuiltinProfile {
        name: "soundness",
        description: "Soundness-focused lab: formal correctness and protocol soundness research first.",
        attributes: Attributes {
            uses_zk: true,
            uses_fhe: false,
            open_source: true,
            audited: true,
            soundness_focus: true,
        },
    },
];
