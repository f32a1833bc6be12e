use crate::types::profile::Attribute;

pub type Score = u32;

/// Upper bound applied to every computed score.
pub const MAX_SCORE: Score = 100;

/// Points awarded per enabled attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub zk: Score,
    pub fhe: Score,
    pub open_source: Score,
    pub audited: Score,
    pub soundness_focus: Score,
}

impl Weights {
    pub const fn standard() -> Self {
        Self {
            zk: 30,
            fhe: 30,
            open_source: 15,
            audited: 15,
            soundness_focus: 10,
        }
    }

    pub fn weight(&self, attribute: Attribute) -> Score {
        match attribute {
            Attribute::ZeroKnowledge => self.zk,
            Attribute::HomomorphicEncryption => self.fhe,
            Attribute::OpenSource => self.open_source,
            Attribute::Audited => self.audited,
            Attribute::SoundnessFocus => self.soundness_focus,
        }
    }

    /// Raw sum with every attribute enabled, before capping.
    pub fn total(&self) -> Score {
        Attribute::ALL
            .iter()
            .map(|attribute| self.weight(*attribute))
            .sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::standard()
    }
}
