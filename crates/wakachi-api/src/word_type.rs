use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Word classes a deinflection candidate may belong to.
    ///
    /// The low bits are the terminal (dictionary-form) categories; a
    /// candidate is only returned from deinflection if it intersects
    /// [`WordType::TERMINAL`]. The high bits mark intermediate verb
    /// stems, which exist only as waypoints inside the deinflection
    /// graph and never appear on returned candidates.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WordType: u16 {
        /// Ichidan ("ru") verb
        const ICHIDAN_VERB = 1 << 0;
        /// Godan ("u") verb, any ending row
        const GODAN_VERB = 1 << 1;
        /// i-adjective
        const I_ADJ = 1 << 2;
        /// 来る and its kanji forms
        const KURU_VERB = 1 << 3;
        /// する, 為る, and verbs conjugating like them
        const SURU_VERB = 1 << 4;
        /// Special-class suru verbs (〜ずる)
        const SPECIAL_SURU_VERB = 1 << 5;
        /// Noun or participle taking する
        const NOUN_VS = 1 << 6;

        /// Continuative (masu) stem
        const MASU_STEM = 1 << 7;
        /// Stem of a 〜た/〜て form
        const TA_TE_STEM = 1 << 8;
        /// Stem of a 〜だ/〜で form
        const DA_DE_STEM = 1 << 9;
        /// Irrealis (nai) stem
        const IRREALIS_STEM = 1 << 10;

        /// Union of the terminal (dictionary-form) categories.
        const TERMINAL = Self::ICHIDAN_VERB.bits()
            | Self::GODAN_VERB.bits()
            | Self::I_ADJ.bits()
            | Self::KURU_VERB.bits()
            | Self::SURU_VERB.bits()
            | Self::SPECIAL_SURU_VERB.bits()
            | Self::NOUN_VS.bits();

        /// Union of the verb categories (terminal, excluding adjectives
        /// and plain nouns).
        const VERB = Self::ICHIDAN_VERB.bits()
            | Self::GODAN_VERB.bits()
            | Self::KURU_VERB.bits()
            | Self::SURU_VERB.bits()
            | Self::SPECIAL_SURU_VERB.bits();

        /// Union of the intermediate stem markers.
        const STEM = Self::MASU_STEM.bits()
            | Self::TA_TE_STEM.bits()
            | Self::DA_DE_STEM.bits()
            | Self::IRREALIS_STEM.bits();
    }
}

impl WordType {
    /// Whether this mask contains at least one terminal category.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.intersects(Self::TERMINAL)
    }
}

impl Serialize for WordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u16::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid word type bits {bits:#06x}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_and_stem_partition() {
        assert_eq!(WordType::TERMINAL & WordType::STEM, WordType::empty());
        assert!(WordType::ICHIDAN_VERB.is_terminal());
        assert!(!WordType::MASU_STEM.is_terminal());
        assert!((WordType::GODAN_VERB | WordType::MASU_STEM).is_terminal());
    }

    #[test]
    fn serializes_as_bits() {
        let mask = WordType::GODAN_VERB | WordType::MASU_STEM;
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "130");
        assert_eq!(serde_json::from_str::<WordType>(&json).unwrap(), mask);
        assert!(serde_json::from_str::<WordType>("65535").is_err());
    }
}
