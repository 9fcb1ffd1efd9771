use {
    serde::{Deserialize, Serialize},
    std::ops::Range,
};

/// Opaque and unique identifier for a single [`WordEntry`] in a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub i64);

/// A single dictionary entry, shaped after a JMDict `<entry>`.
///
/// An entry groups one or more kanji orthographies, one or more kana
/// readings, and the senses they share. Lookups resolve surface text to
/// entries; the engine then ranks entries using the priority and info
/// tags carried on the readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Unique identifier for this entry in its dictionary.
    pub id: EntryId,
    /// JMDict sequence number (`<ent_seq>`).
    pub ent_seq: i64,
    /// Kanji orthographies (`<k_ele>`), possibly empty for kana-only words.
    pub kanji_readings: Vec<KanjiReading>,
    /// Kana readings (`<r_ele>`), never empty in well-formed data.
    pub kana_readings: Vec<KanaReading>,
    /// Senses (`<sense>`), in source order.
    pub senses: Vec<Sense>,
}

/// A kanji orthography of a [`WordEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KanjiReading {
    /// The orthography itself, e.g. `食べる`.
    pub text: String,
    /// Frequency-of-use tags: `ichi1`/`ichi2`, `news1`/`news2`,
    /// `spec1`/`spec2`, `gai1`/`gai2`, `nf01`..`nf48`, or their
    /// single-letter aliases (`i1`, `n2`, ...).
    #[serde(default)]
    pub priority: Vec<String>,
    /// Orthography info tags. The ranker consults `iK` (irregular),
    /// `rK` (rare) and `sK` (search-only); others such as `ateji` are
    /// carried but not interpreted.
    #[serde(default)]
    pub info: Vec<String>,
    /// Half-open range of this orthography, in UTF-16 code units, that
    /// equals the lookup key. Populated by the dictionary layer.
    #[serde(default)]
    pub match_range: Option<Range<usize>>,
    /// Whether this orthography is the one the lookup key matched.
    #[serde(default)]
    pub matched: bool,
}

/// A kana reading of a [`WordEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KanaReading {
    /// The reading itself, e.g. `たべる`.
    pub text: String,
    /// Frequency-of-use tags, as on [`KanjiReading::priority`].
    #[serde(default)]
    pub priority: Vec<String>,
    /// Reading info tags. The ranker consults `ik` (irregular), `ok`
    /// (out-of-date), `rk` (rare) and `sk` (search-only); others such
    /// as `gikun` are carried but not interpreted.
    #[serde(default)]
    pub info: Vec<String>,
    /// JMDict `<re_nokanji>`: this reading is not a true reading of the
    /// kanji orthographies (e.g. the katakana form of a loanword).
    #[serde(default)]
    pub no_kanji: bool,
    /// Half-open range of this reading, in UTF-16 code units, that
    /// equals the lookup key under kana folding. Populated by the
    /// dictionary layer.
    #[serde(default)]
    pub match_range: Option<Range<usize>>,
    /// Whether this reading is the one the lookup key matched.
    #[serde(default)]
    pub matched: bool,
}

/// One sense of a [`WordEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    /// Zero-based position of this sense within its entry.
    pub index: usize,
    /// Part-of-speech tags, either JMDict short codes (`v1`, `v5r`,
    /// `adj-i`, ...) or their expanded English descriptions, depending
    /// on how the dictionary was built.
    #[serde(default)]
    pub pos_tags: Vec<String>,
    /// Glosses for this sense.
    #[serde(default)]
    pub glosses: Vec<Gloss>,
    /// Sense info (`<s_inf>`) notes.
    #[serde(default)]
    pub info: Vec<String>,
    /// Field-of-application tags (`comp`, `med`, ...).
    #[serde(default)]
    pub field: Vec<String>,
    /// Miscellanea tags. The ranker consults `uk` (usually kana).
    #[serde(default)]
    pub misc: Vec<String>,
    /// Dialect tags (`ksb`, `thb`, ...).
    #[serde(default)]
    pub dial: Vec<String>,
}

/// A single translation or definition within a [`Sense`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gloss {
    /// The gloss text.
    pub text: String,
    /// Three-letter language code, `eng` if absent in the source.
    pub lang: String,
    /// Gloss type (`lit`, `fig`, `expl`, ...) if any.
    #[serde(default)]
    pub g_type: Option<String>,
}

impl WordEntry {
    /// Iterates over the part-of-speech tags of every sense.
    pub fn pos_tags(&self) -> impl Iterator<Item = &str> {
        self.senses
            .iter()
            .flat_map(|sense| sense.pos_tags.iter().map(String::as_str))
    }

    /// The kana reading the lookup key matched, if any.
    #[must_use]
    pub fn matching_kana(&self) -> Option<&KanaReading> {
        self.kana_readings.iter().find(|r| r.match_range.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_round_trips_through_json() {
        let entry = WordEntry {
            id: EntryId(1358280),
            ent_seq: 1358280,
            kanji_readings: vec![KanjiReading {
                text: "食べる".into(),
                priority: vec!["ichi1".into(), "news2".into(), "nf25".into()],
                ..KanjiReading::default()
            }],
            kana_readings: vec![KanaReading {
                text: "たべる".into(),
                priority: vec!["ichi1".into()],
                match_range: Some(0..3),
                matched: true,
                ..KanaReading::default()
            }],
            senses: vec![Sense {
                index: 0,
                pos_tags: vec!["v1".into(), "vt".into()],
                glosses: vec![Gloss {
                    text: "to eat".into(),
                    lang: "eng".into(),
                    g_type: None,
                }],
                ..Sense::default()
            }],
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back = serde_json::from_str::<WordEntry>(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn pos_tags_spans_all_senses() {
        let entry = WordEntry {
            senses: vec![
                Sense {
                    index: 0,
                    pos_tags: vec!["n".into()],
                    ..Sense::default()
                },
                Sense {
                    index: 1,
                    pos_tags: vec!["vs".into()],
                    ..Sense::default()
                },
            ],
            ..WordEntry::default()
        };
        assert_eq!(entry.pos_tags().collect::<Vec<_>>(), ["n", "vs"]);
    }
}
