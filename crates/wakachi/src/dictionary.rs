//! The dictionary lookup contract and an in-memory implementation.

use {
    anyhow::Result,
    itertools::Itertools,
    wakachi_api::{WordEntry, jpn},
};

/// Lookups longer than this many code points are pointless: no
/// dictionary entry is that long.
pub const MAX_LOOKUP_LEN: usize = 15;

/// A word lookup service the tokenizer resolves candidates against.
///
/// Implementations match `text` against each entry's kanji and kana
/// forms, comparing both the text as given and its hiragana-folded
/// form, and cap the result list at `max_results`. On every returned
/// entry, the readings whose hiragana-folded text equals the folded
/// `matching_text` (defaulting to `text`) must carry
/// [`match_range`]/[`matched`]: if any kanji orthography matches, only
/// the matching kanji are marked, otherwise the matching kana readings
/// are. The ranker attributes priority tags to the marked readings
/// only.
///
/// Implementations must be safe for concurrent `get_words` calls if
/// the tokenizer is shared across threads.
///
/// [`match_range`]: wakachi_api::KanaReading::match_range
/// [`matched`]: wakachi_api::KanaReading::matched
pub trait Dictionary {
    /// Looks up entries whose kanji or kana form equals `text` or its
    /// hiragana-folded form.
    ///
    /// # Errors
    ///
    /// Errors only if the underlying store is unavailable; a miss is an
    /// empty list.
    fn get_words(
        &self,
        text: &str,
        max_results: usize,
        matching_text: Option<&str>,
    ) -> Result<Vec<WordEntry>>;
}

/// A [`Dictionary`] over entries held in memory.
///
/// Suitable as a test fixture and as the smallest useful production
/// dictionary: load JMDict-derived [`WordEntry`] values and hand it to
/// [`tokenize`](crate::tokenize).
#[derive(Debug, Default)]
pub struct MemoryDictionary {
    entries: Vec<WordEntry>,
    by_kanji: foldhash::HashMap<String, Vec<usize>>,
    by_kana: foldhash::HashMap<String, Vec<usize>>,
}

impl MemoryDictionary {
    /// Builds the dictionary, indexing every kanji form verbatim and
    /// every kana form under its hiragana folding.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let entries = entries.into_iter().collect::<Vec<_>>();
        let mut by_kanji = foldhash::HashMap::<String, Vec<usize>>::default();
        let mut by_kana = foldhash::HashMap::<String, Vec<usize>>::default();

        for (position, entry) in entries.iter().enumerate() {
            for kanji in &entry.kanji_readings {
                by_kanji
                    .entry(kanji.text.clone())
                    .or_default()
                    .push(position);
            }
            for kana in &entry.kana_readings {
                by_kana
                    .entry(jpn::kana_to_hiragana(&kana.text).into_owned())
                    .or_default()
                    .push(position);
            }
        }

        Self {
            entries,
            by_kanji,
            by_kana,
        }
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for MemoryDictionary {
    fn get_words(
        &self,
        text: &str,
        max_results: usize,
        matching_text: Option<&str>,
    ) -> Result<Vec<WordEntry>> {
        if text.chars().count() > MAX_LOOKUP_LEN {
            return Ok(Vec::new());
        }

        let folded = jpn::kana_to_hiragana(text);
        let mut positions = Vec::new();
        for key in [text, folded.as_ref()] {
            if let Some(found) = self.by_kanji.get(key) {
                positions.extend_from_slice(found);
            }
        }
        if let Some(found) = self.by_kana.get(folded.as_ref()) {
            positions.extend_from_slice(found);
        }
        Ok(positions
            .into_iter()
            .unique()
            .take(max_results)
            .map(|position| {
                let mut entry = self.entries[position].clone();
                mark_matches(&mut entry, matching_text.unwrap_or(text));
                entry
            })
            .collect())
    }
}

/// Marks the readings the lookup key matched, under kana folding.
///
/// Kanji orthographies win: if any matches, kana readings stay
/// unmarked even when they also equal the key.
fn mark_matches(entry: &mut WordEntry, matching_text: &str) {
    let folded = jpn::kana_to_hiragana(matching_text);

    let mut kanji_matched = false;
    for kanji in &mut entry.kanji_readings {
        if jpn::kana_to_hiragana(&kanji.text) == folded {
            kanji.match_range = Some(0..len_utf16(&kanji.text));
            kanji.matched = true;
            kanji_matched = true;
        }
    }
    if kanji_matched {
        return;
    }

    for kana in &mut entry.kana_readings {
        if jpn::kana_to_hiragana(&kana.text) == folded {
            kana.match_range = Some(0..len_utf16(&kana.text));
            kana.matched = true;
        }
    }
}

fn len_utf16(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        wakachi_api::{EntryId, KanaReading, KanjiReading},
    };

    fn entry(id: i64, kanji: &[&str], kana: &[&str]) -> WordEntry {
        WordEntry {
            id: EntryId(id),
            ent_seq: id,
            kanji_readings: kanji
                .iter()
                .map(|&text| KanjiReading {
                    text: text.to_owned(),
                    ..KanjiReading::default()
                })
                .collect(),
            kana_readings: kana
                .iter()
                .map(|&text| KanaReading {
                    text: text.to_owned(),
                    ..KanaReading::default()
                })
                .collect(),
            senses: Vec::new(),
        }
    }

    fn fixture() -> MemoryDictionary {
        MemoryDictionary::new([
            entry(1, &["食べる"], &["たべる"]),
            entry(2, &["蛋白質", "タンパク質"], &["たんぱくしつ"]),
            entry(3, &[], &["にべ"]),
        ])
    }

    #[test]
    fn kanji_and_kana_lookups() {
        let dict = fixture();
        assert_eq!(dict.get_words("食べる", 10, None).unwrap().len(), 1);
        assert_eq!(dict.get_words("たべる", 10, None).unwrap().len(), 1);
        assert_eq!(dict.get_words("タベル", 10, None).unwrap().len(), 1);
        assert!(dict.get_words("食べ", 10, None).unwrap().is_empty());
    }

    #[test]
    fn katakana_kanji_form_matches_verbatim() {
        let dict = fixture();
        let found = dict.get_words("タンパク質", 10, None).unwrap();
        assert_eq!(found.len(), 1);
        let kanji = &found[0].kanji_readings;
        assert!(!kanji[0].matched, "蛋白質 itself did not match the key");
        assert!(kanji[1].matched);
        assert_eq!(kanji[1].match_range, Some(0..5));
        // kanji match suppresses kana marking
        assert!(!found[0].kana_readings[0].matched);
    }

    #[test]
    fn kana_only_entry_marks_kana() {
        let dict = fixture();
        let found = dict.get_words("にベ", 10, None).unwrap();
        assert_eq!(found.len(), 1);
        let kana = &found[0].kana_readings[0];
        assert!(kana.matched);
        assert_eq!(kana.match_range, Some(0..2));
    }

    #[test]
    fn long_lookups_are_skipped() {
        let dict = fixture();
        let long = "あ".repeat(MAX_LOOKUP_LEN + 1);
        assert!(dict.get_words(&long, 10, None).unwrap().is_empty());
    }

    #[test]
    fn result_cap_is_honored() {
        let dict = MemoryDictionary::new((0..10).map(|i| entry(i, &[], &["かき"])));
        assert_eq!(dict.get_words("かき", 3, None).unwrap().len(), 3);
    }
}
