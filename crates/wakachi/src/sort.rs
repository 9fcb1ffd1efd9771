//! Result ranking: longest match, then fewest deinflection steps, then
//! headword type, then JMDict priority tags.

use {std::cmp::Ordering, wakachi_api::{Sense, WordEntry, WordResult}};

/// Sorts results best-first.
pub(crate) fn rank(results: &mut [WordResult]) {
    results.sort_by(compare);
}

fn compare(a: &WordResult, b: &WordResult) -> Ordering {
    b.match_len
        .cmp(&a.match_len)
        .then_with(|| a.deinflection_steps().cmp(&b.deinflection_steps()))
        .then_with(|| headword_type(&a.entry).cmp(&headword_type(&b.entry)))
        .then_with(|| priority_score(&b.entry).total_cmp(&priority_score(&a.entry)))
}

/// Weight of a single frequency-of-use tag. Unknown tags score zero.
fn tag_score(tag: &str) -> f64 {
    match tag {
        "ichi1" | "i1" => 50.0,
        "news1" | "n1" => 40.0,
        "spec1" | "s1" => 32.0,
        "gai1" | "g1" => 30.0,
        "ichi2" | "i2" => 25.0,
        "news2" | "n2" => 20.0,
        "spec2" | "s2" => 16.0,
        "gai2" | "g2" => 15.0,
        _ => tag
            .strip_prefix("nf")
            .and_then(|digits| digits.parse::<f64>().ok())
            .map_or(0.0, |nf| (48.0 - nf / 2.0).clamp(0.0, 48.0)),
    }
}

/// Combined score of one reading's priority tags: the highest tag
/// counts in full, each further tag at a tenth of the previous digit
/// position, so a reading with many tags edges out a reading with one
/// equal tag without ever overtaking a higher tag class.
fn reading_score(priority: &[String]) -> f64 {
    let mut scores = priority
        .iter()
        .map(|tag| tag_score(tag))
        .filter(|&score| score > 0.0)
        .collect::<Vec<_>>();
    scores.sort_by(|a, b| b.total_cmp(a));

    scores
        .iter()
        .enumerate()
        .map(|(position, score)| score / 10f64.powi(position as i32))
        .sum()
}

/// Priority of the readings the lookup key matched, highest wins.
///
/// Only readings carrying a match range are consulted, so frequency
/// tags on an unrelated orthography of the same entry cannot inflate
/// the score.
pub(crate) fn priority_score(entry: &WordEntry) -> f64 {
    let kanji = entry
        .kanji_readings
        .iter()
        .filter(|reading| reading.match_range.is_some())
        .map(|reading| reading_score(&reading.priority));
    let kana = entry
        .kana_readings
        .iter()
        .filter(|reading| reading.match_range.is_some())
        .map(|reading| reading_score(&reading.priority));

    kanji.chain(kana).fold(0.0, f64::max)
}

const OBSCURE_KANA: [&str; 4] = ["ok", "rk", "sk", "ik"];
const OBSCURE_KANJI: [&str; 3] = ["rK", "sK", "iK"];

/// Classifies how the matched headword should rank: 1 sorts ahead of 2.
///
/// A match on a kanji orthography, or on the kana form of a word
/// usually written in kana, is the word's natural citation form (1);
/// a kana match on a word normally written in kanji is the weaker
/// match (2).
pub(crate) fn headword_type(entry: &WordEntry) -> u8 {
    let Some(kana) = entry.matching_kana() else {
        return 1;
    };
    if kana
        .info
        .iter()
        .any(|tag| OBSCURE_KANA.contains(&tag.as_str()))
    {
        return 2;
    }
    if entry.kanji_readings.is_empty() {
        return 1;
    }
    if entry.kanji_readings.iter().all(|kanji| {
        kanji
            .info
            .iter()
            .any(|tag| OBSCURE_KANJI.contains(&tag.as_str()))
    }) {
        return 1;
    }
    if usually_kana(&entry.senses) {
        return 1;
    }
    if kana.no_kanji {
        return 1;
    }
    2
}

/// Whether at least half of the English-language senses carry the `uk`
/// (word usually written using kana alone) tag.
fn usually_kana(senses: &[Sense]) -> bool {
    let english = senses
        .iter()
        .filter(|sense| {
            sense.glosses.is_empty() || sense.glosses.iter().any(|gloss| gloss.lang == "eng")
        })
        .collect::<Vec<_>>();
    if english.is_empty() {
        return false;
    }

    let tagged = english
        .iter()
        .filter(|sense| sense.misc.iter().any(|tag| tag == "uk"))
        .count();
    tagged * 2 >= english.len()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        wakachi_api::{EntryId, Gloss, KanaReading, KanjiReading},
    };

    fn kana_entry(id: i64, text: &str, priority: &[&str]) -> WordEntry {
        WordEntry {
            id: EntryId(id),
            ent_seq: id,
            kana_readings: vec![KanaReading {
                text: text.to_owned(),
                priority: priority.iter().map(|&tag| tag.to_owned()).collect(),
                match_range: Some(0..text.chars().count()),
                matched: true,
                ..KanaReading::default()
            }],
            ..WordEntry::default()
        }
    }

    fn result(entry: WordEntry, match_len: usize) -> WordResult {
        WordResult {
            entry,
            match_len,
            reason_chains: None,
        }
    }

    #[test]
    fn tag_weights() {
        assert_eq!(tag_score("ichi1"), 50.0);
        assert_eq!(tag_score("i1"), 50.0);
        assert_eq!(tag_score("news2"), 20.0);
        assert_eq!(tag_score("nf02"), 47.0);
        assert_eq!(tag_score("nf48"), 24.0);
        assert_eq!(tag_score("bogus"), 0.0);
    }

    #[test]
    fn more_tags_break_ties_without_overtaking() {
        let one = reading_score(&["ichi1".to_owned()]);
        let two = reading_score(&["ichi1".to_owned(), "news1".to_owned()]);
        let higher = reading_score(&["ichi1".to_owned(), "ichi1".to_owned()]);
        assert!(two > one);
        assert!(higher > two);
        assert!(two < 51.0);
    }

    #[test]
    fn longer_match_always_precedes() {
        let mut results = vec![
            result(kana_entry(1, "に", &["ichi1"]), 1),
            result(kana_entry(2, "にべ", &[]), 2),
        ];
        rank(&mut results);
        assert_eq!(results[0].entry.id, EntryId(2));
    }

    #[test]
    fn priority_breaks_equal_length_ties() {
        // に (particle, ichi1, score 50) sorts before にべ (priority 0)
        // once their consumed lengths agree
        let mut results = vec![
            result(kana_entry(2, "にべ", &[]), 1),
            result(kana_entry(1, "に", &["ichi1"]), 1),
        ];
        rank(&mut results);
        assert_eq!(results[0].entry.id, EntryId(1));
    }

    #[test]
    fn fewer_deinflection_steps_precede() {
        let direct = result(kana_entry(1, "きる", &[]), 2);
        let mut derived = result(kana_entry(2, "きる", &[]), 2);
        derived.reason_chains = Some(vec![vec![
            wakachi_api::Reason::Potential,
            wakachi_api::Reason::Past,
        ]]);

        let mut results = vec![derived, direct];
        rank(&mut results);
        assert_eq!(results[0].entry.id, EntryId(1));
    }

    #[test]
    fn headword_types() {
        // no kana reading carries the match: type 1
        let mut entry = kana_entry(1, "がくせい", &[]);
        entry.kana_readings[0].match_range = None;
        assert_eq!(headword_type(&entry), 1);

        // kana-only word: type 1
        assert_eq!(headword_type(&kana_entry(1, "は", &[])), 1);

        // kana match on a word with a live kanji form: type 2
        let mut entry = kana_entry(1, "たべる", &[]);
        entry.kanji_readings.push(KanjiReading {
            text: "食べる".into(),
            ..KanjiReading::default()
        });
        assert_eq!(headword_type(&entry), 2);

        // ... unless every kanji form is obscure
        let mut entry = kana_entry(1, "にべ", &[]);
        entry.kanji_readings.push(KanjiReading {
            text: "鮸".into(),
            info: vec!["rK".into()],
            ..KanjiReading::default()
        });
        assert_eq!(headword_type(&entry), 1);

        // ... or the word is usually written in kana
        let mut entry = kana_entry(1, "ある", &[]);
        entry.kanji_readings.push(KanjiReading {
            text: "有る".into(),
            ..KanjiReading::default()
        });
        entry.senses.push(Sense {
            index: 0,
            misc: vec!["uk".into()],
            glosses: vec![Gloss {
                text: "to be".into(),
                lang: "eng".into(),
                g_type: None,
            }],
            ..Sense::default()
        });
        assert_eq!(headword_type(&entry), 1);

        // an obscure kana match is type 2 outright
        let mut entry = kana_entry(1, "けふ", &[]);
        entry.kana_readings[0].info = vec!["ok".into()];
        assert_eq!(headword_type(&entry), 2);
    }
}
