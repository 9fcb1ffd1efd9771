//! The static deinflection rule table and its ending index.
//!
//! Each rule rewrites a trailing suffix of a candidate word to an
//! earlier form: `from` is matched against the candidate's ending,
//! `to` replaces it, and the type masks gate which candidates the rule
//! may fire on and what the result may be. Inflections that attach to
//! a verb stem rewrite down to the bare stem (typed as one of the stem
//! markers); separate recovery rules then rebuild each dictionary form
//! the stem could belong to. The closure engine in the parent module
//! chains rules until nothing new is produced.

use {
    std::sync::LazyLock,
    wakachi_api::{Reason, WordType},
};

/// A single suffix-rewrite rule.
#[derive(Debug)]
pub(crate) struct DeinflectRule {
    /// Suffix matched against the candidate's trailing characters,
    /// after optional katakana-to-hiragana folding of the ending.
    pub from: &'static str,
    /// Replacement for the matched suffix.
    pub to: &'static str,
    /// Types the current candidate must intersect for the rule to fire.
    pub from_type: WordType,
    /// Types of the rewritten candidate.
    pub to_type: WordType,
    /// Grammatical steps this rule records, in generative order.
    pub reasons: &'static [Reason],
}

/// Rules never carry an ending longer than this many code points, so
/// the engine need not probe longer suffixes.
pub(crate) const MAX_ENDING_LEN: usize = 7;

const ALL: WordType = WordType::TERMINAL;
const VERB: WordType = WordType::VERB;
const V1: WordType = WordType::ICHIDAN_VERB;
const V1K: WordType = WordType::ICHIDAN_VERB.union(WordType::KURU_VERB);
const V5: WordType = WordType::GODAN_VERB;
const VK: WordType = WordType::KURU_VERB;
const VS: WordType = WordType::SURU_VERB;
const VZ: WordType = WordType::SPECIAL_SURU_VERB;
const ADJ: WordType = WordType::I_ADJ;
const VN: WordType = WordType::NOUN_VS;
const MASU: WordType = WordType::MASU_STEM;
const TATE: WordType = WordType::TA_TE_STEM;
const DADE: WordType = WordType::DA_DE_STEM;
const IRR: WordType = WordType::IRREALIS_STEM;

macro_rules! add_rules {
    (
        $vec:expr,
        $($from:literal => $to:literal : $from_type:expr, $to_type:expr, [$($reason:ident),* $(,)?]);*
        $(;)?
    ) => {
        $($vec.push(DeinflectRule {
            from: $from,
            to: $to,
            from_type: $from_type,
            to_type: $to_type,
            reasons: &[$(Reason::$reason),*],
        });)*
    };
}

#[expect(
    clippy::vec_init_then_push,
    reason = "macros cannot generate individual elements in an array, \
              so we have to create and push into a `Vec` instead"
)]
pub(crate) static RULES: LazyLock<Vec<DeinflectRule>> = LazyLock::new(|| {
    let mut rules = Vec::new();

    // polite forms, down to the masu stem
    add_rules![rules,
        "ませんでした" => "" : ALL, MASU, [PoliteNegativePast];
        "ましょう" => "" : ALL, MASU, [PoliteVolitional];
        "ません" => "" : ALL, MASU, [PoliteNegative];
        "ました" => "" : ALL, MASU, [PolitePast];
        "まして" => "" : ALL, MASU, [Polite, Te];
        "ます" => "" : ALL, MASU, [Polite];
        "ませ" => "" : ALL, MASU, [Polite];
        "まへんでした" => "" : ALL, MASU, [PoliteNegativePast, Kansai];
        "まへん" => "" : ALL, MASU, [PoliteNegative, Kansai];
        "まひょ" => "" : ALL, MASU, [PoliteVolitional, Kansai];
    ];

    // other auxiliaries attaching to the masu stem
    add_rules![rules,
        "たい" => "" : ALL, MASU, [Tai];
        "たがる" => "" : ALL, MASU, [Tai];
        "そう" => "" : ALL, MASU, [Sou];
        "すぎる" => "" : ALL, MASU, [Sugiru];
        "すぎ" => "" : ALL, MASU, [Sugiru];
        "なさい" => "" : ALL, MASU, [Respectful];
        "な" => "" : ALL, MASU, [Respectful];
        "はる" => "" : ALL, MASU, [Respectful, Kansai];
        "やはる" => "" : ALL, MASU, [Respectful, Kansai];
        "つつ" => "" : ALL, MASU, [Continuous];
        "ながら" => "" : ALL, MASU, [Continuous];
    ];

    // masu-stem recovery: rebuild the dictionary form from a bare stem
    add_rules![rules,
        "い" => "う" : MASU, V5, [MasuStem];
        "き" => "く" : MASU, V5, [MasuStem];
        "ぎ" => "ぐ" : MASU, V5, [MasuStem];
        "し" => "す" : MASU, V5, [MasuStem];
        "ち" => "つ" : MASU, V5, [MasuStem];
        "に" => "ぬ" : MASU, V5, [MasuStem];
        "び" => "ぶ" : MASU, V5, [MasuStem];
        "み" => "む" : MASU, V5, [MasuStem];
        "り" => "る" : MASU, V5, [MasuStem];
        "し" => "する" : MASU, VS, [MasuStem];
        "き" => "くる" : MASU, VK, [MasuStem];
        "じ" => "ずる" : MASU, VZ, [MasuStem];
        "為" => "為る" : MASU, VS, [MasuStem];
        // the honorific godan verbs take an い stem
        "いらっしゃい" => "いらっしゃる" : MASU, V5, [MasuStem];
        "おっしゃい" => "おっしゃる" : MASU, V5, [MasuStem];
        "ください" => "くださる" : MASU, V5, [MasuStem];
        "なさい" => "なさる" : MASU, V5, [MasuStem];
        "ござい" => "ござる" : MASU, V5, [MasuStem];
    ];

    // -ta/-te family, down to the respective stems
    add_rules![rules,
        "た" => "" : ALL, TATE, [Past];
        "て" => "" : ALL, TATE, [Te];
        "たら" => "" : ALL, TATE, [Tara];
        "たり" => "" : ALL, TATE, [Tari];
        "ちゃう" => "" : ALL, TATE, [Chau];
        "ちまう" => "" : ALL, TATE, [Chau];
        "とく" => "" : ALL, TATE, [Toku];
        "ておく" => "" : ALL, TATE, [Toku];
        "ている" => "" : ALL, TATE, [Continuous];
        "ておる" => "" : ALL, TATE, [Continuous];
        "てる" => "" : ALL, TATE, [Continuous];
        "とる" => "" : ALL, TATE, [Continuous];
        "だ" => "" : ALL, DADE, [Past];
        "で" => "" : ALL, DADE, [Te];
        "だら" => "" : ALL, DADE, [Tara];
        "だり" => "" : ALL, DADE, [Tari];
        "じゃう" => "" : ALL, DADE, [Chau];
        "じまう" => "" : ALL, DADE, [Chau];
        "どく" => "" : ALL, DADE, [Toku];
        "でおく" => "" : ALL, DADE, [Toku];
        "でいる" => "" : ALL, DADE, [Continuous];
        "でおる" => "" : ALL, DADE, [Continuous];
        "でる" => "" : ALL, DADE, [Continuous];
        "どる" => "" : ALL, DADE, [Continuous];
    ];

    // ta/te-stem recovery
    add_rules![rules,
        "っ" => "う" : TATE, V5, [];
        "っ" => "つ" : TATE, V5, [];
        "っ" => "る" : TATE, V5, [];
        "い" => "く" : TATE, V5, [];
        "し" => "す" : TATE, V5, [];
        "し" => "する" : TATE, VS, [];
        "き" => "くる" : TATE, VK, [];
        "じ" => "ずる" : TATE, VZ, [];
        "為" => "為る" : TATE, VS, [];
        // 行く and its kana form geminate irregularly
        "行っ" => "行く" : TATE, V5, [];
        "いっ" => "いく" : TATE, V5, [];
        "い" => "ぐ" : DADE, V5, [];
        "ん" => "ぬ" : DADE, V5, [];
        "ん" => "ぶ" : DADE, V5, [];
        "ん" => "む" : DADE, V5, [];
        // 問う/請う and Kansai u-onbin keep the う
        "うた" => "う" : ALL, V5, [Past];
        "うて" => "う" : ALL, V5, [Te];
    ];

    // negative and the other irrealis-attached forms
    add_rules![rules,
        "ない" => "" : ALL, IRR, [Negative];
        "なかった" => "" : ALL, IRR, [Negative, Past];
        "なかったら" => "" : ALL, IRR, [Negative, Tara];
        "なくて" => "" : ALL, IRR, [Negative, Te];
        "ないで" => "" : ALL, IRR, [Negative, Te];
        "なければ" => "" : ALL, IRR, [Negative, Ba];
        "なけりゃ" => "" : ALL, IRR, [Negative, Ba];
        "なきゃ" => "" : ALL, IRR, [Negative, Ba];
        "なくちゃ" => "" : ALL, IRR, [Negative, Ba];
        "ず" => "" : ALL, IRR, [Zu];
        "ずに" => "" : ALL, IRR, [Zu];
        "ぬ" => "" : ALL, IRR, [Nu];
        "ん" => "" : ALL, IRR, [Negative];
        "ざる" => "" : ALL, IRR, [Zaru];
        "ねば" => "" : ALL, IRR, [Negative, Ba];
        "へん" => "" : ALL, IRR, [Negative, Kansai];
    ];

    // irrealis-stem recovery
    add_rules![rules,
        "わ" => "う" : IRR, V5, [];
        "か" => "く" : IRR, V5, [];
        "が" => "ぐ" : IRR, V5, [];
        "さ" => "す" : IRR, V5, [];
        "た" => "つ" : IRR, V5, [];
        "な" => "ぬ" : IRR, V5, [];
        "ば" => "ぶ" : IRR, V5, [];
        "ま" => "む" : IRR, V5, [];
        "ら" => "る" : IRR, V5, [];
        "し" => "する" : IRR, VS, [];
        "せ" => "する" : IRR, VS, [];
        "こ" => "くる" : IRR, VK, [];
        "じ" => "ずる" : IRR, VZ, [];
        "ぜ" => "ずる" : IRR, VZ, [];
        "為" => "為る" : IRR, VS, [];
    ];

    // potential, and the ichidan form ambiguous with passive; the
    // ambiguous られる rule stays ahead of the godan passive one so the
    // candidate carrying PotentialOrPassive is produced (and processed)
    // first, which the causative-passive fusion depends on
    add_rules![rules,
        "られる" => "る" : ALL, V1K, [PotentialOrPassive];
        "こられる" => "くる" : ALL, VK, [PotentialOrPassive];
        "える" => "う" : ALL, V5, [Potential];
        "ける" => "く" : ALL, V5, [Potential];
        "げる" => "ぐ" : ALL, V5, [Potential];
        "せる" => "す" : ALL, V5, [Potential];
        "てる" => "つ" : ALL, V5, [Potential];
        "ねる" => "ぬ" : ALL, V5, [Potential];
        "べる" => "ぶ" : ALL, V5, [Potential];
        "める" => "む" : ALL, V5, [Potential];
        "れる" => "る" : ALL, V5, [Potential];
        "れる" => "る" : ALL, V1K, [Potential];
        "これる" => "くる" : ALL, VK, [Potential];
    ];

    // passive
    add_rules![rules,
        "われる" => "う" : ALL, V5, [Passive];
        "かれる" => "く" : ALL, V5, [Passive];
        "がれる" => "ぐ" : ALL, V5, [Passive];
        "される" => "す" : ALL, V5, [Passive];
        "たれる" => "つ" : ALL, V5, [Passive];
        "なれる" => "ぬ" : ALL, V5, [Passive];
        "ばれる" => "ぶ" : ALL, V5, [Passive];
        "まれる" => "む" : ALL, V5, [Passive];
        "られる" => "る" : ALL, V5, [Passive];
        "される" => "する" : ALL, VS, [Passive];
        "ぜられる" => "ずる" : ALL, VZ, [Passive];
    ];

    // causative, long and short forms
    add_rules![rules,
        "わせる" => "う" : ALL, V5, [Causative];
        "かせる" => "く" : ALL, V5, [Causative];
        "がせる" => "ぐ" : ALL, V5, [Causative];
        "させる" => "す" : ALL, V5, [Causative];
        "たせる" => "つ" : ALL, V5, [Causative];
        "なせる" => "ぬ" : ALL, V5, [Causative];
        "ばせる" => "ぶ" : ALL, V5, [Causative];
        "ませる" => "む" : ALL, V5, [Causative];
        "らせる" => "る" : ALL, V5, [Causative];
        "させる" => "る" : ALL, V1K, [Causative];
        "させる" => "する" : ALL, VS, [Causative];
        "こさせる" => "くる" : ALL, VK, [Causative];
        "わす" => "う" : ALL, V5, [Causative];
        "かす" => "く" : ALL, V5, [Causative];
        "がす" => "ぐ" : ALL, V5, [Causative];
        "たす" => "つ" : ALL, V5, [Causative];
        "なす" => "ぬ" : ALL, V5, [Causative];
        "ばす" => "ぶ" : ALL, V5, [Causative];
        "ます" => "む" : ALL, V5, [Causative];
        "らす" => "る" : ALL, V5, [Causative];
        "さす" => "る" : ALL, V1K, [Causative];
        "さす" => "する" : ALL, VS, [Causative];
        "こさす" => "くる" : ALL, VK, [Causative];
    ];

    // fused short causative-passive
    add_rules![rules,
        "わされる" => "う" : ALL, V5, [CausativePassive];
        "かされる" => "く" : ALL, V5, [CausativePassive];
        "がされる" => "ぐ" : ALL, V5, [CausativePassive];
        "たされる" => "つ" : ALL, V5, [CausativePassive];
        "なされる" => "ぬ" : ALL, V5, [CausativePassive];
        "ばされる" => "ぶ" : ALL, V5, [CausativePassive];
        "まされる" => "む" : ALL, V5, [CausativePassive];
        "らされる" => "る" : ALL, V5, [CausativePassive];
    ];

    // volitional
    add_rules![rules,
        "おう" => "う" : ALL, V5, [Volitional];
        "こう" => "く" : ALL, V5, [Volitional];
        "ごう" => "ぐ" : ALL, V5, [Volitional];
        "そう" => "す" : ALL, V5, [Volitional];
        "とう" => "つ" : ALL, V5, [Volitional];
        "のう" => "ぬ" : ALL, V5, [Volitional];
        "ぼう" => "ぶ" : ALL, V5, [Volitional];
        "もう" => "む" : ALL, V5, [Volitional];
        "ろう" => "る" : ALL, V5, [Volitional];
        "よう" => "る" : ALL, V1K, [Volitional];
        "しよう" => "する" : ALL, VS, [Volitional];
        "こよう" => "くる" : ALL, VK, [Volitional];
        "かろう" => "い" : ALL, ADJ, [Volitional];
        "まい" => "" : VERB, VERB, [Negative, Volitional];
    ];

    // conditional
    add_rules![rules,
        "えば" => "う" : ALL, V5, [Ba];
        "けば" => "く" : ALL, V5, [Ba];
        "げば" => "ぐ" : ALL, V5, [Ba];
        "せば" => "す" : ALL, V5, [Ba];
        "てば" => "つ" : ALL, V5, [Ba];
        "ねば" => "ぬ" : ALL, V5, [Ba];
        "べば" => "ぶ" : ALL, V5, [Ba];
        "めば" => "む" : ALL, V5, [Ba];
        "れば" => "る" : ALL, V5, [Ba];
        "れば" => "る" : ALL, V1K, [Ba];
        "りゃ" => "る" : ALL, V5, [Ba];
        "りゃ" => "る" : ALL, V1K, [Ba];
        "くれば" => "くる" : ALL, VK, [Ba];
        "すれば" => "する" : ALL, VS, [Ba];
    ];

    // imperative
    add_rules![rules,
        "え" => "う" : ALL, V5, [Imperative];
        "け" => "く" : ALL, V5, [Imperative];
        "げ" => "ぐ" : ALL, V5, [Imperative];
        "せ" => "す" : ALL, V5, [Imperative];
        "て" => "つ" : ALL, V5, [Imperative];
        "ね" => "ぬ" : ALL, V5, [Imperative];
        "べ" => "ぶ" : ALL, V5, [Imperative];
        "め" => "む" : ALL, V5, [Imperative];
        "れ" => "る" : ALL, V5, [Imperative];
        "ろ" => "る" : ALL, V1, [Imperative];
        "よ" => "る" : ALL, V1, [Imperative];
        "こい" => "くる" : ALL, VK, [Imperative];
        "来い" => "来る" : ALL, VK, [Imperative];
        "しろ" => "する" : ALL, VS, [Imperative];
        "せよ" => "する" : ALL, VS, [Imperative];
        "な" => "" : VERB, VERB, [ImperativeNegative];
    ];

    // i-adjectives, rewritten directly back to the -i form
    add_rules![rules,
        "くない" => "い" : ALL, ADJ, [Negative];
        "くなかった" => "い" : ALL, ADJ, [Negative, Past];
        "くなかったら" => "い" : ALL, ADJ, [Negative, Tara];
        "くなくて" => "い" : ALL, ADJ, [Negative, Te];
        "くなければ" => "い" : ALL, ADJ, [Negative, Ba];
        "くなきゃ" => "い" : ALL, ADJ, [Negative, Ba];
        "く" => "い" : ALL, ADJ, [Adv];
        "くて" => "い" : ALL, ADJ, [Te];
        "かった" => "い" : ALL, ADJ, [Past];
        "かったら" => "い" : ALL, ADJ, [Tara];
        "かったり" => "い" : ALL, ADJ, [Tari];
        "ければ" => "い" : ALL, ADJ, [Ba];
        "けりゃ" => "い" : ALL, ADJ, [Ba];
        "さ" => "い" : ALL, ADJ, [Noun];
        "そう" => "い" : ALL, ADJ, [Sou];
        "すぎる" => "い" : ALL, ADJ, [Sugiru];
        "すぎ" => "い" : ALL, ADJ, [Sugiru];
        "き" => "い" : ALL, ADJ, [Ki];
        // bridge for the 〜くあります polite paradigm
        "くある" => "い" : ALL, ADJ, [];
        // slang e-row flattening
        "ねえ" => "ない" : ALL, ADJ, [];
        "ねぇ" => "ない" : ALL, ADJ, [];
        "ねー" => "ない" : ALL, ADJ, [];
        "てえ" => "たい" : ALL, ADJ, [];
        "てぇ" => "たい" : ALL, ADJ, [];
        "てー" => "たい" : ALL, ADJ, [];
    ];

    // noun + する stripped back to the noun
    add_rules![rules,
        "する" => "" : ALL, VN, [SuruVerb];
    ];

    rules
});

/// Rules grouped by their `from` ending for O(1) lookup during the
/// closure. Built once, validated on first use.
pub(crate) static RULE_INDEX: LazyLock<foldhash::HashMap<&'static str, Vec<&'static DeinflectRule>>> =
    LazyLock::new(|| {
        use foldhash::HashMapExt;

        let mut index = foldhash::HashMap::new();
        for rule in RULES.iter() {
            validate(rule);
            index
                .entry(rule.from)
                .or_insert_with(Vec::new)
                .push(rule);
        }
        tracing::debug!(
            rules = RULES.len(),
            endings = index.len(),
            "built deinflection rule index"
        );
        index
    });

fn validate(rule: &DeinflectRule) {
    assert!(
        !rule.from.is_empty(),
        "rule to {:?} has an empty ending",
        rule.to
    );
    assert!(
        rule.from.chars().count() <= MAX_ENDING_LEN,
        "rule {:?} exceeds the maximum ending length",
        rule.from
    );
    assert!(
        !rule.from_type.is_empty() && !rule.to_type.is_empty(),
        "rule {:?} -> {:?} has an empty type mask",
        rule.from,
        rule.to
    );
    assert!(
        rule.from != rule.to || rule.from_type != rule.to_type,
        "rule {:?} maps a word onto itself",
        rule.from
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        // force the index (and with it, per-rule validation)
        assert!(!RULE_INDEX.is_empty());
        assert!(RULES.len() > 200);
    }

    #[test]
    fn endings_are_unique_per_target() {
        // no (from, to, from_type, to_type) tuple may appear twice
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert!(
                    !(a.from == b.from
                        && a.to == b.to
                        && a.from_type == b.from_type
                        && a.to_type == b.to_type),
                    "duplicate rule {:?} -> {:?}",
                    a.from,
                    a.to
                );
            }
        }
    }

    #[test]
    fn stem_rules_stay_within_scan_range() {
        for rule in RULES.iter() {
            assert!(rule.from.chars().count() <= MAX_ENDING_LEN);
        }
    }

    #[test]
    fn polite_past_is_indexed() {
        let rules = &RULE_INDEX["ました"];
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].to, "");
        assert_eq!(rules[0].to_type, WordType::MASU_STEM);
        assert_eq!(rules[0].reasons, &[Reason::PolitePast]);
    }
}
