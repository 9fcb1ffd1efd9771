//! Japanese-script helpers shared by the tokenizer engine.

use std::borrow::Cow;

const HIRAGANA_START: char = '\u{3040}';
const HIRAGANA_END: char = '\u{309F}';
const KATAKANA_START: char = '\u{30A0}';
const KATAKANA_END: char = '\u{30FF}';
const KATA_SHIFTABLE_START: char = '\u{30A1}';
const KATA_SHIFTABLE_END: char = '\u{30F6}';
const KATA_TO_HIRA_SHIFT: u32 = 0x60;

/// Whether `c` falls in the hiragana block.
///
/// The block includes the archaic kana (`ゐ`, `ゑ`) and the iteration
/// marks, not just the modern syllabary.
///
/// # Examples
///
/// ```
/// # use wakachi_api::jpn::is_hiragana;
/// assert!(is_hiragana('ね'));
/// assert!(is_hiragana('ゑ'));
/// assert!(!is_hiragana('ネ'));
/// assert!(!is_hiragana('字'));
/// ```
#[must_use]
pub const fn is_hiragana(c: char) -> bool {
    HIRAGANA_START <= c && c <= HIRAGANA_END
}

/// Whether `c` falls in the katakana block, long-vowel mark included.
///
/// # Examples
///
/// ```
/// # use wakachi_api::jpn::is_katakana;
/// assert!(is_katakana('ヴ'));
/// assert!(is_katakana('ー'));
/// assert!(!is_katakana('ゔ'));
/// assert!(!is_katakana('3'));
/// ```
#[must_use]
pub const fn is_katakana(c: char) -> bool {
    KATAKANA_START <= c && c <= KATAKANA_END
}

/// Whether `c` is kana of either syllabary.
///
/// # Examples
///
/// ```
/// # use wakachi_api::jpn::is_kana;
/// assert!(is_kana('を'));
/// assert!(is_kana('ソ'));
/// assert!(!is_kana('n'));
/// assert!(!is_kana('。'));
/// ```
#[must_use]
pub const fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Folds a single katakana character to hiragana.
///
/// The long-vowel mark `ー` and anything outside the shiftable katakana
/// block are returned unchanged. The archaic voiced forms `ヷヸヹヺ`
/// fold to their plain hiragana counterparts `わゐゑを`.
#[must_use]
pub fn kata_to_hira(c: char) -> char {
    match c {
        KATA_SHIFTABLE_START..=KATA_SHIFTABLE_END => {
            char::from_u32(c as u32 - KATA_TO_HIRA_SHIFT).unwrap_or(c)
        }
        'ヷ' => 'わ',
        'ヸ' => 'ゐ',
        'ヹ' => 'ゑ',
        'ヺ' => 'を',
        _ => c,
    }
}

/// Folds every katakana character in `text` to hiragana.
///
/// Borrows the input unchanged when there is nothing to fold, which is
/// the common case on already-hiragana lookup keys.
///
/// # Examples
///
/// ```
/// # use wakachi_api::jpn::kana_to_hiragana;
/// assert_eq!(kana_to_hiragana("タンパク"), "たんぱく");
/// assert_eq!(kana_to_hiragana("ケーキ"), "けーき");
/// assert_eq!(kana_to_hiragana("食べる"), "食べる");
/// ```
#[must_use]
pub fn kana_to_hiragana(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| kata_to_hira(c) == c) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().map(kata_to_hira).collect())
    }
}

/// Checks if `text` ends in a yoon digraph: a palatalizable i-row kana
/// followed by small `ゃ`, `ゅ` or `ょ`.
///
/// The word-search loop uses this to shorten its probe by two code
/// units instead of one, so a digraph is never split down the middle.
///
/// # Examples
///
/// ```
/// # use wakachi_api::jpn::ends_in_yoon;
/// assert!(ends_in_yoon("きゃ"));
/// assert!(ends_in_yoon("でんしゃ"));
/// assert!(!ends_in_yoon("かあ"));
/// assert!(!ends_in_yoon("ゃ"));
/// ```
#[must_use]
pub fn ends_in_yoon(text: &str) -> bool {
    let mut rev = text.chars().rev();
    let (Some(last), Some(prev)) = (rev.next(), rev.next()) else {
        return false;
    };
    matches!(last, 'ゃ' | 'ゅ' | 'ょ')
        && matches!(
            prev,
            'き' | 'し' | 'ち' | 'に' | 'ひ' | 'み' | 'り' | 'ぎ' | 'じ' | 'び' | 'ぴ'
        )
}
