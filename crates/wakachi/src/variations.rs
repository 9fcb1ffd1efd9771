//! Lookup-key variations: long-vowel-mark expansion and old-form kanji
//! substitution.

use std::{borrow::Cow, sync::LazyLock};

const CHOON: char = 'ー';

/// The five vowels a long-vowel mark may stand for in a hiragana-folded
/// lookup key.
const CHOON_VOWELS: [char; 5] = ['あ', 'い', 'う', 'え', 'お'];

/// Old (pre-1946) kanji forms and their modern replacements.
///
/// Covers the common single-character substitutions; rarer forms miss
/// the variation and simply fail the dictionary probe.
#[rustfmt::skip]
const KYUUJITAI: [(char, char); 65] = [
    ('亞', '亜'), ('惡', '悪'), ('壓', '圧'), ('圍', '囲'), ('醫', '医'),
    ('飮', '飲'), ('隱', '隠'), ('榮', '栄'), ('營', '営'), ('驛', '駅'),
    ('圓', '円'), ('鹽', '塩'), ('應', '応'), ('歐', '欧'), ('櫻', '桜'),
    ('假', '仮'), ('會', '会'), ('繪', '絵'), ('擴', '拡'), ('學', '学'),
    ('樂', '楽'), ('觀', '観'), ('氣', '気'), ('歸', '帰'), ('舊', '旧'),
    ('擧', '挙'), ('區', '区'), ('經', '経'), ('輕', '軽'), ('縣', '県'),
    ('檢', '検'), ('權', '権'), ('廣', '広'), ('號', '号'), ('國', '国'),
    ('濟', '済'), ('雜', '雑'), ('參', '参'), ('殘', '残'), ('齒', '歯'),
    ('兒', '児'), ('實', '実'), ('寫', '写'), ('壽', '寿'), ('收', '収'),
    ('從', '従'), ('處', '処'), ('條', '条'), ('狀', '状'), ('讓', '譲'),
    ('眞', '真'), ('圖', '図'), ('數', '数'), ('聲', '声'), ('戰', '戦'),
    ('總', '総'), ('藏', '蔵'), ('對', '対'), ('臺', '台'), ('澤', '沢'),
    ('單', '単'), ('團', '団'), ('斷', '断'), ('廳', '庁'), ('鐵', '鉄'),
];

/// Continuation of [`KYUUJITAI`].
#[rustfmt::skip]
const KYUUJITAI_TAIL: [(char, char); 40] = [
    ('轉', '転'), ('點', '点'), ('傳', '伝'), ('黨', '党'), ('當', '当'),
    ('鬪', '闘'), ('德', '徳'), ('獨', '独'), ('讀', '読'), ('腦', '脳'),
    ('廢', '廃'), ('拜', '拝'), ('賣', '売'), ('發', '発'), ('髮', '髪'),
    ('拔', '抜'), ('佛', '仏'), ('變', '変'), ('邊', '辺'), ('辨', '弁'),
    ('寶', '宝'), ('豐', '豊'), ('滿', '満'), ('藥', '薬'), ('譯', '訳'),
    ('豫', '予'), ('餘', '余'), ('與', '与'), ('譽', '誉'), ('樣', '様'),
    ('來', '来'), ('賴', '頼'), ('亂', '乱'), ('覽', '覧'), ('兩', '両'),
    ('禮', '礼'), ('靈', '霊'), ('齡', '齢'), ('戀', '恋'), ('體', '体'),
];

static KYUUJITAI_MAP: LazyLock<foldhash::HashMap<char, char>> = LazyLock::new(|| {
    KYUUJITAI
        .into_iter()
        .chain(KYUUJITAI_TAIL)
        .collect()
});

/// Expands the first long-vowel mark `ー` in `text` into its five
/// possible hiragana vowels.
///
/// Returns an empty list if `text` contains no mark. Only the first
/// occurrence is expanded; the word-search loop re-enters with the
/// refined text, so later marks are expanded on later probes.
///
/// # Examples
///
/// ```
/// # use wakachi::expand_choon;
/// assert_eq!(
///     expand_choon("ラーメン"),
///     ["ラあメン", "ラいメン", "ラうメン", "ラえメン", "ラおメン"]
/// );
/// assert!(expand_choon("ラメン").is_empty());
/// ```
#[must_use]
pub fn expand_choon(text: &str) -> Vec<String> {
    let Some(mark) = text.find(CHOON) else {
        return Vec::new();
    };
    let (head, tail) = text.split_at(mark);
    let tail = &tail[CHOON.len_utf8()..];

    CHOON_VOWELS
        .iter()
        .map(|vowel| {
            let mut variant = String::with_capacity(text.len());
            variant.push_str(head);
            variant.push(*vowel);
            variant.push_str(tail);
            variant
        })
        .collect()
}

/// Replaces every old-form kanji in `text` with its modern form.
///
/// Borrows the input unchanged when no substitution applies.
///
/// # Examples
///
/// ```
/// # use wakachi::kyuujitai_to_shinjitai;
/// assert_eq!(kyuujitai_to_shinjitai("舊體國"), "旧体国");
/// assert_eq!(kyuujitai_to_shinjitai("学生"), "学生");
/// ```
#[must_use]
pub fn kyuujitai_to_shinjitai(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| KYUUJITAI_MAP.contains_key(&c)) {
        Cow::Owned(
            text.chars()
                .map(|c| KYUUJITAI_MAP.get(&c).copied().unwrap_or(c))
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choon_expands_first_mark_only() {
        let variants = expand_choon("スーパー");
        assert_eq!(variants.len(), 5);
        assert_eq!(variants[2], "スうパー");
        // all five are distinct
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn kyuujitai_keeps_unmapped_text_borrowed() {
        assert!(matches!(
            kyuujitai_to_shinjitai("食べる"),
            Cow::Borrowed(_)
        ));
        assert!(matches!(kyuujitai_to_shinjitai("體"), Cow::Owned(_)));
    }

    #[test]
    fn kyuujitai_maps_kuru() {
        // 來る reaches 来る so old-form verbs still deinflect
        assert_eq!(kyuujitai_to_shinjitai("來る"), "来る");
    }
}
