//! Input canonicalization with a UTF-16 offset map back into the
//! original text.
//!
//! Matching runs over the normalized form, but tokens must report spans
//! in the original input's UTF-16 code-unit indexing. The offset map is
//! the lossless bridge: entry `i` is the original offset of normalized
//! code unit `i`, with one trailing sentinel entry past the end.

use unicode_normalization::{UnicodeNormalization, char::canonical_combining_class};

const ZWNJ: char = '\u{200C}';

/// Options for [`normalize_with`].
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Fold ASCII digits `0-9` to their full-width counterparts
    /// `０-９` before composition.
    pub full_width_digits: bool,
    /// Remove every zero-width non-joiner (U+200C).
    pub strip_zwnj: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            full_width_digits: true,
            strip_zwnj: true,
        }
    }
}

/// Normalizes `input` with the default options.
///
/// Returns the normalized text and its offset map. The map has one
/// entry per UTF-16 code unit of the normalized text plus a final
/// sentinel; entry `i` is the corresponding UTF-16 offset in the
/// original input. Both units of a surrogate pair map to the start
/// offset of their code point.
#[must_use]
pub fn normalize(input: &str) -> (String, Vec<usize>) {
    normalize_with(input, NormalizeOptions::default())
}

/// Normalizes `input`: optional digit width folding, NFC composition,
/// optional ZWNJ stripping.
#[must_use]
pub fn normalize_with(input: &str, options: NormalizeOptions) -> (String, Vec<usize>) {
    let folded = if options.full_width_digits {
        fold_digits(input)
    } else {
        input.to_owned()
    };

    let (mut text, mut offset_map) = nfc_with_offsets(&folded);

    if options.strip_zwnj && text.contains(ZWNJ) {
        (text, offset_map) = strip_zwnj(&text, &offset_map);
    }

    (text, offset_map)
}

/// Maps each ASCII digit to its full-width counterpart.
///
/// Length-preserving in UTF-16 code units, so offsets into the folded
/// string are valid offsets into the true original.
fn fold_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '0'..='9' => {
                let offset = c as u32 - '0' as u32;
                char::from_u32('０' as u32 + offset).unwrap_or(c)
            }
            c => c,
        })
        .collect()
}

/// NFC-composes `folded` while building the offset map.
///
/// The input is processed in canonical segments (a starter followed by
/// its combining characters), each composed independently. A segment
/// the composition leaves unchanged maps unit-for-unit; a segment it
/// rewrites maps every output unit to the segment's start offset.
fn nfc_with_offsets(folded: &str) -> (String, Vec<usize>) {
    let mut text = String::with_capacity(folded.len());
    let mut offset_map = Vec::with_capacity(folded.len());

    let mut segment_start_byte = 0;
    let mut segment_start_u16 = 0;
    let mut offset_u16 = 0;
    for (byte_index, c) in folded.char_indices() {
        if byte_index > segment_start_byte && canonical_combining_class(c) == 0 {
            push_segment(
                &folded[segment_start_byte..byte_index],
                segment_start_u16,
                &mut text,
                &mut offset_map,
            );
            segment_start_byte = byte_index;
            segment_start_u16 = offset_u16;
        }
        offset_u16 += c.len_utf16();
    }
    if segment_start_byte < folded.len() {
        push_segment(
            &folded[segment_start_byte..],
            segment_start_u16,
            &mut text,
            &mut offset_map,
        );
    }

    // sentinel: one past the last original code unit
    offset_map.push(offset_u16);
    (text, offset_map)
}

fn push_segment(segment: &str, start_u16: usize, text: &mut String, offset_map: &mut Vec<usize>) {
    let composed = segment.nfc().collect::<String>();
    if composed == segment {
        let mut offset = start_u16;
        for c in segment.chars() {
            for _ in 0..c.len_utf16() {
                offset_map.push(offset);
            }
            offset += c.len_utf16();
        }
        text.push_str(segment);
    } else {
        for _ in 0..len_utf16(&composed) {
            offset_map.push(start_u16);
        }
        text.push_str(&composed);
    }
}

/// Removes every ZWNJ, keeping the surviving units' original offsets.
///
/// The rebuilt sentinel is the original offset just past the last kept
/// code unit, which differs from the old sentinel when the input ended
/// in a ZWNJ.
fn strip_zwnj(text: &str, offset_map: &[usize]) -> (String, Vec<usize>) {
    let mut out = String::with_capacity(text.len());
    let mut map = Vec::with_capacity(offset_map.len());
    let mut sentinel = 0;

    let mut unit = 0;
    for c in text.chars() {
        let width = c.len_utf16();
        if c != ZWNJ {
            out.push(c);
            map.extend_from_slice(&offset_map[unit..unit + width]);
            sentinel = offset_map[unit] + width;
        }
        unit += width;
    }

    map.push(sentinel);
    (out, map)
}

fn len_utf16(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_map_shape(input: &str) {
        let (text, map) = normalize(input);
        assert_eq!(
            map.len(),
            len_utf16(&text) + 1,
            "map length for {input:?} is not normalized length + 1"
        );
        for pair in map.windows(2) {
            assert!(pair[0] <= pair[1], "offset map for {input:?} not monotone");
        }
    }

    #[test]
    fn identity_on_plain_text() {
        let (text, map) = normalize("私は学生です");
        assert_eq!(text, "私は学生です");
        assert_eq!(map, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn digits_fold_to_full_width() {
        let (text, map) = normalize("12時");
        assert_eq!(text, "１２時");
        assert_eq!(map, [0, 1, 2, 3]);

        let (text, _) = normalize_with(
            "12時",
            NormalizeOptions {
                full_width_digits: false,
                strip_zwnj: true,
            },
        );
        assert_eq!(text, "12時");
    }

    #[test]
    fn decomposed_kana_composes() {
        // か + combining dakuten composes to が, shrinking the text by
        // one unit; offsets after the composition still point at the
        // original positions
        let input = "か\u{3099}き";
        let (text, map) = normalize(input);
        assert_eq!(text, "がき");
        assert_eq!(map, [0, 2, 3]);
        assert_map_shape(input);
    }

    #[test]
    fn zwnj_is_stripped() {
        let input = "あ\u{200C}い";
        let (text, map) = normalize(input);
        assert_eq!(text, "あい");
        assert_eq!(map, [0, 2, 3]);

        let (kept, map_kept) = normalize_with(
            input,
            NormalizeOptions {
                full_width_digits: true,
                strip_zwnj: false,
            },
        );
        assert_eq!(kept, input);
        assert_eq!(map_kept, [0, 1, 2, 3]);
    }

    #[test]
    fn trailing_zwnj_moves_the_sentinel() {
        let (text, map) = normalize("あい\u{200C}");
        assert_eq!(text, "あい");
        assert_eq!(map, [0, 1, 2]);
    }

    #[test]
    fn surrogate_pairs_share_an_offset() {
        // 𠮟 is outside the BMP: two UTF-16 units, one offset
        let (text, map) = normalize("𠮟る");
        assert_eq!(text, "𠮟る");
        assert_eq!(map, [0, 0, 2, 3]);
    }

    #[test]
    fn empty_input() {
        let (text, map) = normalize("");
        assert_eq!(text, "");
        assert_eq!(map, [0]);
    }

    #[test]
    fn map_shape_holds_across_inputs() {
        for input in ["", "abc", "食べました", "12か\u{3099}\u{200C}x", "𠮟責"] {
            assert_map_shape(input);
        }
    }
}
