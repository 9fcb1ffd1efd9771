//! The top-level tokenizer: drive the word search left to right across
//! a full input string.

use {
    crate::{dictionary::Dictionary, normalize::normalize, search::word_search},
    tracing::warn,
    wakachi_api::Token,
};

/// Default result cap per search position while tokenizing. Wider than
/// the standalone word-search default, which helps the longest-match
/// selection.
pub const TOKENIZE_MAX_RESULTS: usize = 12;

/// Tokenizes `text` with the default result cap.
///
/// Every position of the input is covered by exactly one token, in
/// order. Runs the dictionary cannot resolve come out as consecutive
/// single-code-point tokens with no entry; resolved words carry their
/// best-ranked entry and, for inflected surface forms, the
/// deinflection reason chains.
///
/// Token offsets are UTF-16 code unit positions into `text` exactly as
/// given, so they line up with the indexing used by editors and
/// annotation formats.
///
/// A dictionary failure mid-input degrades to an untagged token and
/// the search continues; only the failing position is affected.
pub fn tokenize<D: Dictionary + ?Sized>(text: &str, dict: &D) -> Vec<Token> {
    tokenize_with(text, dict, TOKENIZE_MAX_RESULTS)
}

/// Tokenizes `text`, keeping up to `max_results` candidate matches per
/// position before picking the best.
pub fn tokenize_with<D: Dictionary + ?Sized>(
    text: &str,
    dict: &D,
    max_results: usize,
) -> Vec<Token> {
    let (norm, offset_map) = normalize(text);

    let mut tokens = Vec::new();
    let mut byte_pos = 0;
    let mut u16_pos = 0;

    while byte_pos < norm.len() {
        let suffix = &norm[byte_pos..];
        let result = match word_search(dict, suffix, &offset_map[u16_pos..], max_results) {
            Ok(result) => result,
            Err(err) => {
                warn!("dictionary failed at offset {}: {err:#}", offset_map[u16_pos]);
                None
            }
        };

        let start = offset_map[u16_pos];
        if let Some(best) = result.and_then(|found| found.data.into_iter().next()) {
            let end = start + best.match_len;
            tokens.push(Token {
                text: slice_utf16(text, start, end).to_owned(),
                start,
                end,
                entry: Some(best.entry),
                reasons: best.reason_chains,
            });

            // consume the normalized equivalent of the matched span
            let mut bytes = 0;
            let mut units = 0;
            for c in suffix.chars() {
                if offset_map[u16_pos + units] >= end {
                    break;
                }
                bytes += c.len_utf8();
                units += c.len_utf16();
            }
            if units == 0 {
                // a zero-length advance would stall the loop
                advance_one(suffix, &mut bytes, &mut units);
            }
            byte_pos += bytes;
            u16_pos += units;
        } else {
            let mut bytes = 0;
            let mut units = 0;
            advance_one(suffix, &mut bytes, &mut units);
            let end = offset_map[u16_pos + units];
            tokens.push(Token {
                text: slice_utf16(text, start, end).to_owned(),
                start,
                end,
                entry: None,
                reasons: None,
            });
            byte_pos += bytes;
            u16_pos += units;
        }
    }

    tokens
}

fn advance_one(suffix: &str, bytes: &mut usize, units: &mut usize) {
    if let Some(c) = suffix.chars().next() {
        *bytes = c.len_utf8();
        *units = c.len_utf16();
    }
}

/// Slices `text` by UTF-16 code unit offsets, clamping to the string.
fn slice_utf16(text: &str, start: usize, end: usize) -> &str {
    let mut byte_start = text.len();
    let mut byte_end = text.len();
    let mut unit = 0;

    for (byte_index, c) in text.char_indices() {
        if unit >= end {
            byte_end = byte_index;
            break;
        }
        if unit < start {
            byte_start = byte_index + c.len_utf8();
        } else if unit == start {
            byte_start = byte_index;
        }
        unit += c.len_utf16();
    }
    if byte_start > byte_end {
        byte_start = byte_end;
    }

    &text[byte_start..byte_end]
}
