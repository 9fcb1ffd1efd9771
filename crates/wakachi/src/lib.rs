#![doc = include_str!("../README.md")]

mod deinflect;
mod dictionary;
mod match_type;
mod normalize;
mod search;
mod sort;
mod tokenize;
mod variations;

pub use wakachi_api as api;
pub use {
    deinflect::deinflect,
    dictionary::{Dictionary, MAX_LOOKUP_LEN, MemoryDictionary},
    match_type::entry_matches_type,
    normalize::{NormalizeOptions, normalize, normalize_with},
    search::{WORD_SEARCH_MAX_RESULTS, WordSearchResult, word_search},
    tokenize::{TOKENIZE_MAX_RESULTS, tokenize, tokenize_with},
    variations::{expand_choon, kyuujitai_to_shinjitai},
};
