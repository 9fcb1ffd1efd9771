#![doc = include_str!("../README.md")]

pub mod jpn;

mod entry;
mod reason;
mod token;
mod word_type;

pub use {
    entry::{EntryId, Gloss, KanaReading, KanjiReading, Sense, WordEntry},
    reason::Reason,
    token::{CandidateWord, Token, WordResult},
    word_type::WordType,
};
