//! Request building: input validation and URL templating.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::{ClientConfig, RequestMethod};
use crate::error::LookupError;

/// Longest word the server will split.
pub const MAX_WORD_CHARS: usize = 64;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Identifies one submission, so late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// An HTTP call the UI shell should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: RequestId,
    pub method: RequestMethod,
    pub path: String,
}

/// Check a word the same way the server does: 1 to 64 characters, all letters.
pub fn validate_word(word: &str) -> Result<&str, LookupError> {
    let count = word.chars().count();
    if count == 0 || count > MAX_WORD_CHARS || !word.chars().all(char::is_alphabetic) {
        return Err(LookupError::InvalidWord(word.to_string()));
    }
    Ok(word)
}

fn encode_segment(word: &str) -> String {
    utf8_percent_encode(word, SEGMENT).to_string()
}

/// `/split/<word>` with the word encoded as one path segment.
pub fn split_path(config: &ClientConfig, word: &str) -> String {
    format!("{}{}", config.split_path, encode_segment(word))
}

/// External dictionary page for a word.
pub fn dictionary_link(config: &ClientConfig, word: &str) -> String {
    format!("{}{}", config.dictionary_url, encode_segment(word))
}
