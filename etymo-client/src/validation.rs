use common_libs::error::{FormError, FormErrorKind, FormResult};
use serde::Serialize;

use crate::constants::INVALID_WORD_MESSAGE;

/// `^[A-Za-z]+$`
pub fn is_valid_word(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    input.chars().all(|c| c.is_ascii_alphabetic())
}

/// A word that passed client side validation. Case and length are kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word(String);

impl Word {
    pub fn parse(input: &str) -> FormResult<Word> {
        if is_valid_word(input) {
            Ok(Word(input.to_string()))
        } else {
            Err(FormError::throw(INVALID_WORD_MESSAGE, FormErrorKind::InvalidInput))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
