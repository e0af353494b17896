use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::IsbnError;
use crate::services::validator;

pub const PREFIX_LENGTH: usize = 9;
pub const ISBN_LENGTH: usize = 10;

/// Nine decimal digits awaiting a check character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsbnPrefix {
    digits: [u32; PREFIX_LENGTH],
}

impl IsbnPrefix {
    /// Parse a raw prefix, checking length before characters
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        if raw.chars().count() != PREFIX_LENGTH {
            return Err(IsbnError::WrongLength);
        }

        let mut digits = [0; PREFIX_LENGTH];
        for (slot, c) in digits.iter_mut().zip(raw.chars()) {
            *slot = c.to_digit(10).ok_or(IsbnError::InvalidCharacter)?;
        }

        Ok(Self { digits })
    }

    /// Σ(digit_i × i) for i = 1..9
    pub fn weighted_sum(&self) -> u32 {
        self.digits.iter().zip(1..).map(|(d, i)| d * i).sum()
    }

    /// Character that makes the full ten-position sum divisible by 11
    pub fn check_digit(&self) -> char {
        match self.weighted_sum() % 11 {
            10 => 'X',
            remainder => char::from(b'0' + remainder as u8),
        }
    }
}

/// A complete, checksum-valid ISBN-10
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isbn10(String);

impl Isbn10 {
    /// `Some` only when the candidate passes validation
    pub fn parse(raw: &str) -> Option<Self> {
        validator::validate(raw).then(|| Self(raw.to_string()))
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Group, publisher and title numbers, in that order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingComponents {
    pub group: String,
    pub publisher: String,
    pub title: String,
}

impl NumberingComponents {
    pub fn new(
        group: impl Into<String>,
        publisher: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            publisher: publisher.into(),
            title: title.into(),
        }
    }

    /// Raw prefix candidate, no separators
    pub fn concatenated(&self) -> String {
        format!("{}{}{}", self.group, self.publisher, self.title)
    }

    /// Four-group dashed form
    pub fn format_with(&self, check_digit: char) -> String {
        format!(
            "{}-{}-{}-{}",
            self.group, self.publisher, self.title, check_digit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_parse() {
        let prefix = IsbnPrefix::parse("392847532").unwrap();
        assert_eq!(prefix.check_digit(), '0');
        assert_eq!(prefix.weighted_sum(), 3 + 18 + 6 + 32 + 20 + 42 + 35 + 24 + 18);
    }

    #[test]
    fn test_prefix_length_checked_before_characters() {
        assert_eq!(IsbnPrefix::parse("ab"), Err(IsbnError::WrongLength));
        assert_eq!(IsbnPrefix::parse(""), Err(IsbnError::WrongLength));
        assert_eq!(IsbnPrefix::parse("12345678X"), Err(IsbnError::InvalidCharacter));
    }

    #[test]
    fn test_isbn10_parse() {
        let isbn = Isbn10::parse("3551551677").expect("valid isbn");
        assert_eq!(isbn.to_string(), "3551551677");

        // 0-8044-2957-X
        assert!(Isbn10::parse("080442957X").is_some());
    }

    #[test]
    fn test_isbn10_rejects_invalid() {
        assert!(Isbn10::parse("3551551678").is_none());
        assert!(Isbn10::parse("355155167").is_none());
        assert!(Isbn10::parse("080442957x").is_none());
    }

    #[test]
    fn test_components_formatting() {
        let components = NumberingComponents::new("3", "9284", "7532");
        assert_eq!(components.concatenated(), "392847532");
        assert_eq!(components.format_with('0'), "3-9284-7532-0");
    }
}
