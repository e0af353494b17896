//! Assemble a dashed ISBN-10 from its numbering components

use crate::domain::IsbnError;
use crate::models::NumberingComponents;
use crate::services::check_digit;

/// Build `group-publisher-title-check` from the three digit strings.
///
/// The check character is computed over the raw concatenation; any
/// failure from [`check_digit::compute`] is returned unchanged.
pub fn build(group: &str, publisher: &str, title: &str) -> Result<String, IsbnError> {
    build_from(&NumberingComponents::new(group, publisher, title))
}

pub fn build_from(components: &NumberingComponents) -> Result<String, IsbnError> {
    let check = check_digit::compute(&components.concatenated())?;
    Ok(components.format_with(check))
}
