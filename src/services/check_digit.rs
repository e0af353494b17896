//! Check character computation for a nine-digit prefix

use crate::domain::IsbnError;
use crate::models::IsbnPrefix;

/// Compute the trailing check character for a raw 9-digit prefix.
///
/// Returns `X` when the remainder is 10. Fails with `WrongLength` when the
/// prefix is not 9 characters, otherwise with `InvalidCharacter` at the
/// first non-digit.
pub fn compute(prefix: &str) -> Result<char, IsbnError> {
    Ok(IsbnPrefix::parse(prefix)?.check_digit())
}
