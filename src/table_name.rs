//! Validation of the table names accepted by mutation commands.

use alloc::string::ToString;

use crate::errors::Error;

/// Check if a byte can appear in a table name.
fn is_table_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns whether `name` is a valid mutation target: non-empty and made only
/// of ASCII letters, digits and underscores.
///
/// # Example
///
/// ```
/// use command_text::is_valid_table_name;
///
/// assert!(is_valid_table_name("Singers_2024"));
/// assert!(!is_valid_table_name("bad-name!"));
/// assert!(!is_valid_table_name(""));
/// ```
#[must_use]
pub fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_table_name_byte)
}

/// Validates `name`, returning it unchanged on success.
///
/// # Errors
///
/// * `InvalidTableName` - If [`is_valid_table_name`] rejects the name.
pub(crate) fn validate_table_name(name: &str) -> Result<&str, Error> {
    if is_valid_table_name(name) {
        Ok(name)
    } else {
        Err(Error::InvalidTableName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["users", "my_table", "_private", "T", "42", "Albums_v2"] {
            assert!(is_valid_table_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "bad-name!", "a b", "db.users", "\"quoted\"", "tablé", "t;"] {
            assert!(!is_valid_table_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_validate_names_offender() {
        assert_eq!(validate_table_name("users"), Ok("users"));
        assert_eq!(
            validate_table_name("db.users"),
            Err(Error::InvalidTableName("db.users".into()))
        );
    }
}
