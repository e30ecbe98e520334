//! Note validation
//!
//! The details screen only offers its save action for drafts this module
//! accepts; everything else surfaces a transient "not valid" message.

/// Check whether a (title, body) draft is acceptable for saving.
///
/// Both fields must contain something other than whitespace.
#[must_use]
pub fn is_valid_note(title: &str, body: &str) -> bool {
    !title.trim().is_empty() && !body.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_title_and_body() {
        assert!(is_valid_note("Groceries", "Milk, eggs"));
    }

    #[test]
    fn rejects_empty_draft() {
        assert!(!is_valid_note("", ""));
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        assert!(!is_valid_note("   ", "Milk, eggs"));
        assert!(!is_valid_note("Groceries", " \n\t"));
    }

    #[test]
    fn accepts_fields_with_surrounding_whitespace() {
        assert!(is_valid_note("  Groceries ", " Milk, eggs\n"));
    }
}
