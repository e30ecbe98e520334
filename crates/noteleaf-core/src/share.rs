//! Share message rendering

/// Build the plain-text share message for a note.
#[must_use]
pub fn share_message(title: &str, body: &str) -> String {
    format!("Title: {title}\n\nNote: {body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn share_message_uses_template() {
        assert_eq!(
            share_message("Groceries", "Milk, eggs"),
            "Title: Groceries\n\nNote: Milk, eggs"
        );
    }

    #[test]
    fn share_message_keeps_multiline_body() {
        let message = share_message("List", "one\ntwo");
        assert!(message.ends_with("Note: one\ntwo"));
    }
}
