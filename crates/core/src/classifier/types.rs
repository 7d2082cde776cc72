use serde::{Deserialize, Serialize};

/// The assistant's classification verdict: a primary/secondary category
/// pair, parsed from the final message's text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Verdict {
    pub primary: String,
    pub secondary: String,
}

/// The tags written back to a ticket after a successful classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedTags {
    pub ticket_id: String,
    pub tags: [String; 2],
}

/// Replace spaces with underscores to produce a tag-safe token.
/// Helpdesk tag fields disallow embedded spaces.
pub fn sanitize_tag(category: &str) -> String {
    category.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_spaces() {
        assert_eq!(sanitize_tag("Billing Issue"), "Billing_Issue");
        assert_eq!(sanitize_tag("Account Access"), "Account_Access");
    }

    #[test]
    fn test_sanitize_leaves_clean_tokens() {
        assert_eq!(sanitize_tag("refund"), "refund");
        assert_eq!(sanitize_tag("Password_Reset"), "Password_Reset");
    }

    #[test]
    fn test_sanitize_multiple_spaces() {
        assert_eq!(sanitize_tag("a b c"), "a_b_c");
    }

    #[test]
    fn test_verdict_parsing() {
        let verdict: Verdict =
            serde_json::from_str(r#"{"primary":"Account Access","secondary":"Password Reset"}"#)
                .unwrap();
        assert_eq!(verdict.primary, "Account Access");
        assert_eq!(verdict.secondary, "Password Reset");
    }

    #[test]
    fn test_verdict_missing_field_fails() {
        let result: Result<Verdict, _> = serde_json::from_str(r#"{"primary":"Billing"}"#);
        assert!(result.is_err());
    }
}
