//! User agent and header values

/// User agent string identifying this tool, with an optional suffix
pub fn user_agent(suffix: Option<&str>) -> String {
    match suffix {
        Some(s) if !s.trim().is_empty() => format!("es-export/{} {}", crate::VERSION, s.trim()),
        _ => format!("es-export/{}", crate::VERSION),
    }
}

/// Content type of every request body
pub fn content_type_json() -> &'static str {
    "application/json"
}

/// Accept header for search responses
pub fn accept_json() -> &'static str {
    "application/json"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent() {
        let ua = user_agent(None);
        assert!(ua.starts_with("es-export/"));
        assert_eq!(user_agent(Some("  ")), ua);
        assert!(user_agent(Some("ops-team")).ends_with(" ops-team"));
    }
}
