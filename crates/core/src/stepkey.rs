//! Parsing of compound template keys.
//!
//! Canvas templates and step descriptions are addressed by keys of the form
//! `<ComponentName>-Step<N>` (e.g. `"Funding-Step1"`, `"Team Capacities-Step2"`).
//! The chat/autofill proxy parses the key before doing any work so a malformed
//! key fails fast with a descriptive error.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// A parsed `<ComponentName>-Step<N>` template key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKey {
    pub component_name: String,
    pub step_number: i32,
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+)-Step(\d+)$").expect("step key pattern is valid"))
}

/// Parse a template key into its component name and step number.
///
/// Fails with [`CoreError::Validation`] when the key does not match the
/// `<ComponentName>-Step<N>` shape.
pub fn parse_template_key(key: &str) -> Result<StepKey, CoreError> {
    let captures = key_pattern().captures(key).ok_or_else(|| {
        CoreError::Validation(format!(
            "Invalid template key '{key}': expected the form <ComponentName>-Step<N>"
        ))
    })?;

    let component_name = captures[1].trim().to_string();
    let step_number: i32 = captures[2].parse().map_err(|_| {
        CoreError::Validation(format!("Invalid step number in template key '{key}'"))
    })?;

    Ok(StepKey {
        component_name,
        step_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_simple_key() {
        let key = parse_template_key("Funding-Step1").expect("key should parse");
        assert_eq!(key.component_name, "Funding");
        assert_eq!(key.step_number, 1);
    }

    #[test]
    fn test_parses_component_with_spaces() {
        let key = parse_template_key("Team Capacities-Step2").expect("key should parse");
        assert_eq!(key.component_name, "Team Capacities");
        assert_eq!(key.step_number, 2);
    }

    #[test]
    fn test_missing_hyphen_is_rejected() {
        let err = parse_template_key("FundingStep1").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("FundingStep1"));
    }

    #[test]
    fn test_missing_step_number_is_rejected() {
        assert!(parse_template_key("Funding-Step").is_err());
        assert!(parse_template_key("Funding-").is_err());
        assert!(parse_template_key("").is_err());
    }

    #[test]
    fn test_multi_digit_step_number() {
        let key = parse_template_key("Relations-Step12").expect("key should parse");
        assert_eq!(key.step_number, 12);
    }
}
