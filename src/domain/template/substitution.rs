//! Variable substitution engine for campaign templates

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::types::{CampaignContent, TemplateVariable, VariableValues};

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\{\{([^}]+)\}\}").unwrap();
}

/// Result of checking supplied values against required variables
#[derive(Debug, Clone, Serialize)]
pub struct VariableValidation {
    pub valid: bool,
    pub missing: Vec<TemplateVariable>,
}

/// Replace every declared variable in `content`.
///
/// Resolution order: supplied non-empty value, then the declared default,
/// then the empty string. Keys are matched literally. Tokens that no
/// declared variable covers are left in place.
pub fn replace_variables(
    content: &str,
    values: &VariableValues,
    variables: &[TemplateVariable],
) -> String {
    let mut result = content.to_string();

    for variable in variables {
        let replacement = variable
            .filled(values)
            .or(variable.default_value.as_deref())
            .unwrap_or("");
        result = result.replace(&variable.key, replacement);
    }

    result
}

/// Fill every templated field of every platform present in `content`
pub fn replace_template_variables(
    content: &CampaignContent,
    values: &VariableValues,
    variables: &[TemplateVariable],
) -> CampaignContent {
    content.map_text(|text| replace_variables(text, values, variables))
}

/// Required variables whose supplied value is absent or blank.
/// Defaults do not count as filled.
pub fn get_unfilled_required_variables(
    variables: &[TemplateVariable],
    values: &VariableValues,
) -> Vec<TemplateVariable> {
    variables
        .iter()
        .filter(|v| v.required)
        .filter(|v| v.supplied(values).map_or(true, |s| s.trim().is_empty()))
        .cloned()
        .collect()
}

pub fn validate_variables(
    variables: &[TemplateVariable],
    values: &VariableValues,
) -> VariableValidation {
    let missing = get_unfilled_required_variables(variables, values);
    VariableValidation {
        valid: missing.is_empty(),
        missing,
    }
}

/// Like [`replace_variables`], but anything with neither value nor default
/// becomes `[Label]` so the preview shows what is still missing.
pub fn get_preview_with_placeholders(
    content: &str,
    values: &VariableValues,
    variables: &[TemplateVariable],
) -> String {
    let mut result = content.to_string();

    for variable in variables {
        let replacement = match variable
            .filled(values)
            .or(variable.default_value.as_deref())
        {
            Some(value) => value.to_string(),
            None => format!("[{}]", variable.label),
        };
        result = result.replace(&variable.key, &replacement);
    }

    result
}

/// Placeholder preview of every templated field
pub fn preview_template(
    content: &CampaignContent,
    values: &VariableValues,
    variables: &[TemplateVariable],
) -> CampaignContent {
    content.map_text(|text| get_preview_with_placeholders(text, values, variables))
}

/// Distinct `{{...}}` tokens in first-occurrence order
pub fn extract_variable_keys(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();

    for capture in TOKEN_PATTERN.captures_iter(content) {
        let key = format!("{{{{{}}}}}", &capture[1]);
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }

    keys
}

/// Tokens referenced by `content` that no declared variable covers
pub fn find_unresolved_tokens(content: &str, variables: &[TemplateVariable]) -> Vec<String> {
    let declared: HashSet<&str> = variables.iter().map(|v| v.key.as_str()).collect();

    extract_variable_keys(content)
        .into_iter()
        .filter(|key| !declared.contains(key.as_str()))
        .collect()
}

/// [`find_unresolved_tokens`] across every templated field, deduplicated
pub fn find_unresolved_template_tokens(
    content: &CampaignContent,
    variables: &[TemplateVariable],
) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .text_fields()
        .into_iter()
        .flat_map(|field| find_unresolved_tokens(field, variables))
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{EmailContent, TwitterContent, VariableType};

    fn values(pairs: &[(&str, &str)]) -> VariableValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn name_var() -> TemplateVariable {
        TemplateVariable::new("{{name}}", "Name", VariableType::Text).required()
    }

    #[test]
    fn test_replace_supplied_value() {
        let result = replace_variables("Hello {{name}}!", &values(&[("name", "Sam")]), &[name_var()]);
        assert_eq!(result, "Hello Sam!");
    }

    #[test]
    fn test_replace_falls_back_to_default() {
        let var = TemplateVariable::new("{{name}}", "Name", VariableType::Text).with_default("there");
        let result = replace_variables("Hi {{name}}", &VariableValues::new(), &[var]);
        assert_eq!(result, "Hi there");
    }

    #[test]
    fn test_replace_empty_value_uses_default() {
        let var = TemplateVariable::new("{{name}}", "Name", VariableType::Text).with_default("there");
        let result = replace_variables("Hi {{name}}", &values(&[("name", "")]), &[var]);
        assert_eq!(result, "Hi there");
    }

    #[test]
    fn test_replace_blanks_without_value_or_default() {
        let result = replace_variables("Hi {{name}}.", &VariableValues::new(), &[name_var()]);
        assert_eq!(result, "Hi .");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let result = replace_variables(
            "{{name}} and {{name}}",
            &values(&[("name", "Sam")]),
            &[name_var()],
        );
        assert_eq!(result, "Sam and Sam");
    }

    #[test]
    fn test_replace_leaves_undeclared_tokens() {
        let result = replace_variables(
            "Hi {{name}}, see {{link}}",
            &values(&[("name", "Sam"), ("link", "x")]),
            &[name_var()],
        );
        assert_eq!(result, "Hi Sam, see {{link}}");
    }

    #[test]
    fn test_replace_keys_with_regex_metacharacters() {
        let var = TemplateVariable::new("{{price.$usd}}", "Price", VariableType::Price);
        let result = replace_variables(
            "Now {{price.$usd}} (was {{priceX$usd}})",
            &values(&[("price.$usd", "$10")]),
            &[var],
        );
        assert_eq!(result, "Now $10 (was {{priceX$usd}})");
    }

    #[test]
    fn test_replace_is_idempotent_once_resolved() {
        let vars = [name_var()];
        let vals = values(&[("name", "Sam")]);
        let once = replace_variables("Hello {{name}}!", &vals, &vars);
        let twice = replace_variables(&once, &vals, &vars);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_template_variables_only_present_platforms() {
        let content = CampaignContent {
            email: Some(EmailContent {
                subject: "NEW: {{name}}".to_string(),
                preview_text: String::new(),
                body: "<p>{{name}}</p>".to_string(),
                cta_text: "Go".to_string(),
                cta_url: "{{name}}/buy".to_string(),
            }),
            twitter: Some(TwitterContent {
                tweet: "{{name}} is out".to_string(),
                hashtags: vec!["{{name}}".to_string()],
            }),
            ..Default::default()
        };

        let rendered = replace_template_variables(&content, &values(&[("name", "Kit")]), &[name_var()]);
        let email = rendered.email.unwrap();
        assert_eq!(email.subject, "NEW: Kit");
        assert_eq!(email.body, "<p>Kit</p>");
        assert_eq!(email.cta_url, "Kit/buy");

        let twitter = rendered.twitter.unwrap();
        assert_eq!(twitter.tweet, "Kit is out");
        assert_eq!(twitter.hashtags, vec!["{{name}}".to_string()]);

        assert!(rendered.instagram.is_none());
        assert!(rendered.tiktok.is_none());
    }

    #[test]
    fn test_unfilled_required_ignores_defaults() {
        let vars = vec![
            TemplateVariable::new("{{x}}", "X", VariableType::Text).required(),
            TemplateVariable::new("{{y}}", "Y", VariableType::Text)
                .required()
                .with_default("y"),
            TemplateVariable::new("{{z}}", "Z", VariableType::Text),
        ];

        let missing = get_unfilled_required_variables(&vars, &VariableValues::new());
        let keys: Vec<_> = missing.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["{{x}}", "{{y}}"]);
    }

    #[test]
    fn test_unfilled_required_treats_whitespace_as_missing() {
        let vars = vec![TemplateVariable::new("{{x}}", "X", VariableType::Text).required()];
        assert_eq!(
            get_unfilled_required_variables(&vars, &values(&[("x", "   ")])).len(),
            1
        );
        assert!(get_unfilled_required_variables(&vars, &values(&[("x", "ok")])).is_empty());
    }

    #[test]
    fn test_unfilled_required_matches_predicate() {
        let vars = vec![
            TemplateVariable::new("{{a}}", "A", VariableType::Text).required(),
            TemplateVariable::new("{{b}}", "B", VariableType::Url).required(),
            TemplateVariable::new("{{c}}", "C", VariableType::Text),
        ];
        let vals = values(&[("a", "set"), ("c", "")]);

        let missing = get_unfilled_required_variables(&vars, &vals);
        assert!(missing
            .iter()
            .all(|v| v.required && v.supplied(&vals).map_or(true, |s| s.trim().is_empty())));
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn test_validate_variables() {
        let vars = vec![name_var()];
        let result = validate_variables(&vars, &VariableValues::new());
        assert!(!result.valid);
        assert_eq!(result.missing.len(), 1);

        let result = validate_variables(&vars, &values(&[("name", "Sam")]));
        assert!(result.valid);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_preview_three_tiers() {
        let vars = vec![
            TemplateVariable::new("{{a}}", "Alpha", VariableType::Text),
            TemplateVariable::new("{{b}}", "Beta", VariableType::Text).with_default("bee"),
            TemplateVariable::new("{{c}}", "Gamma", VariableType::Text),
        ];
        let preview =
            get_preview_with_placeholders("{{a}} {{b}} {{c}}", &values(&[("a", "ay")]), &vars);
        assert_eq!(preview, "ay bee [Gamma]");
    }

    #[test]
    fn test_preview_never_leaves_declared_tokens() {
        let vars = vec![
            TemplateVariable::new("{{a}}", "A", VariableType::Text),
            TemplateVariable::new("{{b}}", "B", VariableType::Text),
        ];
        let preview = get_preview_with_placeholders(
            "{{a}}{{b}}{{a}} {{other}}",
            &VariableValues::new(),
            &vars,
        );
        assert!(!preview.contains("{{a}}"));
        assert!(!preview.contains("{{b}}"));
        assert!(preview.contains("{{other}}"));
    }

    #[test]
    fn test_extract_variable_keys_dedup_in_order() {
        let keys = extract_variable_keys("{{b}} then {{a}} then {{b}} and {{ c }}");
        assert_eq!(keys, vec!["{{b}}", "{{a}}", "{{ c }}"]);
    }

    #[test]
    fn test_extract_variable_keys_none() {
        assert!(extract_variable_keys("no tokens {here}").is_empty());
    }

    #[test]
    fn test_find_unresolved_tokens() {
        let unresolved = find_unresolved_tokens("{{name}} {{link}} {{link}}", &[name_var()]);
        assert_eq!(unresolved, vec!["{{link}}"]);
    }

    #[test]
    fn test_find_unresolved_template_tokens_across_fields() {
        let content = CampaignContent {
            twitter: Some(TwitterContent {
                tweet: "{{name}} {{promo}}".to_string(),
                hashtags: vec![],
            }),
            email: Some(EmailContent {
                subject: "{{promo}} {{date}}".to_string(),
                body: String::new(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let unresolved = find_unresolved_template_tokens(&content, &[name_var()]);
        assert_eq!(unresolved, vec!["{{promo}}", "{{date}}"]);
    }
}
