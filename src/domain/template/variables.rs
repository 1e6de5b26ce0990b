//! Typed checks for supplied variable values

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::types::{TemplateVariable, VariableType, VariableValues};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableValueError {
    #[error("expected an http(s) URL, got {0:?}")]
    InvalidUrl(String),

    #[error("expected a price such as $97 or 19.99, got {0:?}")]
    InvalidPrice(String),

    #[error("expected a date in YYYY-MM-DD form, got {0:?}")]
    InvalidDate(String),

    #[error("expected a discount between 0 and 100, got {0:?}")]
    InvalidDiscount(String),

    #[error("expected a number, got {0:?}")]
    InvalidNumber(String),
}

/// A supplied value that does not fit its variable's declared type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableIssue {
    pub key: String,
    pub label: String,
    pub var_type: VariableType,
    pub message: String,
}

impl VariableType {
    pub fn check(&self, value: &str) -> Result<(), VariableValueError> {
        let value = value.trim();
        match self {
            VariableType::Text => Ok(()),
            VariableType::Url => check_url(value),
            VariableType::Price => check_price(value),
            VariableType::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| VariableValueError::InvalidDate(value.to_string())),
            VariableType::Discount => check_discount(value),
            VariableType::Number => check_number(value),
        }
    }
}

fn check_url(value: &str) -> Result<(), VariableValueError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            if host.is_empty() || host.contains(char::is_whitespace) {
                Err(VariableValueError::InvalidUrl(value.to_string()))
            } else {
                Ok(())
            }
        }
        None => Err(VariableValueError::InvalidUrl(value.to_string())),
    }
}

fn check_price(value: &str) -> Result<(), VariableValueError> {
    let amount = value.trim_start_matches(['$', '€', '£']).replace(',', "");
    match amount.parse::<f64>() {
        Ok(n) if n >= 0.0 && n.is_finite() => Ok(()),
        _ => Err(VariableValueError::InvalidPrice(value.to_string())),
    }
}

fn check_discount(value: &str) -> Result<(), VariableValueError> {
    match value.trim_end_matches('%').parse::<f64>() {
        Ok(n) if (0.0..=100.0).contains(&n) => Ok(()),
        _ => Err(VariableValueError::InvalidDiscount(value.to_string())),
    }
}

// "100+" is a valid count in catalog defaults
fn check_number(value: &str) -> Result<(), VariableValueError> {
    match value.trim_end_matches('+').replace(',', "").parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err(VariableValueError::InvalidNumber(value.to_string())),
    }
}

/// Check every non-blank supplied value against its declared type
pub fn check_variable_types(
    variables: &[TemplateVariable],
    values: &VariableValues,
) -> Vec<VariableIssue> {
    variables
        .iter()
        .filter_map(|variable| {
            let value = variable.supplied(values)?;
            if value.trim().is_empty() {
                return None;
            }
            variable.var_type.check(value).err().map(|e| VariableIssue {
                key: variable.key.clone(),
                label: variable.label.clone(),
                var_type: variable.var_type,
                message: e.to_string(),
            })
        })
        .collect()
}
