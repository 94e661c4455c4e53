use anyhow::{anyhow, Result};
use chrono::FixedOffset;
use std::collections::HashSet;

use crate::services::form::FormFieldIds;
use crate::services::users::UserDirectory;

pub fn validate_form_url(url: &str) -> Result<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(anyhow!("FORM_URL must be set"));
    }

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(anyhow!("FORM_URL must start with http:// or https://"));
    }

    if url.contains(char::is_whitespace) {
        return Err(anyhow!("FORM_URL cannot contain whitespace"));
    }

    Ok(())
}

/// Every id must be present and no two fields may share one, otherwise a
/// value would silently overwrite another in the posted form.
pub fn validate_form_field_ids(ids: &FormFieldIds) -> Result<()> {
    let mut seen = HashSet::new();

    for (label, id) in ids.labelled() {
        if id.trim().is_empty() {
            return Err(anyhow!("Form field id '{}' cannot be empty", label));
        }
        if !seen.insert(id) {
            return Err(anyhow!("Form field id '{}' is used more than once", id));
        }
    }

    Ok(())
}

pub fn validate_user_directory(directory: &UserDirectory) -> Result<()> {
    for (key, name) in directory.entries() {
        if key.trim().is_empty() {
            return Err(anyhow!("USER_NAME_MAPPING contains an empty user key"));
        }
        if name.trim().is_empty() {
            return Err(anyhow!("Display name for '{}' cannot be empty", key));
        }
    }

    Ok(())
}

/// Parses `+08:00`, `+0800`, `+8`, `-05:30`, `Z` or `UTC`.
pub fn parse_utc_offset(input: &str) -> Result<FixedOffset> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("utc") || input == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(|| anyhow!("Invalid UTC_OFFSET"));
    }

    let (sign, rest) = match input.chars().next() {
        Some('+') => (1, &input[1..]),
        Some('-') => (-1, &input[1..]),
        _ => return Err(anyhow!("UTC_OFFSET '{}' must start with + or -", input)),
    };

    if !rest.is_ascii() {
        return Err(anyhow!("Invalid hours in UTC_OFFSET '{}'", input));
    }

    let (hours, minutes) = if let Some((h, m)) = rest.split_once(':') {
        (h, m)
    } else if rest.len() == 4 {
        rest.split_at(2)
    } else {
        (rest, "0")
    };

    let hours: i32 = hours
        .parse()
        .map_err(|_| anyhow!("Invalid hours in UTC_OFFSET '{}'", input))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| anyhow!("Invalid minutes in UTC_OFFSET '{}'", input))?;

    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(anyhow!("UTC_OFFSET '{}' is out of range", input));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| anyhow!("UTC_OFFSET '{}' is out of range", input))
}
