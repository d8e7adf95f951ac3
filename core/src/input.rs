/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

pub fn validate_display_name(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s.len() > DISPLAY_NAME_MAX_LEN {
        return Err(format!(
            "Name cannot exceed {} characters",
            DISPLAY_NAME_MAX_LEN
        ));
    }

    if s.contains(|c: char| c.is_control()) {
        return Err("Name cannot contain control characters".to_string());
    }

    Ok(())
}

/// Extracts candidate team-member ids from submitted form fields. Every field
/// whose name starts with [`TEAM_MEMBER_FIELD_PREFIX`] contributes its value,
/// in submission order; the suffix after the prefix is ignored.
pub fn team_member_ids(fields: &[(String, String)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(key, _)| key.starts_with(TEAM_MEMBER_FIELD_PREFIX))
        .map(|(_, value)| value.clone())
        .collect()
}
