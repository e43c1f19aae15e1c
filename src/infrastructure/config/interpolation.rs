//! `${env:NAME}` placeholder resolution over a parsed configuration tree.
//!
//! Grammar inside string values:
//! - `${env:NAME}` is replaced by the value of `NAME`
//! - `${env:NAME,default}` falls back to `default` (trimmed) when `NAME` is unset
//! - `\${` produces a literal `${`
//! - `${` not followed by `env:` is kept as is
//!
//! `NAME` must be non-empty and made of ASCII letters, digits and `_`.
//! Substituted values are never scanned again.

use figment::value::{Dict, Value};

use super::error::LoadError;

const OPEN: &str = "${";
const ENV_OPEN: &str = "${env:";

/// Resolve every placeholder in `tree`, depth-first, reading variables with `lookup`
pub fn resolve_tree<F>(tree: &mut Dict, lookup: &F) -> Result<(), LoadError>
where
    F: Fn(&str) -> Option<String>,
{
    for (key, value) in tree.iter_mut() {
        resolve_value(value, key, lookup)?;
    }
    Ok(())
}

/// Read a variable from the process environment; non-Unicode values count as unset
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn resolve_value<F>(value: &mut Value, location: &str, lookup: &F) -> Result<(), LoadError>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::String(_, s) => {
            if s.contains(OPEN) {
                *s = interpolate(s, location, lookup)?;
            }
        }
        Value::Dict(_, dict) => {
            for (key, child) in dict.iter_mut() {
                resolve_value(child, &format!("{location}.{key}"), lookup)?;
            }
        }
        Value::Array(_, items) => {
            for (index, child) in items.iter_mut().enumerate() {
                resolve_value(child, &format!("{location}[{index}]"), lookup)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Substitute all placeholders in a single string
pub fn interpolate<F>(input: &str, location: &str, lookup: &F) -> Result<String, LoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(OPEN) {
        let (before, after) = rest.split_at(pos);

        if let Some(literal) = before.strip_suffix('\\') {
            out.push_str(literal);
            out.push_str(OPEN);
            rest = &after[OPEN.len()..];
            continue;
        }
        out.push_str(before);

        let Some(body_and_rest) = after.strip_prefix(ENV_OPEN) else {
            out.push_str(OPEN);
            rest = &after[OPEN.len()..];
            continue;
        };

        let Some(end) = body_and_rest.find('}') else {
            return Err(LoadError::InvalidPlaceholder {
                location: location.to_string(),
                reason: format!("unterminated placeholder '{after}'"),
            });
        };

        let body = &body_and_rest[..end];
        let (name, default) = match body.split_once(',') {
            Some((name, default)) => (name.trim(), Some(default.trim())),
            None => (body.trim(), None),
        };

        if !is_valid_name(name) {
            return Err(LoadError::InvalidPlaceholder {
                location: location.to_string(),
                reason: format!("invalid environment variable name '{name}'"),
            });
        }

        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => match default {
                Some(default) => out.push_str(default),
                None => {
                    return Err(LoadError::MissingEnvVar {
                        name: name.to_string(),
                        location: location.to_string(),
                    })
                }
            },
        }

        rest = &body_and_rest[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
