//! Marker class names must be single, distinct class tokens.

use std::collections::HashMap;

use super::helpers::validate_non_empty;
use crate::schema::DockConfig;

pub(crate) fn validate_markers(errors: &mut Vec<String>, config: &DockConfig) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (name, value) in config.markers.entries() {
        validate_non_empty(errors, name, value);
        if value.split_whitespace().count() > 1 {
            errors.push(format!("{name} = {value:?} must be a single class name"));
        }
        if value.trim().is_empty() {
            continue;
        }
        if let Some(first) = seen.insert(value, name) {
            errors.push(format!("{name} duplicates {first} ({value:?})"));
        }
    }
}
