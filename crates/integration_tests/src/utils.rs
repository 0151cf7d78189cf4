// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use colored::Colorize;
use serde_json::Value;
use std::fmt;

/// Compare decoder output against an expected fixture.
///
/// Object keys listed in `ignore_fields` are skipped wherever they appear.
pub fn compare_json(actual: &Value, expected: &Value, ignore_fields: &[&str]) -> ComparisonResult {
    let mut differences = Vec::new();
    compare_json_recursive(actual, expected, ignore_fields, "", &mut differences);

    if differences.is_empty() {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch { differences }
    }
}

#[derive(Debug, Clone)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
    ArrayLengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::ValueMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{}: {} {}",
                path.bright_white(),
                format!("- {}", actual).red(),
                format!("+ {}", expected).green()
            ),
            Difference::MissingField { path } => {
                write!(f, "{}: {}", path.bright_white(), "missing".green())
            }
            Difference::ExtraField { path } => {
                write!(f, "{}: {}", path.bright_white(), "unexpected".red())
            }
            Difference::ArrayLengthMismatch {
                path,
                expected_len,
                actual_len,
            } => write!(
                f,
                "{}: length {} {}",
                path.bright_white(),
                format!("- {}", actual_len).red(),
                format!("+ {}", expected_len).green()
            ),
        }
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn compare_json_recursive(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj.iter() {
                if ignore_fields.contains(&key.as_str()) {
                    continue;
                }
                let current_path = child_path(path, key);
                match actual_obj.get(key) {
                    Some(actual_val) => compare_json_recursive(
                        actual_val,
                        expected_val,
                        ignore_fields,
                        &current_path,
                        differences,
                    ),
                    None => differences.push(Difference::MissingField { path: current_path }),
                }
            }

            for key in actual_obj.keys() {
                if !expected_obj.contains_key(key) && !ignore_fields.contains(&key.as_str()) {
                    differences.push(Difference::ExtraField {
                        path: child_path(path, key),
                    });
                }
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            if actual_arr.len() != expected_arr.len() {
                differences.push(Difference::ArrayLengthMismatch {
                    path: path.to_string(),
                    expected_len: expected_arr.len(),
                    actual_len: actual_arr.len(),
                });
            }

            // Compare overlapping elements even if lengths differ
            for (i, (actual_val, expected_val)) in
                actual_arr.iter().zip(expected_arr.iter()).enumerate()
            {
                let current_path = format!("{}[{}]", path, i);
                compare_json_recursive(
                    actual_val,
                    expected_val,
                    ignore_fields,
                    &current_path,
                    differences,
                );
            }
        }
        (actual_val, expected_val) => {
            if actual_val != expected_val {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected_val.clone(),
                    actual: actual_val.clone(),
                });
            }
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// One line per difference, for assertion messages.
    pub fn format_diff(&self) -> String {
        let differences = self.differences();
        if differences.is_empty() {
            return String::new();
        }
        let mut output = vec![format!("{}", "JSON MISMATCH".bright_yellow().bold())];
        output.extend(differences.iter().map(|d| format!("  {}", d)));
        output.push(format!(
            "{} {}",
            "Total differences:".bright_cyan().bold(),
            differences.len()
        ));
        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_values_match() {
        let value = json!({"a": ["1", {"b": null}]});
        assert!(compare_json(&value, &value, &[]).is_match());
    }

    #[test]
    fn test_reports_paths_of_differences() {
        let actual = json!({"a": {"b": "1"}, "extra": true, "list": [1, 2]});
        let expected = json!({"a": {"b": "2"}, "missing": 0, "list": [1]});
        let result = compare_json(&actual, &expected, &[]);

        let paths: Vec<String> = result
            .differences()
            .iter()
            .map(|d| match d {
                Difference::ValueMismatch { path, .. }
                | Difference::MissingField { path }
                | Difference::ExtraField { path }
                | Difference::ArrayLengthMismatch { path, .. } => path.clone(),
            })
            .collect();
        assert!(paths.contains(&"a.b".to_string()));
        assert!(paths.contains(&"missing".to_string()));
        assert!(paths.contains(&"extra".to_string()));
        assert!(paths.contains(&"list".to_string()));
    }

    #[test]
    fn test_ignored_fields_are_skipped() {
        let actual = json!({"name": "x", "version": 4});
        let expected = json!({"name": "x", "version": 1});
        assert!(compare_json(&actual, &expected, &["version"]).is_match());
    }
}
