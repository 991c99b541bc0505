use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Parses JSON Lines input, one value per non-blank line. Errors carry the
/// 1-based line number of the offending line.
pub fn parse_json_lines<T: DeserializeOwned>(input: &str) -> Result<Vec<T>, AppError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| AppError::record_parse(index + 1, e.to_string()))
        })
        .collect()
}

/// Serializes rows as JSON Lines.
pub fn to_json_lines<T: Serialize>(rows: &[T]) -> Result<String, AppError> {
    let mut output = String::new();
    for row in rows {
        output.push_str(&serde_json::to_string(row)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows: Vec<BTreeMap<String, u32>> =
            parse_json_lines("{\"a\": 1}\n\n   \n{\"a\": 2}\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["a"], 2);
    }

    #[test]
    fn test_error_reports_input_line_number() {
        let result: Result<Vec<BTreeMap<String, u32>>, _> =
            parse_json_lines("{\"a\": 1}\n\n{\"a\": }\n");
        assert!(matches!(result, Err(AppError::RecordParse { line: 3, .. })));
    }

    #[test]
    fn test_to_json_lines_one_row_per_line() {
        let rows = vec![BTreeMap::from([("a", 1)]), BTreeMap::from([("a", 2)])];
        assert_eq!(to_json_lines(&rows).unwrap(), "{\"a\":1}\n{\"a\":2}\n");
    }
}
