use crate::error::{Error, Result};
use crate::types::ClassLabel;

/// Whitespace or comma separated integer labels, one or more per line.
pub fn parse_labels(input: &str) -> Result<Vec<ClassLabel>> {
    let mut labels = Vec::new();
    for (line_number, line) in input.lines().enumerate() {
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let value: i64 = token.parse().map_err(|_| {
                Error::ParserError(format!(
                    "Invalid label {:?} on line {}",
                    token,
                    line_number + 1
                ))
            })?;
            labels.push(value.into());
        }
    }
    Ok(labels)
}

/// A JSON array of integer labels.
pub fn parse_labels_json(input: &str) -> Result<Vec<ClassLabel>> {
    let values: Vec<i64> = serde_json::from_str(input)?;
    Ok(values.into_iter().map(ClassLabel::from).collect())
}
