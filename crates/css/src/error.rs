use thiserror::Error;

/// A stylesheet could not be parsed.
///
/// Positions refer to the original source: `offset` is a byte offset, `line`
/// and `column` are 1-based with columns counted in characters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct CssParseError {
    pub message: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl CssParseError {
    pub(crate) fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = consumed[line_start..].chars().count() + 1;
        Self {
            message: message.into(),
            offset,
            line,
            column,
        }
    }
}
