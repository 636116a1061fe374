//! Prepend-only rewrite buffer and its Source Map v3 output.
//!
//! The engine only ever inserts text in front of the original stylesheet, so
//! the buffer keeps the original untouched and tracks the inserted prefix
//! separately. The generated map is high resolution: every original
//! character gets its own segment.

use serde::{Deserialize, Serialize};
use std::fmt;

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const VLQ_SHIFT: u32 = 5;
const VLQ_CONTINUATION: i64 = 1 << VLQ_SHIFT;
const VLQ_MASK: i64 = VLQ_CONTINUATION - 1;

/// Text buffer over an original source that only supports prepending.
#[derive(Debug, Clone)]
pub struct RewriteBuffer {
    original: String,
    intro: String,
}

/// Options for [`RewriteBuffer::generate_map`].
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    /// Name recorded in `sources`.
    pub source: Option<String>,
    /// Name of the generated file.
    pub file: Option<String>,
    /// Embed the original text in `sourcesContent`.
    pub include_content: bool,
}

impl RewriteBuffer {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            intro: String::new(),
        }
    }

    /// Inserts `text` at the very start. Later calls land before earlier ones.
    pub fn prepend(&mut self, text: &str) -> &mut Self {
        self.intro.insert_str(0, text);
        self
    }

    pub fn has_changed(&self) -> bool {
        !self.intro.is_empty()
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Builds a map from the current output back to the original.
    pub fn generate_map(&self, options: MapOptions) -> SourceMap {
        let mut lines: Vec<Vec<Segment>> = Vec::new();

        // Inserted lines carry no mappings; the last one may be partial.
        let mut intro_lines = self.intro.split('\n');
        let mut column: u32 = intro_lines
            .next_back()
            .map(utf16_len)
            .unwrap_or_default();
        lines.extend(intro_lines.map(|_| Vec::new()));

        let mut current = Vec::new();
        for (original_line, text) in self.original.split('\n').enumerate() {
            if original_line > 0 {
                lines.push(std::mem::take(&mut current));
                column = 0;
            }
            let mut original_column = 0u32;
            for c in text.chars() {
                current.push(Segment {
                    generated_column: column,
                    original_line: original_line as u32,
                    original_column,
                });
                let width = c.len_utf16() as u32;
                column += width;
                original_column += width;
            }
        }
        lines.push(current);

        SourceMap {
            version: 3,
            file: options.file,
            sources: vec![options.source.unwrap_or_default()],
            sources_content: if options.include_content {
                vec![Some(self.original.clone())]
            } else {
                Vec::new()
            },
            names: Vec::new(),
            mappings: encode_mappings(&lines),
        }
    }
}

impl fmt::Display for RewriteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.intro)?;
        f.write_str(&self.original)
    }
}

fn utf16_len(text: &str) -> u32 {
    text.chars().map(|c| c.len_utf16() as u32).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    generated_column: u32,
    original_line: u32,
    original_column: u32,
}

/// A Source Map v3 document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub sources: Vec<String>,
    #[serde(default)]
    pub sources_content: Vec<Option<String>>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Original `(line, column)` for a generated position, all zero-based.
    ///
    /// Returns `None` for positions in inserted text or past the end of a line.
    pub fn lookup(&self, line: u32, column: u32) -> Option<(u32, u32)> {
        let lines = decode_mappings(&self.mappings)?;
        let segments = lines.get(line as usize)?;
        segments
            .iter()
            .find(|segment| segment.generated_column == column)
            .map(|segment| (segment.original_line, segment.original_column))
    }
}

fn encode_vlq(out: &mut String, value: i64) {
    let mut vlq = if value < 0 {
        ((-value) << 1) | 1
    } else {
        value << 1
    };
    loop {
        let mut digit = vlq & VLQ_MASK;
        vlq >>= VLQ_SHIFT;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION;
        }
        out.push(BASE64[digit as usize] as char);
        if vlq == 0 {
            break;
        }
    }
}

fn encode_mappings(lines: &[Vec<Segment>]) -> String {
    let mut out = String::new();
    let mut previous_line = 0i64;
    let mut previous_column = 0i64;

    for (index, segments) in lines.iter().enumerate() {
        if index > 0 {
            out.push(';');
        }
        let mut previous_generated = 0i64;
        for (position, segment) in segments.iter().enumerate() {
            if position > 0 {
                out.push(',');
            }
            let generated = i64::from(segment.generated_column);
            let line = i64::from(segment.original_line);
            let column = i64::from(segment.original_column);

            encode_vlq(&mut out, generated - previous_generated);
            // Single source, so the source index delta is always zero.
            encode_vlq(&mut out, 0);
            encode_vlq(&mut out, line - previous_line);
            encode_vlq(&mut out, column - previous_column);

            previous_generated = generated;
            previous_line = line;
            previous_column = column;
        }
    }
    out
}

fn decode_vlq(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<i64> {
    let mut value = 0i64;
    let mut shift = 0u32;
    loop {
        let c = chars.next()?;
        let digit = BASE64.iter().position(|&b| b as char == c)? as i64;
        value += (digit & VLQ_MASK) << shift;
        if digit & VLQ_CONTINUATION == 0 {
            break;
        }
        shift += VLQ_SHIFT;
    }
    let negative = value & 1 == 1;
    value >>= 1;
    Some(if negative { -value } else { value })
}

fn decode_mappings(mappings: &str) -> Option<Vec<Vec<Segment>>> {
    let mut lines = Vec::new();
    let mut line_state = 0i64;
    let mut column_state = 0i64;

    for encoded_line in mappings.split(';') {
        let mut segments = Vec::new();
        let mut generated = 0i64;
        for encoded in encoded_line.split(',').filter(|s| !s.is_empty()) {
            let mut chars = encoded.chars().peekable();
            generated += decode_vlq(&mut chars)?;
            if chars.peek().is_some() {
                decode_vlq(&mut chars)?;
                line_state += decode_vlq(&mut chars)?;
                column_state += decode_vlq(&mut chars)?;
                segments.push(Segment {
                    generated_column: u32::try_from(generated).ok()?,
                    original_line: u32::try_from(line_state).ok()?,
                    original_column: u32::try_from(column_state).ok()?,
                });
            }
        }
        lines.push(segments);
    }
    Some(lines)
}
