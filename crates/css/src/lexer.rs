//! Lexical building blocks: trivia, identifiers, strings, numbers.
//!
//! These are plain nom parsers over `&str`. Structural parsing (rules, blocks,
//! declarations) lives in `parser.rs` and only calls into here.

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until, take_while1};
use nom::character::complete::{anychar, char, digit1, multispace1, one_of};
use nom::combinator::{cut, opt, recognize};
use nom::error::{Error, ErrorKind};
use nom::multi::{many0_count, many1_count};
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// A `/* ... */` comment. Unterminated comments are a hard failure.
pub(crate) fn comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("/*"), cut(take_until("*/")), tag("*/"))).parse(input)
}

/// Whitespace and comments, returning how many pieces were skipped.
pub(crate) fn trivia(input: &str) -> IResult<&str, usize> {
    many0_count(alt((multispace1, comment))).parse(input)
}

/// Trivia allowed between top-level rules, which also includes `<!--` and `-->`.
pub(crate) fn top_level_trivia(input: &str) -> IResult<&str, usize> {
    many0_count(alt((multispace1, comment, tag("<!--"), tag("-->")))).parse(input)
}

fn escape(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('\\'), anychar)).parse(input)
}

/// An identifier in its raw (still escaped) form.
pub(crate) fn ident(input: &str) -> IResult<&str, &str> {
    let (rest, raw) = recognize(many1_count(alt((take_while1(is_name_char), escape)))).parse(input)?;

    let mut chars = raw.chars();
    let looks_numeric = match (chars.next(), chars.next()) {
        (Some(c), _) if c.is_ascii_digit() => true,
        (Some('-'), Some(c)) if c.is_ascii_digit() => true,
        (Some('-'), None) => true,
        _ => false,
    };
    if looks_numeric {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((rest, raw))
}

fn string_body(input: &str, quote: char) -> IResult<&str, &str> {
    let stops = if quote == '"' { "\"\\\n" } else { "'\\\n" };
    delimited(
        char(quote),
        recognize(many0_count(alt((is_not(stops), escape)))),
        cut(char(quote)),
    )
    .parse(input)
}

fn double_quoted(input: &str) -> IResult<&str, &str> {
    string_body(input, '"')
}

fn single_quoted(input: &str) -> IResult<&str, &str> {
    string_body(input, '\'')
}

/// A quoted string, returning the raw contents between the quotes.
pub(crate) fn quoted_string(input: &str) -> IResult<&str, &str> {
    alt((double_quoted, single_quoted)).parse(input)
}

/// A number with an optional unit or `%`, e.g. `12`, `-1.5em`, `50%`, `1e3`.
pub(crate) fn number(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
        opt(alt((tag("%"), ident))),
    ))
    .parse(input)
}

/// A hash token such as `#fff` or `#main`.
pub(crate) fn hash(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), recognize(many1_count(alt((take_while1(is_name_char), escape))))).parse(input)
}

/// Resolves CSS escapes in an identifier or string body.
pub(crate) fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            None => {}
            Some('\n') => {
                chars.next();
            }
            Some(h) if h.is_ascii_hexdigit() => {
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 6 {
                    match chars.peek().and_then(|d| d.to_digit(16)) {
                        Some(value) => {
                            code = code * 16 + value;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if chars.peek().is_some_and(|w| w.is_whitespace()) {
                    chars.next();
                }
                let decoded = match code {
                    0 => '\u{FFFD}',
                    _ => char::from_u32(code).unwrap_or('\u{FFFD}'),
                };
                out.push(decoded);
            }
            Some(other) => {
                out.push(other);
                chars.next();
            }
        }
    }
    out
}
