use crate::ast::{DeclarationValue, ValueToken};
use crate::lexer::{hash, ident, number, quoted_string, trivia, unescape};
use nom::character::complete::char;
use nom::{IResult, Parser};

/// Strips a trailing `!important`, reporting whether it was present.
pub(crate) fn split_important(text: &str) -> (&str, bool) {
    let trimmed = text.trim_end();
    if let Some(bang) = trimmed.rfind('!') {
        if trimmed[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return (&trimmed[..bang], true);
        }
    }
    (text, false)
}

/// Contents of a bracketed group up to `close`, consuming the closer.
/// Nested `( )` and `[ ]` pairs and quoted strings are skipped over.
fn balanced(input: &str, close: char) -> IResult<&str, &str> {
    let mut closers = vec![close];
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        match c {
            '"' | '\'' => {
                let (after, _) = quoted_string(rest)?;
                rest = after;
                continue;
            }
            '\\' => {
                let mut chars = rest.chars();
                chars.next();
                chars.next();
                rest = chars.as_str();
                continue;
            }
            '(' => closers.push(')'),
            '[' => closers.push(']'),
            ')' | ']' if closers.last() == Some(&c) => {
                closers.pop();
                if closers.is_empty() {
                    let consumed = input.len() - rest.len();
                    return Ok((&rest[1..], &input[..consumed]));
                }
            }
            _ => {}
        }
        rest = &rest[c.len_utf8()..];
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Eof,
    )))
}

fn group(input: &str) -> IResult<&str, ValueToken> {
    let (open, close) = match input.chars().next() {
        Some('(') => ('(', ')'),
        Some('[') => ('[', ']'),
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )));
        }
    };
    let (rest, contents) = balanced(&input[1..], close)?;
    Ok((
        rest,
        ValueToken::Group {
            open,
            contents: contents.to_string(),
        },
    ))
}

fn function(input: &str) -> IResult<&str, ValueToken> {
    let (rest, name) = ident(input)?;
    let (rest, _) = char('(').parse(rest)?;
    let (rest, args) = balanced(rest, ')')?;
    Ok((
        rest,
        ValueToken::Function {
            name: unescape(name),
            arguments: args.to_string(),
        },
    ))
}

fn token(input: &str) -> IResult<&str, ValueToken> {
    if let Ok((rest, raw)) = quoted_string(input) {
        return Ok((rest, ValueToken::String(unescape(raw))));
    }
    if let Ok((rest, raw)) = number(input) {
        return Ok((rest, ValueToken::Number(raw.to_string())));
    }
    if let Ok((rest, token)) = function(input) {
        return Ok((rest, token));
    }
    if let Ok((rest, raw)) = ident(input) {
        return Ok((rest, ValueToken::Identifier(unescape(raw))));
    }
    if let Ok((rest, raw)) = hash(input) {
        return Ok((rest, ValueToken::Hash(unescape(raw))));
    }
    if input.starts_with(['(', '[']) {
        return group(input);
    }

    let mut chars = input.chars();
    match chars.next() {
        Some(c @ (',' | '/')) => Ok((chars.as_str(), ValueToken::Operator(c))),
        Some(c) if !"{};\"'\\".contains(c) => Ok((chars.as_str(), ValueToken::Delim(c))),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        ))),
    }
}

/// Tokenizes a declaration value, or returns `None` when some part of it is
/// not understood.
fn tokenize(text: &str) -> Option<Vec<ValueToken>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    loop {
        let (after, _) = trivia(rest).ok()?;
        if after.is_empty() {
            return Some(tokens);
        }
        let (after, token) = token(after).ok()?;
        tokens.push(token);
        rest = after;
    }
}

/// Builds the value for `property` from its text (without `!important`).
pub(crate) fn parse_value(property: &str, text: &str) -> DeclarationValue {
    if property.starts_with("--") {
        return DeclarationValue::Raw(text.trim().to_string());
    }
    match tokenize(text) {
        Some(tokens) => DeclarationValue::Tokens(tokens),
        None => DeclarationValue::Raw(text.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<ValueToken> {
        match parse_value("font-family", text) {
            DeclarationValue::Tokens(tokens) => tokens,
            DeclarationValue::Raw(raw) => panic!("expected tokens, got raw {raw:?}"),
        }
    }

    #[test]
    fn test_family_list() {
        assert_eq!(
            tokens(r#" "Open Sans", Roboto , sans-serif"#),
            vec![
                ValueToken::String("Open Sans".into()),
                ValueToken::Operator(','),
                ValueToken::Identifier("Roboto".into()),
                ValueToken::Operator(','),
                ValueToken::Identifier("sans-serif".into()),
            ]
        );
    }

    #[test]
    fn test_unquoted_multi_word_family_is_split() {
        assert_eq!(
            tokens("Open Sans"),
            vec![
                ValueToken::Identifier("Open".into()),
                ValueToken::Identifier("Sans".into()),
            ]
        );
    }

    #[test]
    fn test_function_and_numbers() {
        assert_eq!(
            tokens("var(--x, 'a)b') 12px/1.5 #fff"),
            vec![
                ValueToken::Function {
                    name: "var".into(),
                    arguments: "--x, 'a)b'".into()
                },
                ValueToken::Number("12px".into()),
                ValueToken::Operator('/'),
                ValueToken::Number("1.5".into()),
                ValueToken::Hash("fff".into()),
            ]
        );
    }

    #[test]
    fn test_comments_between_tokens() {
        assert_eq!(
            tokens("A /* primary */, B"),
            vec![
                ValueToken::Identifier("A".into()),
                ValueToken::Operator(','),
                ValueToken::Identifier("B".into()),
            ]
        );
    }

    #[test]
    fn test_brackets_and_bangs_stay_tokenized() {
        assert_eq!(
            tokens("Inter, [x] (a, [b]) ! ]"),
            vec![
                ValueToken::Identifier("Inter".into()),
                ValueToken::Operator(','),
                ValueToken::Group {
                    open: '[',
                    contents: "x".into()
                },
                ValueToken::Group {
                    open: '(',
                    contents: "a, [b]".into()
                },
                ValueToken::Delim('!'),
                ValueToken::Delim(']'),
            ]
        );
    }

    #[test]
    fn test_untokenizable_value_is_raw() {
        assert_eq!(
            parse_value("font-family", " Inter, calc(1px "),
            DeclarationValue::Raw("Inter, calc(1px".into())
        );
        assert_eq!(
            parse_value("font-family", "[open"),
            DeclarationValue::Raw("[open".into())
        );
    }

    #[test]
    fn test_custom_property_is_raw() {
        assert_eq!(
            parse_value("--brand", " 'Inter', serif "),
            DeclarationValue::Raw("'Inter', serif".into())
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(tokens("   "), vec![]);
    }

    #[test]
    fn test_split_important() {
        assert_eq!(split_important("Inter !important"), ("Inter ", true));
        assert_eq!(split_important("Inter ! IMPORTANT "), ("Inter ", true));
        assert_eq!(split_important("Inter"), ("Inter", false));
        assert_eq!(split_important("a!b"), ("a!b", false));
    }
}
