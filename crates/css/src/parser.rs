//! Structural parser: rules, blocks and declarations.
//!
//! The grammar is deliberately small. A block item is tried as a declaration
//! first (`ident : value` ended by `;` or `}`), then as an at-rule, then as a
//! nested qualified rule, which is enough for nesting, `@media`, `@supports`,
//! `@layer`, `@keyframes` and friends.
//!
//! Items that fit none of these are skipped up to the next top-level `;` or
//! the end of the enclosing block. Only unterminated comments, strings and
//! blocks, and a `}` with no block to close, fail the parse.

use crate::ast::{AtRule, Declaration, Node, QualifiedRule, Rule, Span, Stylesheet};
use crate::error::CssParseError;
use crate::lexer::{comment, ident, quoted_string, top_level_trivia, trivia, unescape};
use crate::value::{parse_value, split_important};

type ParseResult<'a, T> = Result<(&'a str, T), CssParseError>;

pub struct StylesheetParser<'a> {
    source: &'a str,
}

impl<'a> StylesheetParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Parses the whole source into a [`Stylesheet`].
    pub fn parse(self) -> Result<Stylesheet, CssParseError> {
        let mut rules = Vec::new();
        let mut input = self.source;
        loop {
            input = match top_level_trivia(input) {
                Ok((rest, _)) => rest,
                Err(e) => return Err(self.nom_error(input, e, "unterminated comment")),
            };
            if input.is_empty() {
                break;
            }
            if let Some(rest) = input.strip_prefix(';') {
                input = rest;
                continue;
            }
            if input.starts_with('}') {
                return Err(self.error(input, "unexpected `}` outside of a block"));
            }
            let (rest, rule) = self.rule(input)?;
            rules.extend(rule);
            input = rest;
        }
        Ok(Stylesheet { rules })
    }

    fn offset(&self, rest: &str) -> usize {
        self.source.len() - rest.len()
    }

    fn error(&self, at: &str, message: &str) -> CssParseError {
        CssParseError::at(self.source, self.offset(at), message)
    }

    fn nom_error(
        &self,
        fallback: &str,
        err: nom::Err<nom::error::Error<&'a str>>,
        message: &str,
    ) -> CssParseError {
        let at = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
            nom::Err::Incomplete(_) => fallback,
        };
        self.error(at, message)
    }

    fn skip_trivia(&self, input: &'a str) -> Result<&'a str, CssParseError> {
        match trivia(input) {
            Ok((rest, _)) => Ok(rest),
            Err(e) => Err(self.nom_error(input, e, "unterminated comment")),
        }
    }

    /// Scans component values up to the first top-level character in `stops`.
    ///
    /// Strings, comments and escapes are skipped over; `(` `)` and `[` `]` nest,
    /// braces always stop. Returns the scanned length and the stop character,
    /// or `None` at end of input.
    fn scan(&self, input: &'a str, stops: &[char]) -> Result<(usize, Option<char>), CssParseError> {
        let mut closers: Vec<char> = Vec::new();
        let mut rest = input;
        while let Some(c) = rest.chars().next() {
            match c {
                '"' | '\'' => {
                    rest = match quoted_string(rest) {
                        Ok((after, _)) => after,
                        Err(e) => return Err(self.nom_error(rest, e, "unterminated string")),
                    };
                    continue;
                }
                '/' if rest.starts_with("/*") => {
                    rest = match comment(rest) {
                        Ok((after, _)) => after,
                        Err(e) => return Err(self.nom_error(rest, e, "unterminated comment")),
                    };
                    continue;
                }
                '\\' => {
                    let mut chars = rest.chars();
                    chars.next();
                    chars.next();
                    rest = chars.as_str();
                    continue;
                }
                '{' | '}' if stops.contains(&c) => {
                    return Ok((input.len() - rest.len(), Some(c)));
                }
                _ if closers.is_empty() && stops.contains(&c) => {
                    return Ok((input.len() - rest.len(), Some(c)));
                }
                '(' => closers.push(')'),
                '[' => closers.push(']'),
                ')' | ']' if closers.last() == Some(&c) => {
                    closers.pop();
                }
                _ => {}
            }
            rest = &rest[c.len_utf8()..];
        }
        Ok((input.len(), None))
    }

    /// Parses a rule, or skips the item when it is not one.
    fn rule(&self, input: &'a str) -> ParseResult<'a, Option<Rule>> {
        if input.starts_with('@') {
            let (rest, at_rule) = self.at_rule(input)?;
            Ok((rest, at_rule.map(Rule::At)))
        } else {
            let (rest, rule) = self.qualified_rule(input)?;
            Ok((rest, rule.map(Rule::Qualified)))
        }
    }

    /// Skips an unrecognized item: through the next `;`, through a `{ ... }`
    /// block, or up to (not past) the `}` closing the enclosing block.
    fn skip_item(&self, input: &'a str) -> Result<&'a str, CssParseError> {
        let (len, stop) = self.scan(input, &[';', '{', '}'])?;
        let rest = &input[len..];
        match stop {
            Some(';') => Ok(&rest[1..]),
            Some('{') => Ok(self.block(rest)?.0),
            _ => Ok(rest),
        }
    }

    fn at_rule(&self, input: &'a str) -> ParseResult<'a, Option<AtRule>> {
        let start = self.offset(input);
        let Ok((rest, name)) = ident(&input[1..]) else {
            return Ok((self.skip_item(&input[1..])?, None));
        };

        let (len, stop) = self.scan(rest, &[';', '{', '}'])?;
        let prelude = rest[..len].trim().to_string();
        let after_prelude = &rest[len..];

        let (rest, block) = match stop {
            Some('{') => {
                let (rest, block) = self.block(after_prelude)?;
                (rest, Some(block))
            }
            Some(';') => (&after_prelude[1..], None),
            _ => (after_prelude, None),
        };

        Ok((
            rest,
            Some(AtRule {
                name: unescape(name),
                prelude,
                block,
                span: Span::new(start, self.offset(rest)),
            }),
        ))
    }

    fn qualified_rule(&self, input: &'a str) -> ParseResult<'a, Option<QualifiedRule>> {
        let start = self.offset(input);
        let (len, stop) = self.scan(input, &['{', '}', ';'])?;
        if stop != Some('{') {
            return Ok((self.skip_item(input)?, None));
        }

        let prelude = input[..len].trim().to_string();
        let (rest, block) = self.block(&input[len..])?;
        Ok((
            rest,
            Some(QualifiedRule {
                prelude,
                block,
                span: Span::new(start, self.offset(rest)),
            }),
        ))
    }

    /// Parses `{ ... }`; `input` starts at the opening brace.
    fn block(&self, input: &'a str) -> ParseResult<'a, Vec<Node>> {
        let open = input;
        let mut nodes = Vec::new();
        let mut rest = &input[1..];
        loop {
            rest = self.skip_trivia(rest)?;
            if let Some(after) = rest.strip_prefix(';') {
                rest = after;
                continue;
            }
            if let Some(after) = rest.strip_prefix('}') {
                return Ok((after, nodes));
            }
            if rest.is_empty() {
                return Err(self.error(open, "unterminated block"));
            }

            if let Some((after, declaration)) = self.declaration(rest)? {
                nodes.push(Node::Declaration(declaration));
                rest = after;
                continue;
            }
            let (after, rule) = self.rule(rest)?;
            nodes.extend(rule.map(Node::Rule));
            rest = after;
        }
    }

    /// Tries `property: value`. Returns `Ok(None)` when the input is not a
    /// declaration, e.g. a nested `a:hover { ... }` rule.
    fn declaration(&self, input: &'a str) -> Result<Option<(&'a str, Declaration)>, CssParseError> {
        let Ok((rest, property)) = ident(input) else {
            return Ok(None);
        };
        let rest = self.skip_trivia(rest)?;
        let Some(rest) = rest.strip_prefix(':') else {
            return Ok(None);
        };

        let (len, stop) = self.scan(rest, &[';', '{', '}'])?;
        if stop == Some('{') {
            return Ok(None);
        }

        let property = unescape(property);
        let (text, important) = split_important(&rest[..len]);
        let value = parse_value(&property, text);
        let after = match stop {
            Some(';') => &rest[len + 1..],
            _ => &rest[len..],
        };

        Ok(Some((
            after,
            Declaration {
                property,
                value,
                important,
                span: Span::new(self.offset(input), self.offset(after)),
            },
        )))
    }
}
