//! A small, position-aware stylesheet parser.
//!
//! It understands just enough CSS to find declarations and the rules that
//! enclose them: qualified rules, at-rules with or without blocks, nesting,
//! comments and strings. Declaration values are tokenized when possible and
//! kept as raw text otherwise.
//!
//! ```
//! use fontinject_css::parse_stylesheet;
//!
//! let sheet = parse_stylesheet("@media print { body { font-family: Inter } }").unwrap();
//! let mut seen = Vec::new();
//! sheet.walk_declarations(|decl, ctx| {
//!     seen.push((decl.property.clone(), ctx.at_rule.map(|at| at.name.clone())));
//! });
//! assert_eq!(seen, vec![("font-family".to_string(), Some("media".to_string()))]);
//! ```

pub mod ast;
mod error;
mod lexer;
mod parser;
mod value;

pub use ast::{
    AtRule, Declaration, DeclarationValue, Node, QualifiedRule, Rule, Span, Stylesheet, ValueToken,
    WalkContext,
};
pub use error::CssParseError;
pub use parser::StylesheetParser;

/// Parses `source` into a [`Stylesheet`].
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, CssParseError> {
    StylesheetParser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_reports_innermost_at_rule() {
        let sheet = parse_stylesheet(
            "@supports (display: grid) { @font-face { font-family: A } .x { font-family: B } }\n\
             p { font-family: C }",
        )
        .unwrap();

        let mut visits = Vec::new();
        sheet.walk_declarations(|decl, ctx| {
            visits.push((
                decl.property.clone(),
                ctx.at_rule.map(|at| at.name.clone()),
                ctx.rule.map(|rule| rule.prelude.clone()),
            ));
        });

        let expected: Vec<(String, Option<String>, Option<String>)> = vec![
            ("font-family".into(), Some("font-face".into()), None),
            ("font-family".into(), Some("supports".into()), Some(".x".into())),
            ("font-family".into(), None, Some("p".into())),
        ];
        assert_eq!(visits, expected);
    }

    #[test]
    fn test_in_at_rule_is_case_insensitive() {
        let sheet = parse_stylesheet("@FONT-FACE { font-family: A }").unwrap();
        let mut inside = false;
        sheet.walk_declarations(|_, ctx| inside = ctx.in_at_rule("font-face"));
        assert!(inside);
    }
}
