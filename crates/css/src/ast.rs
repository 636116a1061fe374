//! Syntax tree produced by [`crate::parse_stylesheet`].

/// Byte range in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The slice of `source` this span covers.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Qualified(QualifiedRule),
    At(AtRule),
}

/// A selector-prefixed rule such as `body { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedRule {
    pub prelude: String,
    pub block: Vec<Node>,
    pub span: Span,
}

/// An at-rule such as `@font-face { ... }` or `@import "x.css";`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    pub prelude: String,
    pub block: Option<Vec<Node>>,
    pub span: Span,
}

impl AtRule {
    /// At-rule names compare ASCII case-insensitively.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An item inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Declaration(Declaration),
    Rule(Rule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name as written.
    pub property: String,
    pub value: DeclarationValue,
    pub important: bool,
    pub span: Span,
}

/// A declaration value, structured when it could be tokenized completely.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationValue {
    Tokens(Vec<ValueToken>),
    /// Opaque text: custom properties and values the tokenizer gave up on.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueToken {
    /// An unquoted identifier, escapes resolved.
    Identifier(String),
    /// The contents of a quoted string, escapes resolved.
    String(String),
    /// A number, dimension or percentage as written.
    Number(String),
    Hash(String),
    Function { name: String, arguments: String },
    /// A `( ... )` or `[ ... ]` group; `open` is the opening bracket and
    /// `contents` the text between the brackets.
    Group { open: char, contents: String },
    /// `,` or `/`.
    Operator(char),
    Delim(char),
}

/// Where a visited declaration sits.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkContext<'a> {
    /// Innermost enclosing at-rule.
    pub at_rule: Option<&'a AtRule>,
    /// Innermost enclosing qualified rule.
    pub rule: Option<&'a QualifiedRule>,
}

impl WalkContext<'_> {
    pub fn in_at_rule(&self, name: &str) -> bool {
        self.at_rule.is_some_and(|at| at.is(name))
    }
}

impl Stylesheet {
    /// Visits every declaration in document order.
    pub fn walk_declarations<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Declaration, &WalkContext<'a>),
    {
        let context = WalkContext::default();
        for rule in &self.rules {
            walk_rule(rule, &context, &mut visit);
        }
    }

    /// Total number of declarations, at any depth.
    pub fn declaration_count(&self) -> usize {
        let mut count = 0;
        self.walk_declarations(|_, _| count += 1);
        count
    }
}

fn walk_rule<'a, F>(rule: &'a Rule, context: &WalkContext<'a>, visit: &mut F)
where
    F: FnMut(&'a Declaration, &WalkContext<'a>),
{
    match rule {
        Rule::At(at_rule) => {
            if let Some(block) = &at_rule.block {
                let inner = WalkContext {
                    at_rule: Some(at_rule),
                    ..*context
                };
                walk_block(block, &inner, visit);
            }
        }
        Rule::Qualified(qualified) => {
            let inner = WalkContext {
                rule: Some(qualified),
                ..*context
            };
            walk_block(&qualified.block, &inner, visit);
        }
    }
}

fn walk_block<'a, F>(block: &'a [Node], context: &WalkContext<'a>, visit: &mut F)
where
    F: FnMut(&'a Declaration, &WalkContext<'a>),
{
    for node in block {
        match node {
            Node::Declaration(declaration) => visit(declaration, context),
            Node::Rule(rule) => walk_rule(rule, context, visit),
        }
    }
}
