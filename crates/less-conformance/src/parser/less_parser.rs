//! LESS syntax parser built on the `cssparser` tokenizer.
//!
//! Handles the subset of LESS this engine classifies: selectors, nested
//! rulesets, declarations, `@name: value` variable bindings, comments,
//! `@media` blocks, `@import` statements (resolved against the search
//! paths and parsed as separate trees) and `.name(...)` mixin definitions
//! and calls. At-rules outside that subset parse into `Unknown` nodes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use cssparser::{
    Delimiter, ParseError as CssParseError, Parser, ParserInput, ToCss, Token,
};

use super::{Parse, ParseOptions, ParseOutput};
use crate::ast::{
    Comment, Import, Media, MixinCall, MixinDefinition, Rule, Ruleset, Selector, SelectorElement,
    SourceInfo, SyntaxNode, ValueExpression,
};
use crate::{Error, Result};

type PError<'i> = CssParseError<'i, ()>;
type PResult<'i, T> = std::result::Result<T, PError<'i>>;

/// The bundled LESS parser collaborator.
#[derive(Debug, Default)]
pub struct LessParser;

impl LessParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parse for LessParser {
    fn parse(&self, source: &str, opts: &ParseOptions) -> Result<ParseOutput> {
        let mut ctx = ParseContext {
            filename: opts.entry_name.clone(),
            search_paths: opts.search_paths.clone(),
            imports: vec![],
            loaded: HashSet::new(),
        };

        let root = parse_root(source, &mut ctx)?;

        Ok(ParseOutput {
            root,
            imports: ctx.imports,
        })
    }
}

/// Shared state for one parse invocation.
struct ParseContext {
    filename: String,
    search_paths: Vec<PathBuf>,
    imports: Vec<(String, Ruleset)>,
    loaded: HashSet<PathBuf>,
}

impl ParseContext {
    fn source(&self) -> Option<SourceInfo> {
        Some(SourceInfo::new(self.filename.clone()))
    }

    /// Resolve, read and parse an imported file, appending its tree to the
    /// reported imports. Failures degrade to a leaf-only import with a
    /// diagnostic; they never fail the parse of the importing file.
    fn load_import(&mut self, target: &str) {
        let Some(path) = self.locate(target) else {
            tracing::warn!("import '{}' not found on any search path", target);
            return;
        };

        let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
        if !self.loaded.insert(canonical) {
            tracing::warn!("skipping already-loaded import '{}'", target);
            return;
        }

        let source = match fs::read_to_string(&path).map_err(|e| Error::io(&path, e)) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!("failed to load import: {}", err);
                return;
            }
        };

        let name = target.to_string();
        let previous = std::mem::replace(&mut self.filename, name.clone());
        let result = parse_root(&source, self);
        self.filename = previous;

        match result {
            Ok(root) => self.imports.push((name, root)),
            Err(err) => tracing::warn!("failed to parse import '{}': {}", name, err),
        }
    }

    fn locate(&self, target: &str) -> Option<PathBuf> {
        let mut candidates = vec![target.to_string()];
        if Path::new(target).extension().is_none() {
            candidates.insert(0, format!("{target}.less"));
        }

        for candidate in &candidates {
            for dir in &self.search_paths {
                let path = dir.join(candidate);
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }
}

fn parse_root(source: &str, ctx: &mut ParseContext) -> Result<Ruleset> {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);

    let rules = parse_items(&mut parser, ctx).map_err(|e| {
        Error::parse(
            format!("failed to parse '{}': {:?}", ctx.filename, e.kind),
            e.location.line,
            e.location.column,
        )
    })?;

    Ok(Ruleset {
        selectors: vec![],
        rules,
        source: None,
    })
}

/// Parse the items of one block (or the top level).
fn parse_items<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &mut ParseContext,
) -> PResult<'i, Vec<SyntaxNode>> {
    let mut items = vec![];

    loop {
        let state = parser.state();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::Semicolon => {}
            Token::Comment(text) => {
                items.push(SyntaxNode::Comment(Comment {
                    text: text.to_string(),
                    source: ctx.source(),
                }));
            }
            Token::AtKeyword(name) => match name.as_ref().to_ascii_lowercase().as_str() {
                "media" => items.push(parse_media(parser, ctx)?),
                "import" => items.push(parse_import(parser, ctx)?),
                _ => items.push(parse_at_rule(parser, name.as_ref(), ctx)?),
            },
            Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
                return Err(parser.new_unexpected_token_error(token.clone()));
            }
            _ => {
                parser.reset(&state);
                items.push(parse_prelude_item(parser, ctx)?);
            }
        }
    }

    Ok(items)
}

/// Parse an at-rule that is not `@media`/`@import`: a variable binding
/// when a colon follows, otherwise an at-rule this engine does not model.
fn parse_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
    ctx: &ParseContext,
) -> PResult<'i, SyntaxNode> {
    if parser.try_parse(|p| p.expect_colon()).is_err() {
        let _ = parser.parse_until_after(
            Delimiter::Semicolon | Delimiter::CurlyBracketBlock,
            skip_remaining,
        );
        return Ok(SyntaxNode::Unknown {
            kind: format!("@{name}"),
            source: ctx.source(),
        });
    }

    let values = parser.parse_until_after(Delimiter::Semicolon, |p| parse_value_list(p))?;

    Ok(SyntaxNode::Rule(Rule {
        names: vec![format!("@{name}")],
        values,
        variable: true,
        source: ctx.source(),
    }))
}

fn parse_media<'i>(parser: &mut Parser<'i, '_>, ctx: &mut ParseContext) -> PResult<'i, SyntaxNode> {
    let features =
        parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| parse_value_list(p))?;

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        return Err(parser.new_custom_error(()));
    }

    let body = parser.parse_nested_block(|p| parse_items(p, ctx))?;

    Ok(SyntaxNode::Media(Media {
        features,
        body,
        source: ctx.source(),
    }))
}

fn parse_import<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &mut ParseContext,
) -> PResult<'i, SyntaxNode> {
    let target = parser.parse_until_after(Delimiter::Semicolon, |p| {
        p.skip_whitespace();
        let target = match p.next()?.clone() {
            Token::QuotedString(s) => s.as_ref().to_string(),
            Token::UnquotedUrl(u) => u.as_ref().to_string(),
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                p.parse_nested_block(|p| Ok(p.expect_string()?.as_ref().to_string()))?
            }
            token => return Err(p.new_unexpected_token_error(token)),
        };
        // Media qualifiers after the target are tolerated and ignored.
        skip_remaining(p)?;
        Ok(target)
    })?;

    let node = SyntaxNode::Import(Import {
        target: target.clone(),
        source: ctx.source(),
    });
    ctx.load_import(&target);

    Ok(node)
}

/// Parse an item introduced by a selector-like prelude: a declaration,
/// a mixin definition or call, or a nested ruleset.
fn parse_prelude_item<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &mut ParseContext,
) -> PResult<'i, SyntaxNode> {
    if let Ok(rule) = parser.try_parse(|p| parse_declaration(p, ctx)) {
        return Ok(rule);
    }

    if let Ok(mixin) = parser.try_parse(|p| parse_mixin(p, ctx)) {
        return Ok(mixin);
    }

    parse_ruleset(parser, ctx)
}

fn parse_declaration<'i>(
    p: &mut Parser<'i, '_>,
    ctx: &ParseContext,
) -> PResult<'i, SyntaxNode> {
    let name = p.expect_ident()?.as_ref().to_string();
    p.expect_colon()?;

    let values = p.parse_until_before(Delimiter::Semicolon | Delimiter::CurlyBracketBlock, |p| {
        parse_value_list(p)
    })?;

    // A declaration ends at a semicolon or the end of the block; a curly
    // bracket here means the prelude was a selector (e.g. `a:hover {`).
    match p.next() {
        Ok(Token::Semicolon) | Err(_) => {}
        Ok(_) => return Err(p.new_custom_error(())),
    }

    if values.is_empty() {
        return Err(p.new_custom_error(()));
    }

    Ok(SyntaxNode::Rule(Rule {
        names: vec![name],
        values,
        variable: false,
        source: ctx.source(),
    }))
}

fn parse_mixin<'i>(p: &mut Parser<'i, '_>, ctx: &mut ParseContext) -> PResult<'i, SyntaxNode> {
    match p.next()?.clone() {
        Token::Delim('.') => {}
        token => return Err(p.new_unexpected_token_error(token)),
    }

    match p.next()?.clone() {
        Token::Function(name) => {
            let name = format!(".{name}");
            let args = p.parse_nested_block(parse_mixin_args)?;

            match p.next() {
                Ok(Token::CurlyBracketBlock) => {
                    let rules = p.parse_nested_block(|p| parse_items(p, ctx))?;
                    let params = args.iter().map(ValueExpression::to_source).collect();
                    Ok(SyntaxNode::MixinDefinition(MixinDefinition {
                        name,
                        params,
                        body: Ruleset {
                            selectors: vec![],
                            rules,
                            source: None,
                        },
                        source: ctx.source(),
                    }))
                }
                Ok(Token::Semicolon) | Err(_) => Ok(SyntaxNode::MixinCall(MixinCall {
                    name,
                    arguments: args,
                    source: ctx.source(),
                })),
                Ok(_) => Err(p.new_custom_error(())),
            }
        }
        Token::Ident(name) => {
            let name = format!(".{name}");
            match p.next() {
                Ok(Token::Semicolon) | Err(_) => Ok(SyntaxNode::MixinCall(MixinCall {
                    name,
                    arguments: vec![],
                    source: ctx.source(),
                })),
                Ok(_) => Err(p.new_custom_error(())),
            }
        }
        token => Err(p.new_unexpected_token_error(token)),
    }
}

fn parse_mixin_args<'i>(p: &mut Parser<'i, '_>) -> PResult<'i, Vec<ValueExpression>> {
    let mut args = vec![];

    loop {
        p.skip_whitespace();
        if p.is_exhausted() {
            break;
        }

        let group = p.parse_until_before(Delimiter::Comma | Delimiter::Semicolon, |p| {
            parse_value_group(p)
        })?;
        if let Some(expr) = group {
            args.push(expr);
        }

        match p.next() {
            Ok(Token::Comma) | Ok(Token::Semicolon) => {}
            _ => break,
        }
    }

    Ok(args)
}

fn parse_ruleset<'i>(
    parser: &mut Parser<'i, '_>,
    ctx: &mut ParseContext,
) -> PResult<'i, SyntaxNode> {
    let filename = ctx.filename.clone();
    let selectors = parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        parse_selector_list(p, &filename)
    })?;

    if selectors.is_empty() {
        return Err(parser.new_custom_error(()));
    }

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        return Err(parser.new_custom_error(()));
    }

    let rules = parser.parse_nested_block(|p| parse_items(p, ctx))?;

    Ok(SyntaxNode::Ruleset(Ruleset {
        selectors,
        rules,
        source: None,
    }))
}

fn parse_selector_list<'i>(
    p: &mut Parser<'i, '_>,
    filename: &str,
) -> PResult<'i, Vec<Selector>> {
    let mut selectors = vec![];
    let mut current: Vec<SelectorElement> = vec![];

    loop {
        let token = match p.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comma => {
                if !current.is_empty() {
                    selectors.push(Selector {
                        elements: std::mem::take(&mut current),
                    });
                }
            }
            Token::Ident(name) => current.push(element(name.as_ref(), filename)),
            Token::Delim('.') => {
                let name = p.expect_ident()?.as_ref().to_string();
                current.push(element(format!(".{name}"), filename));
            }
            Token::Delim('&') => current.push(element("&", filename)),
            Token::Delim('*') => current.push(element("*", filename)),
            Token::Delim(c @ ('>' | '+' | '~')) => current.push(element(c.to_string(), filename)),
            Token::IDHash(id) => current.push(element(format!("#{id}"), filename)),
            Token::Hash(id) => current.push(element(format!("#{id}"), filename)),
            Token::Colon => {
                let name = p.expect_ident()?.as_ref().to_string();
                current.push(element(format!(":{name}"), filename));
            }
            Token::SquareBracketBlock => {
                let inner = p.parse_nested_block(raw_text)?;
                current.push(element(format!("[{inner}]"), filename));
            }
            token => return Err(p.new_unexpected_token_error(token)),
        }
    }

    if !current.is_empty() {
        selectors.push(Selector { elements: current });
    }

    Ok(selectors)
}

fn element(value: impl Into<String>, filename: &str) -> SelectorElement {
    SelectorElement {
        value: value.into(),
        source: Some(SourceInfo::new(filename)),
    }
}

/// Parse a comma-separated list of value groups.
fn parse_value_list<'i>(p: &mut Parser<'i, '_>) -> PResult<'i, Vec<ValueExpression>> {
    let mut values = vec![];

    loop {
        p.skip_whitespace();
        if p.is_exhausted() {
            break;
        }

        let group = p.parse_until_before(Delimiter::Comma, |p| parse_value_group(p))?;
        if let Some(expr) = group {
            values.push(expr);
        }

        if p.try_parse(|p| p.expect_comma()).is_err() {
            break;
        }
    }

    Ok(values)
}

/// Parse one space-separated run of value atoms into an expression.
///
/// A single atom stands alone; a run containing an operator becomes an
/// `Operation` over the atoms; any other multi-atom run collapses into a
/// literal of its joined source text.
fn parse_value_group<'i>(p: &mut Parser<'i, '_>) -> PResult<'i, Option<ValueExpression>> {
    let mut atoms = vec![];
    let mut operator: Option<String> = None;

    loop {
        let token = match p.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Delim(c @ ('+' | '-' | '*' | '/')) => {
                if operator.is_none() {
                    operator = Some(c.to_string());
                }
            }
            Token::Ident(name) => atoms.push(ValueExpression::Literal(name.as_ref().to_string())),
            Token::QuotedString(s) => {
                atoms.push(ValueExpression::Literal(s.as_ref().to_string()));
            }
            Token::Number {
                int_value, value, ..
            } => atoms.push(ValueExpression::Literal(num_text(int_value, value))),
            Token::Percentage {
                int_value,
                unit_value,
                ..
            } => atoms.push(ValueExpression::Literal(format!(
                "{}%",
                num_text(int_value, unit_value * 100.0)
            ))),
            Token::Dimension {
                int_value,
                value,
                unit,
                ..
            } => atoms.push(ValueExpression::Literal(format!(
                "{}{}",
                num_text(int_value, value),
                unit
            ))),
            Token::Hash(s) | Token::IDHash(s) => {
                atoms.push(ValueExpression::Literal(format!("#{s}")));
            }
            Token::AtKeyword(name) => {
                atoms.push(ValueExpression::NamedReference(format!("@{name}")));
            }
            Token::UnquotedUrl(u) => atoms.push(ValueExpression::Literal(format!("url({u})"))),
            Token::Function(name) => {
                let name = name.as_ref().to_string();
                let args = p.parse_nested_block(parse_mixin_args)?;
                let rendered = args
                    .iter()
                    .map(ValueExpression::to_source)
                    .collect::<Vec<_>>()
                    .join(", ");
                atoms.push(ValueExpression::Literal(format!("{name}({rendered})")));
            }
            Token::ParenthesisBlock => {
                let inner = p.parse_nested_block(|p| parse_value_group(p))?;
                if let Some(inner) = inner {
                    atoms.push(ValueExpression::Wrapper(Box::new(inner)));
                }
            }
            Token::Colon => atoms.push(ValueExpression::Literal(":".into())),
            other => atoms.push(ValueExpression::Literal(other.to_css_string())),
        }
    }

    let expr = match (atoms.len(), operator) {
        (0, _) => None,
        (1, None) => atoms.pop(),
        (_, Some(op)) => Some(ValueExpression::Operation {
            operands: atoms,
            operator: op,
        }),
        (_, None) => Some(ValueExpression::Literal(join_atoms(&atoms))),
    };

    Ok(expr)
}

fn num_text(int_value: Option<i32>, value: f32) -> String {
    match int_value {
        Some(i) => i.to_string(),
        None => value.to_string(),
    }
}

/// Join rendered atoms with spaces, gluing colons to the preceding atom.
fn join_atoms(atoms: &[ValueExpression]) -> String {
    let mut out = String::new();
    for atom in atoms {
        let text = atom.to_source();
        if text == ":" {
            out.push(':');
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}

/// Consume everything left in the current scope.
fn skip_remaining<'i>(p: &mut Parser<'i, '_>) -> PResult<'i, ()> {
    while p.next().is_ok() {}
    Ok(())
}

/// Render everything left in the current scope back to CSS text.
fn raw_text<'i>(p: &mut Parser<'i, '_>) -> PResult<'i, String> {
    let mut text = String::new();
    while let Ok(token) = p.next_including_whitespace() {
        text.push_str(&token.to_css_string());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<ParseOutput> {
        LessParser::new().parse(source, &ParseOptions::default())
    }

    fn parse_ok(source: &str) -> ParseOutput {
        parse(source).expect("source should parse")
    }

    #[test]
    fn simple_ruleset_with_declaration() {
        let output = parse_ok(".a { color: blue; }");

        assert_eq!(output.root.rules.len(), 1);
        let SyntaxNode::Ruleset(ruleset) = &output.root.rules[0] else {
            panic!("expected ruleset");
        };
        assert_eq!(ruleset.selectors.len(), 1);
        assert_eq!(ruleset.selectors[0].elements[0].value, ".a");

        let SyntaxNode::Rule(rule) = &ruleset.rules[0] else {
            panic!("expected rule");
        };
        assert_eq!(rule.names, vec!["color"]);
        assert_eq!(rule.values, vec![ValueExpression::Literal("blue".into())]);
        assert!(!rule.variable);
        assert_eq!(rule.source.as_ref().unwrap().filename, "input");
    }

    #[test]
    fn variable_binding_is_flagged() {
        let output = parse_ok("@primary: #336699;");

        let SyntaxNode::Rule(rule) = &output.root.rules[0] else {
            panic!("expected rule");
        };
        assert!(rule.variable);
        assert_eq!(rule.names, vec!["@primary"]);
        assert_eq!(
            rule.values,
            vec![ValueExpression::Literal("#336699".into())]
        );
    }

    #[test]
    fn variable_reference_parses_as_named_reference() {
        let output = parse_ok(".a { color: @primary; }");

        let SyntaxNode::Ruleset(ruleset) = &output.root.rules[0] else {
            panic!("expected ruleset");
        };
        let SyntaxNode::Rule(rule) = &ruleset.rules[0] else {
            panic!("expected rule");
        };
        assert_eq!(
            rule.values,
            vec![ValueExpression::NamedReference("@primary".into())]
        );
    }

    #[test]
    fn operator_value_parses_as_operation() {
        let output = parse_ok("@half: @width / 2;");

        let SyntaxNode::Rule(rule) = &output.root.rules[0] else {
            panic!("expected rule");
        };
        assert_eq!(
            rule.values,
            vec![ValueExpression::Operation {
                operands: vec![
                    ValueExpression::NamedReference("@width".into()),
                    ValueExpression::Literal("2".into()),
                ],
                operator: "/".into(),
            }]
        );
    }

    #[test]
    fn nested_rulesets_and_comments() {
        let output = parse_ok("/* header */ .a { .b { color: red; } }");

        let SyntaxNode::Comment(comment) = &output.root.rules[0] else {
            panic!("expected comment");
        };
        assert_eq!(comment.text, " header ");

        let SyntaxNode::Ruleset(outer) = &output.root.rules[1] else {
            panic!("expected ruleset");
        };
        assert!(matches!(&outer.rules[0], SyntaxNode::Ruleset(_)));
    }

    #[test]
    fn media_block_keeps_features_and_body() {
        let output = parse_ok("@media screen and (max-width: 768px) { .a { color: red; } }");

        let SyntaxNode::Media(media) = &output.root.rules[0] else {
            panic!("expected media");
        };
        assert_eq!(media.features.len(), 1);
        assert_eq!(media.body.len(), 1);
        assert_eq!(
            crate::resolve::resolve_list(&media.features),
            "screen and (max-width: 768px)"
        );
    }

    #[test]
    fn mixin_definition_and_call() {
        let output = parse_ok(".rounded(@radius) { border-radius: @radius; } .a { .rounded(4px); }");

        let SyntaxNode::MixinDefinition(definition) = &output.root.rules[0] else {
            panic!("expected mixin definition");
        };
        assert_eq!(definition.name, ".rounded");
        assert_eq!(definition.params, vec!["@radius"]);
        assert_eq!(definition.body.rules.len(), 1);

        let SyntaxNode::Ruleset(ruleset) = &output.root.rules[1] else {
            panic!("expected ruleset");
        };
        let SyntaxNode::MixinCall(call) = &ruleset.rules[0] else {
            panic!("expected mixin call");
        };
        assert_eq!(call.name, ".rounded");
        assert_eq!(call.arguments, vec![ValueExpression::Literal("4px".into())]);
    }

    #[test]
    fn parameterless_mixin_call() {
        let output = parse_ok(".a { .reset; }");

        let SyntaxNode::Ruleset(ruleset) = &output.root.rules[0] else {
            panic!("expected ruleset");
        };
        let SyntaxNode::MixinCall(call) = &ruleset.rules[0] else {
            panic!("expected mixin call");
        };
        assert_eq!(call.name, ".reset");
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn unmodeled_at_rule_becomes_unknown() {
        let output = parse_ok("@charset \"utf-8\"; .a { color: blue; }");

        assert!(matches!(
            &output.root.rules[0],
            SyntaxNode::Unknown { kind, .. } if kind == "@charset"
        ));
        assert!(matches!(&output.root.rules[1], SyntaxNode::Ruleset(_)));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = parse("a { color }").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn import_without_search_paths_stays_a_leaf() {
        let output = parse_ok("@import \"missing.less\"; .a { color: blue; }");

        assert!(matches!(
            &output.root.rules[0],
            SyntaxNode::Import(import) if import.target == "missing.less"
        ));
        assert!(output.imports.is_empty());
    }

    #[test]
    fn import_is_resolved_against_search_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mixins.less"), "@accent: red;").unwrap();

        let opts = ParseOptions {
            search_paths: vec![dir.path().to_path_buf()],
            entry_name: "entry.less".into(),
        };
        let output = LessParser::new()
            .parse("@import \"mixins.less\"; .a { color: @accent; }", &opts)
            .unwrap();

        assert_eq!(output.imports.len(), 1);
        assert_eq!(output.imports[0].0, "mixins.less");
        let SyntaxNode::Rule(rule) = &output.imports[0].1.rules[0] else {
            panic!("expected rule");
        };
        assert!(rule.variable);
        assert_eq!(rule.source.as_ref().unwrap().filename, "mixins.less");
    }

    #[test]
    fn import_extension_defaults_to_less() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme.less"), ".t { color: teal; }").unwrap();

        let opts = ParseOptions {
            search_paths: vec![dir.path().to_path_buf()],
            entry_name: "entry.less".into(),
        };
        let output = LessParser::new().parse("@import \"theme\";", &opts).unwrap();

        assert_eq!(output.imports.len(), 1);
        assert_eq!(output.imports[0].0, "theme");
    }

    #[test]
    fn multi_part_values_are_comma_separated() {
        let output = parse_ok(".a { font-family: Helvetica, sans-serif; }");

        let SyntaxNode::Ruleset(ruleset) = &output.root.rules[0] else {
            panic!("expected ruleset");
        };
        let SyntaxNode::Rule(rule) = &ruleset.rules[0] else {
            panic!("expected rule");
        };
        assert_eq!(
            rule.values,
            vec![
                ValueExpression::Literal("Helvetica".into()),
                ValueExpression::Literal("sans-serif".into()),
            ]
        );
    }
}
