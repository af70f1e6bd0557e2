//! The serializer collaborator: renders a tree back to output text.
//!
//! Only invoked when the pipeline runs in compiling mode.

use crate::ast::{Rule, Ruleset, Selector, SyntaxNode};

/// Output collaborator: renders a parsed tree to text.
pub trait Render {
    /// Render a root tree to output text.
    fn render(&self, root: &Ruleset) -> String;
}

/// A plain re-serializer.
///
/// Writes the tree back out with normalized indentation. This is not a
/// compiler: variables, mixins and operations are re-emitted as written,
/// not evaluated.
#[derive(Debug, Default)]
pub struct CssRenderer;

impl CssRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_nodes(&self, nodes: &[SyntaxNode], depth: usize, out: &mut String) {
        for node in nodes {
            match node {
                SyntaxNode::Ruleset(ruleset) => {
                    self.push_line(out, depth, &self.selectors_text(&ruleset.selectors));
                    out.push_str(" {\n");
                    self.render_nodes(&ruleset.rules, depth + 1, out);
                    self.push_line(out, depth, "}");
                    out.push('\n');
                }
                SyntaxNode::Rule(rule) => {
                    self.push_line(out, depth, &self.rule_text(rule));
                    out.push('\n');
                }
                SyntaxNode::MixinDefinition(definition) => {
                    self.push_line(
                        out,
                        depth,
                        &format!("{}({})", definition.name, definition.params.join(", ")),
                    );
                    out.push_str(" {\n");
                    self.render_nodes(&definition.body.rules, depth + 1, out);
                    self.push_line(out, depth, "}");
                    out.push('\n');
                }
                SyntaxNode::MixinCall(call) => {
                    let args = call
                        .arguments
                        .iter()
                        .map(|expr| expr.to_source())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.push_line(out, depth, &format!("{}({});", call.name, args));
                    out.push('\n');
                }
                SyntaxNode::Media(media) => {
                    let features = media
                        .features
                        .iter()
                        .map(|expr| expr.to_source())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.push_line(out, depth, &format!("@media {features}"));
                    out.push_str(" {\n");
                    self.render_nodes(&media.body, depth + 1, out);
                    self.push_line(out, depth, "}");
                    out.push('\n');
                }
                SyntaxNode::Comment(comment) => {
                    self.push_line(out, depth, &format!("/*{}*/", comment.text));
                    out.push('\n');
                }
                SyntaxNode::Import(import) => {
                    self.push_line(out, depth, &format!("@import \"{}\";", import.target));
                    out.push('\n');
                }
                SyntaxNode::Unknown { .. } => {}
            }
        }
    }

    fn selectors_text(&self, selectors: &[Selector]) -> String {
        selectors
            .iter()
            .map(|selector| {
                selector
                    .elements
                    .iter()
                    .map(|element| element.value.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(",\n")
    }

    fn rule_text(&self, rule: &Rule) -> String {
        let value = rule
            .values
            .iter()
            .map(|expr| expr.to_source())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {};", rule.names.join(", "), value)
    }

    fn push_line(&self, out: &mut String, depth: usize, text: &str) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(text);
    }
}

impl Render for CssRenderer {
    fn render(&self, root: &Ruleset) -> String {
        let mut out = String::new();
        self.render_nodes(&root.rules, 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{SelectorElement, ValueExpression};

    #[test]
    fn renders_a_simple_ruleset() {
        let root = Ruleset::root(vec![SyntaxNode::Ruleset(Ruleset {
            selectors: vec![Selector {
                elements: vec![SelectorElement {
                    value: ".a".into(),
                    source: None,
                }],
            }],
            rules: vec![SyntaxNode::Rule(Rule {
                names: vec!["color".into()],
                values: vec![ValueExpression::Literal("blue".into())],
                variable: false,
                source: None,
            })],
            source: None,
        })]);

        let css = CssRenderer::new().render(&root);
        assert_eq!(css, ".a {\n  color: blue;\n}\n");
    }

    #[test]
    fn variables_keep_their_source_form() {
        let root = Ruleset::root(vec![SyntaxNode::Rule(Rule {
            names: vec!["@half".into()],
            values: vec![ValueExpression::Operation {
                operands: vec![
                    ValueExpression::NamedReference("@width".into()),
                    ValueExpression::Literal("2".into()),
                ],
                operator: "/".into(),
            }],
            variable: true,
            source: None,
        })]);

        let css = CssRenderer::new().render(&root);
        assert_eq!(css, "@half: @width / 2;\n");
    }
}
