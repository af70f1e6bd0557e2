//! Recursive tree walk and kind dispatch.
//!
//! The walker is pure: no I/O, no buffering, no mutation of the tree. It
//! classifies every node, derives event payloads through the resolvers and
//! publishes them on the bus. Walking the same tree twice produces an
//! identical event sequence.

use crate::ast::{Media, MixinCall, MixinDefinition, Rule, Ruleset, SyntaxNode};
use crate::events::{Event, EventBus};
use crate::resolve::{resolve, resolve_file_name, resolve_list};
use crate::{Error, Result};

/// Depth-first walker over a stylesheet syntax tree.
pub struct TreeWalker<'bus> {
    bus: &'bus EventBus,
    strict: bool,
}

impl<'bus> TreeWalker<'bus> {
    /// Create a walker publishing on `bus`, tolerant of unknown node kinds.
    pub fn new(bus: &'bus EventBus) -> Self {
        Self { bus, strict: false }
    }

    /// Set strict dispatch: an unrecognized node kind aborts the walk
    /// instead of being logged and skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Walk a root tree.
    ///
    /// Emits one `Root` event carrying the resolved file name (the root's
    /// own structural event), then dispatches every child. Every reachable
    /// ruleset, media body and mixin body is visited exactly once.
    pub fn walk(&self, root: &Ruleset) -> Result<()> {
        self.bus.emit(&Event::Root {
            name: resolve_file_name(root),
            raw: root,
        });

        self.process_selectors(root);

        for node in &root.rules {
            self.dispatch(node)?;
        }

        Ok(())
    }

    /// Classify a node and route it to its handler.
    fn dispatch(&self, node: &SyntaxNode) -> Result<()> {
        match node {
            SyntaxNode::Import(import) => {
                // Imports are leaves: expansion, if any, happened upstream.
                self.bus.emit(&Event::Import { raw: import });
                Ok(())
            }
            SyntaxNode::MixinDefinition(definition) => {
                self.bus.emit(&Event::Mixin { raw: node });
                self.process_mixin_definition(definition)
            }
            SyntaxNode::MixinCall(call) => {
                self.bus.emit(&Event::Mixin { raw: node });
                self.process_mixin_call(call);
                Ok(())
            }
            SyntaxNode::Comment(comment) => {
                self.bus.emit(&Event::Comment {
                    value: comment.text.clone(),
                    raw: comment,
                });
                Ok(())
            }
            SyntaxNode::Media(media) => self.process_media(media),
            SyntaxNode::Ruleset(ruleset) => self.process_ruleset(ruleset),
            SyntaxNode::Rule(rule) if rule.variable => {
                self.process_variable(rule);
                Ok(())
            }
            SyntaxNode::Rule(rule) => {
                self.process_rule(rule);
                Ok(())
            }
            SyntaxNode::Unknown { kind, .. } => {
                if self.strict {
                    return Err(Error::unrecognized_node(kind));
                }
                tracing::warn!("node kind not recognized, skipping: {}", kind);
                Ok(())
            }
        }
    }

    fn process_ruleset(&self, ruleset: &Ruleset) -> Result<()> {
        self.bus.emit(&Event::Ruleset { raw: ruleset });

        self.process_selectors(ruleset);

        for node in &ruleset.rules {
            self.dispatch(node)?;
        }

        Ok(())
    }

    fn process_selectors(&self, ruleset: &Ruleset) {
        for selector in &ruleset.selectors {
            self.bus.emit(&Event::Selectors { raw: selector });
            for element in &selector.elements {
                self.bus.emit(&Event::Selector {
                    name: element.value.clone(),
                    raw: element,
                });
            }
        }
    }

    fn process_rule(&self, rule: &Rule) {
        self.bus.emit(&Event::Rule {
            name: rule.names.join(", "),
            value: resolve_list(&rule.values),
            raw: rule,
        });
    }

    fn process_variable(&self, rule: &Rule) {
        // A bound variable's defining text is itself meaningful; render it
        // back to source form instead of reducing it.
        let value = rule
            .values
            .iter()
            .map(|expr| expr.to_source())
            .collect::<Vec<_>>()
            .join(", ");

        self.bus.emit(&Event::Variable {
            name: rule.names.join(", "),
            value,
            raw: rule,
        });
    }

    fn process_mixin_definition(&self, definition: &MixinDefinition) -> Result<()> {
        self.bus.emit(&Event::MixinDefinition {
            name: definition.name.clone(),
            params: definition.params.join(", "),
            raw: definition,
        });

        self.process_ruleset(&definition.body)
    }

    fn process_mixin_call(&self, call: &MixinCall) {
        // Arguments reduce through the value resolver; the call site itself
        // is never recursed into.
        let args = call
            .arguments
            .iter()
            .filter_map(|expr| {
                let resolved = resolve(expr);
                if resolved.is_none() {
                    tracing::warn!("cannot resolve mixin argument: {:?}", expr);
                }
                resolved
            })
            .collect();

        self.bus.emit(&Event::MixinCall {
            name: call.name.clone(),
            args,
            raw: call,
        });
    }

    fn process_media(&self, media: &Media) -> Result<()> {
        self.bus.emit(&Event::Media {
            features: resolve_list(&media.features),
            raw: media,
        });

        for node in &media.body {
            self.dispatch(node)?;
        }

        Ok(())
    }
}
