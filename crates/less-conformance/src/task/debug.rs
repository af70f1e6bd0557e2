//! Debug task: logs a readable trace of the walk.

use super::Task;
use crate::ast::SyntaxNode;
use crate::events::{Event, EventKind};

/// A task that logs root, ruleset, selector, rule and variable events
/// through `tracing`, including per-ruleset counts of immediate
/// sub-rulesets, variables and plain rules derived from the raw node.
#[derive(Debug, Default)]
pub struct DebugTask;

impl DebugTask {
    /// Create a debug task.
    pub fn new() -> Self {
        Self
    }
}

const SUBSCRIPTIONS: [EventKind; 5] = [
    EventKind::Root,
    EventKind::Rule,
    EventKind::Ruleset,
    EventKind::Selector,
    EventKind::Variable,
];

impl Task for DebugTask {
    fn name(&self) -> &str {
        "debug"
    }

    fn subscriptions(&self) -> &[EventKind] {
        &SUBSCRIPTIONS
    }

    fn on_event(&mut self, event: &Event<'_>) {
        match event {
            Event::Root { name, .. } => {
                tracing::info!("[debug] file {}", name);
            }
            Event::Rule { name, value, .. } => {
                tracing::info!("[debug] rule {} : {}", name, value);
            }
            Event::Ruleset { raw } => {
                let rulesets = raw
                    .rules
                    .iter()
                    .filter(|node| matches!(node, SyntaxNode::Ruleset(_)))
                    .count();
                let variables = raw
                    .rules
                    .iter()
                    .filter(|node| matches!(node, SyntaxNode::Rule(rule) if rule.variable))
                    .count();
                let rules = raw
                    .rules
                    .iter()
                    .filter(|node| matches!(node, SyntaxNode::Rule(rule) if !rule.variable))
                    .count();
                tracing::info!(
                    "[debug] ruleset: {} sub-rulesets, {} variables, {} rules",
                    rulesets,
                    variables,
                    rules
                );
            }
            Event::Selector { name, .. } => {
                tracing::info!("[debug] selector {}", name);
            }
            Event::Variable { name, value, .. } => {
                tracing::info!("[debug] variable {} = {}", name, value);
            }
            _ => {}
        }
    }
}
