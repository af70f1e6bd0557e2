//! Typed events emitted during a tree walk.

mod bus;

pub use bus::{EventBus, HandlerId};

use std::fmt;

use crate::ast::{
    Comment, Import, Media, MixinCall, MixinDefinition, Rule, Ruleset, Selector, SelectorElement,
    SyntaxNode,
};

/// The kind of a structural notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Root,
    Ruleset,
    Selectors,
    Selector,
    Rule,
    Variable,
    Mixin,
    MixinDefinition,
    MixinCall,
    Media,
    Comment,
    Import,
}

impl EventKind {
    /// All event kinds, in dispatcher emission precedence order.
    pub const ALL: [EventKind; 12] = [
        EventKind::Root,
        EventKind::Ruleset,
        EventKind::Selectors,
        EventKind::Selector,
        EventKind::Rule,
        EventKind::Variable,
        EventKind::Mixin,
        EventKind::MixinDefinition,
        EventKind::MixinCall,
        EventKind::Media,
        EventKind::Comment,
        EventKind::Import,
    ];
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Ruleset => "ruleset",
            Self::Selectors => "selectors",
            Self::Selector => "selector",
            Self::Rule => "rule",
            Self::Variable => "variable",
            Self::Mixin => "mixin",
            Self::MixinDefinition => "mixin-definition",
            Self::MixinCall => "mixin-call",
            Self::Media => "media",
            Self::Comment => "comment",
            Self::Import => "import",
        };
        f.write_str(name)
    }
}

/// An immutable record of derived fields plus a back-reference to the
/// originating node for advanced consumers.
///
/// Events borrow from the tree being walked; observers that need to keep
/// data past the walk derive owned values from the payload fields.
#[derive(Debug)]
pub enum Event<'a> {
    /// Start of a file walk.
    Root { name: String, raw: &'a Ruleset },
    /// A ruleset block (root, nested or mixin body).
    Ruleset { raw: &'a Ruleset },
    /// A selector attached to a ruleset.
    Selectors { raw: &'a Selector },
    /// One element of a selector, in source order.
    Selector {
        name: String,
        raw: &'a SelectorElement,
    },
    /// A plain declaration.
    Rule {
        name: String,
        value: String,
        raw: &'a Rule,
    },
    /// A variable binding; `value` is the defining source text.
    Variable {
        name: String,
        value: String,
        raw: &'a Rule,
    },
    /// Any mixin node, emitted before the kind-specific event.
    Mixin { raw: &'a SyntaxNode },
    /// A mixin definition.
    MixinDefinition {
        name: String,
        params: String,
        raw: &'a MixinDefinition,
    },
    /// A mixin invocation.
    MixinCall {
        name: String,
        args: Vec<String>,
        raw: &'a MixinCall,
    },
    /// A media block.
    Media { features: String, raw: &'a Media },
    /// A comment.
    Comment { value: String, raw: &'a Comment },
    /// An import statement (never recursed into).
    Import { raw: &'a Import },
}

impl Event<'_> {
    /// The kind this event is delivered under.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Root { .. } => EventKind::Root,
            Event::Ruleset { .. } => EventKind::Ruleset,
            Event::Selectors { .. } => EventKind::Selectors,
            Event::Selector { .. } => EventKind::Selector,
            Event::Rule { .. } => EventKind::Rule,
            Event::Variable { .. } => EventKind::Variable,
            Event::Mixin { .. } => EventKind::Mixin,
            Event::MixinDefinition { .. } => EventKind::MixinDefinition,
            Event::MixinCall { .. } => EventKind::MixinCall,
            Event::Media { .. } => EventKind::Media,
            Event::Comment { .. } => EventKind::Comment,
            Event::Import { .. } => EventKind::Import,
        }
    }
}
