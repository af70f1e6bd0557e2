//! Syntax tree types produced by the parser collaborator.
//!
//! The tree is read-only for this engine: every walk borrows nodes, nothing
//! is ever mutated or reparented. A root file is an ordinary [`Ruleset`]
//! with an empty selector sequence.

mod value;

pub use value::ValueExpression;

/// Source-location metadata attached to a node.
///
/// Only some nodes (typically leaves) carry this directly; see
/// [`crate::resolve::resolve_file_name`] for the best-effort lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// Name of the originating source file.
    pub filename: String,
}

impl SourceInfo {
    /// Create source info for a file name.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// A block containing optional selectors and an ordered sequence of
/// child nodes. A root file is a ruleset with no selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    /// Selectors this block applies to (empty for a root).
    pub selectors: Vec<Selector>,
    /// Child nodes in source order.
    pub rules: Vec<SyntaxNode>,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

impl Ruleset {
    /// Create a root ruleset (no selectors).
    pub fn root(rules: Vec<SyntaxNode>) -> Self {
        Self {
            selectors: vec![],
            rules,
            source: None,
        }
    }
}

/// A selector: an ordered sequence of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    /// Elements in source order, e.g. `.a`, `:hover`, `>`.
    pub elements: Vec<SelectorElement>,
}

/// One element of a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorElement {
    /// Textual value of the element.
    pub value: String,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// A name/value declaration inside a ruleset.
///
/// A rule flagged as `variable` is a named binding (`@name: value;`)
/// rather than an output declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Name segments in source order.
    pub names: Vec<String>,
    /// Value expressions, one per comma-separated part.
    pub values: Vec<ValueExpression>,
    /// Whether this rule is a variable binding.
    pub variable: bool,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// A reusable rule-block template.
#[derive(Debug, Clone, PartialEq)]
pub struct MixinDefinition {
    /// Mixin name, e.g. `.rounded`.
    pub name: String,
    /// Parameter names in source order.
    pub params: Vec<String>,
    /// The mixin body.
    pub body: Ruleset,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// An invocation of a mixin.
#[derive(Debug, Clone, PartialEq)]
pub struct MixinCall {
    /// Mixin name, e.g. `.rounded`.
    pub name: String,
    /// Argument expressions in source order.
    pub arguments: Vec<ValueExpression>,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// A conditional block gated by a feature-expression list.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    /// Feature expressions, one per comma-separated part.
    pub features: Vec<ValueExpression>,
    /// Body nodes in source order.
    pub body: Vec<SyntaxNode>,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// An inline or block comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Raw comment text (without delimiters).
    pub text: String,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// An import statement. Always a leaf for this engine: the parser
/// collaborator reports imported files as separate trees, imports are
/// never expanded in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    /// The import target as written in the source.
    pub target: String,
    /// Optional source metadata.
    pub source: Option<SourceInfo>,
}

/// A node of the stylesheet syntax tree.
///
/// The variant set is closed; `Unknown` represents node kinds an opaque
/// external parser may report that this engine does not model, which is a
/// genuine external-data condition rather than a classification fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    Ruleset(Ruleset),
    Rule(Rule),
    MixinDefinition(MixinDefinition),
    MixinCall(MixinCall),
    Media(Media),
    Comment(Comment),
    Import(Import),
    Unknown {
        kind: String,
        source: Option<SourceInfo>,
    },
}

impl SyntaxNode {
    /// Source metadata carried directly by this node, if any.
    pub fn source_info(&self) -> Option<&SourceInfo> {
        match self {
            Self::Ruleset(r) => r.source.as_ref(),
            Self::Rule(r) => r.source.as_ref(),
            Self::MixinDefinition(d) => d.source.as_ref(),
            Self::MixinCall(c) => c.source.as_ref(),
            Self::Media(m) => m.source.as_ref(),
            Self::Comment(c) => c.source.as_ref(),
            Self::Import(i) => i.source.as_ref(),
            Self::Unknown { source, .. } => source.as_ref(),
        }
    }

    /// First child of this node, if it has children.
    pub fn first_child(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Ruleset(r) => r.rules.first(),
            Self::Media(m) => m.body.first(),
            Self::MixinDefinition(d) => d.body.rules.first(),
            _ => None,
        }
    }

    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Ruleset(_) => "ruleset",
            Self::Rule(r) if r.variable => "variable",
            Self::Rule(_) => "rule",
            Self::MixinDefinition(_) => "mixin-definition",
            Self::MixinCall(_) => "mixin-call",
            Self::Media(_) => "media",
            Self::Comment(_) => "comment",
            Self::Import(_) => "import",
            Self::Unknown { kind, .. } => kind,
        }
    }
}
