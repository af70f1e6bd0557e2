//! The parser collaborator interface and the bundled LESS parser.
//!
//! The engine treats the parser as opaque: given source text, an ordered
//! list of import search paths and a logical entry name, it returns a root
//! tree plus the trees of every imported file, or an error.

mod less_parser;

pub use less_parser::LessParser;

use std::path::PathBuf;

use crate::Result;
use crate::ast::Ruleset;

/// Options handed to the parser collaborator.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Directories searched for imported files, in order.
    pub search_paths: Vec<PathBuf>,
    /// Logical entry name, used for diagnostics and root naming.
    pub entry_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            search_paths: vec![],
            entry_name: "input".into(),
        }
    }
}

/// The result of one parse invocation.
#[derive(Debug)]
pub struct ParseOutput {
    /// The tree for the input text itself.
    pub root: Ruleset,
    /// Trees of imported files, in the order they were reported.
    pub imports: Vec<(String, Ruleset)>,
}

/// Input collaborator: turns source text into syntax trees.
pub trait Parse {
    /// Parse source text into a root tree plus per-import trees.
    fn parse(&self, source: &str, opts: &ParseOptions) -> Result<ParseOutput>;
}
