//! Event-driven conformance engine for LESS-style stylesheets.
//!
//! This crate walks an already-parsed stylesheet syntax tree and republishes
//! it as a stream of typed events that independent observers subscribe to:
//!
//! - **Tree walking**: Depth-first, kind-dispatching traversal of rulesets,
//!   rules, variables, mixins, media blocks, comments and imports
//! - **Events**: An ordered, synchronous publish/subscribe bus keyed by
//!   event kind
//! - **Tasks**: A plugin lifecycle for observers of the event bus
//! - **Streaming**: A pipeline that buffers chunked input, parses once on
//!   end-of-input and walks the resulting trees
//! - **Parsing**: A bundled `cssparser`-backed LESS parser collaborator
//!
//! # Example
//!
//! ```ignore
//! use less_conformance::prelude::*;
//!
//! let mut pipeline = StreamPipeline::new(PipelineOptions::default(), std::io::stdout());
//! pipeline.register(DebugTask::new())?;
//!
//! pipeline.write(".a { color: blue; }")?;
//! let summary = pipeline.finish();
//! assert!(summary.is_clean());
//! ```

pub mod ast;
pub mod events;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod task;
pub mod walk;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::ast::{
        Comment, Import, Media, MixinCall, MixinDefinition, Rule, Ruleset, Selector,
        SelectorElement, SourceInfo, SyntaxNode, ValueExpression,
    };
    pub use crate::events::{Event, EventBus, EventKind, HandlerId};
    pub use crate::parser::{LessParser, Parse, ParseOptions, ParseOutput};
    pub use crate::pipeline::{FlushSummary, PipelineOptions, StreamPipeline};
    pub use crate::render::{CssRenderer, Render};
    pub use crate::resolve::{UNKNOWN_FILE, resolve, resolve_file_name, resolve_list};
    pub use crate::task::{DebugTask, Task, TaskRegistry};
    pub use crate::walk::TreeWalker;
}
