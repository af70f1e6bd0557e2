//! Streaming adapter: buffers chunked input, parses once per flush and
//! walks the resulting trees.
//!
//! The pipeline owns one event bus and one task registry; a bus is never
//! shared across pipelines. The walk itself is pure recursion, the only
//! suspension points are chunk arrival and the end-of-input signal, both
//! driven by the caller.

use std::io::Write;
use std::path::PathBuf;

use crate::events::EventBus;
use crate::parser::{LessParser, Parse, ParseOptions, ParseOutput};
use crate::render::{CssRenderer, Render};
use crate::task::{Task, TaskRegistry};
use crate::walk::TreeWalker;
use crate::{Error, Result};

/// Configuration for a stream pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directories searched for imported files, in order.
    pub search_paths: Vec<PathBuf>,
    /// Logical entry name, used for diagnostics and root naming.
    pub entry_name: String,
    /// Push rendered output after a successful parse instead of echoing
    /// input chunks.
    pub compiling: bool,
    /// Echo raw input chunks downstream as they arrive.
    pub streaming_passthrough: bool,
    /// Raise on an unrecognized node kind instead of logging and skipping.
    pub strict_dispatch: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            search_paths: vec![],
            entry_name: "input".into(),
            compiling: false,
            streaming_passthrough: true,
            strict_dispatch: false,
        }
    }
}

/// The outcome of one flush.
///
/// Returning this value is the pipeline's completion signal: it is reached
/// exactly once per [`StreamPipeline::finish`] call, whether or not an
/// error signal preceded it.
#[derive(Debug, Default)]
pub struct FlushSummary {
    /// The parse failure, if the flush's single parse failed.
    pub error: Option<Error>,
    /// Per-file walk failures (strict dispatch); a failure in one file
    /// does not abort walking the others.
    pub walk_errors: Vec<(String, Error)>,
    /// Files walked to completion, in walk order.
    pub files_walked: Vec<String>,
    /// Rendered output, when compiling mode is active and the parse
    /// succeeded.
    pub compiled: Option<String>,
}

impl FlushSummary {
    /// Whether the flush completed without any error signal.
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.walk_errors.is_empty()
    }
}

/// Buffers ordered input chunks and, on the end-of-input signal, runs one
/// parse-and-walk cycle over the accumulated text.
pub struct StreamPipeline<W: Write> {
    opts: PipelineOptions,
    buffer: String,
    bus: EventBus,
    registry: TaskRegistry,
    parser: Box<dyn Parse>,
    renderer: Box<dyn Render>,
    sink: W,
}

impl<W: Write> StreamPipeline<W> {
    /// Create a pipeline with the bundled parser and renderer.
    pub fn new(opts: PipelineOptions, sink: W) -> Self {
        Self::with_collaborators(opts, Box::new(LessParser::new()), Box::new(CssRenderer::new()), sink)
    }

    /// Create a pipeline with explicit collaborators.
    pub fn with_collaborators(
        opts: PipelineOptions,
        parser: Box<dyn Parse>,
        renderer: Box<dyn Render>,
        sink: W,
    ) -> Self {
        Self {
            opts,
            buffer: String::new(),
            bus: EventBus::new(),
            registry: TaskRegistry::new(),
            parser,
            renderer,
            sink,
        }
    }

    /// The event bus scoped to this pipeline.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// The downstream sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Register a task against this pipeline's bus.
    ///
    /// A failed installation precondition surfaces here synchronously.
    pub fn register(&mut self, task: impl Task + 'static) -> Result<()> {
        self.registry.register(&self.bus, task)
    }

    /// Accept one input chunk.
    ///
    /// Chunks accumulate into the flush buffer. In passthrough mode the
    /// chunk is also echoed downstream immediately, regardless of what the
    /// eventual parse will make of it; compiling mode suppresses the echo.
    pub fn write(&mut self, chunk: &str) -> Result<()> {
        self.buffer.push_str(chunk);

        if self.opts.streaming_passthrough && !self.opts.compiling {
            self.sink
                .write_all(chunk.as_bytes())
                .map_err(Error::Stream)?;
        }

        Ok(())
    }

    /// End-of-input signal: parse the accumulated text exactly once and
    /// walk the root tree plus every imported tree in reported order.
    ///
    /// The buffer is reset for reuse. A parse failure is recorded as the
    /// error signal and skips all walking; completion (the return) is
    /// still reached.
    pub fn finish(&mut self) -> FlushSummary {
        let source = std::mem::take(&mut self.buffer);
        let mut summary = FlushSummary::default();

        let parse_opts = ParseOptions {
            search_paths: self.opts.search_paths.clone(),
            entry_name: self.opts.entry_name.clone(),
        };

        let ParseOutput { root, imports } = match self.parser.parse(&source, &parse_opts) {
            Ok(output) => output,
            Err(err) => {
                tracing::error!("parse failed for '{}': {}", self.opts.entry_name, err);
                summary.error = Some(err);
                return summary;
            }
        };

        let walker = TreeWalker::new(&self.bus).strict(self.opts.strict_dispatch);

        for (name, tree) in std::iter::once((self.opts.entry_name.as_str(), &root))
            .chain(imports.iter().map(|(name, tree)| (name.as_str(), tree)))
        {
            match walker.walk(tree) {
                Ok(()) => summary.files_walked.push(name.to_string()),
                Err(err) => {
                    tracing::error!("walk aborted for '{}': {}", name, err);
                    summary.walk_errors.push((name.to_string(), err));
                }
            }
        }

        if self.opts.compiling {
            let css = self.renderer.render(&root);
            if let Err(err) = self.sink.write_all(css.as_bytes()) {
                tracing::error!("failed to push compiled output: {}", err);
            }
            summary.compiled = Some(css);
        }

        summary
    }

    /// Tear down every registered task.
    pub fn destroy_tasks(&mut self) {
        self.registry.destroy_all(&self.bus);
    }
}
