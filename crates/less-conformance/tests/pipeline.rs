//! End-to-end pipeline tests: chunked input through parse, walk and
//! event delivery.

use std::cell::RefCell;
use std::rc::Rc;

use less_conformance::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}

/// Records every event kind it sees, as compact labels.
struct Recorder {
    log: Rc<RefCell<Vec<String>>>,
}

impl Task for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn subscriptions(&self) -> &[EventKind] {
        &EventKind::ALL
    }

    fn on_event(&mut self, event: &Event<'_>) {
        let line = match event {
            Event::Root { name, .. } => format!("root {name}"),
            Event::Ruleset { .. } => "ruleset".to_string(),
            Event::Selectors { .. } => "selectors".to_string(),
            Event::Selector { name, .. } => format!("selector {name}"),
            Event::Rule { name, value, .. } => format!("rule {name}={value}"),
            Event::Variable { name, value, .. } => format!("variable {name}={value}"),
            Event::Mixin { .. } => "mixin".to_string(),
            Event::MixinDefinition { name, .. } => format!("mixin-definition {name}"),
            Event::MixinCall { name, .. } => format!("mixin-call {name}"),
            Event::Media { features, .. } => format!("media {features}"),
            Event::Comment { value, .. } => format!("comment{value}"),
            Event::Import { .. } => "import".to_string(),
        };
        self.log.borrow_mut().push(line);
    }
}

#[test]
fn chunked_input_is_echoed_and_walked() {
    init_tracing();

    let mut pipeline = StreamPipeline::new(PipelineOptions::default(), vec![]);
    let log = Rc::new(RefCell::new(vec![]));
    pipeline
        .register(Recorder {
            log: Rc::clone(&log),
        })
        .unwrap();

    pipeline.write(".").unwrap();
    pipeline.write("a{color:blue;}").unwrap();
    let summary = pipeline.finish();

    // Both chunks echoed unchanged.
    assert_eq!(pipeline.sink().as_slice(), b".a{color:blue;}");
    assert!(summary.is_clean());

    let log = log.borrow();
    let count = |prefix: &str| log.iter().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("ruleset"), 1);
    assert_eq!(count("selectors"), 1);
    assert_eq!(count("selector ."), 1);
    assert!(log.contains(&"selector .a".to_string()));
    assert!(log.contains(&"rule color=blue".to_string()));
}

#[test]
fn passthrough_survives_a_parse_failure() {
    init_tracing();

    let mut pipeline = StreamPipeline::new(PipelineOptions::default(), vec![]);
    let log = Rc::new(RefCell::new(vec![]));
    pipeline
        .register(Recorder {
            log: Rc::clone(&log),
        })
        .unwrap();

    pipeline.write("a { color }").unwrap();
    let summary = pipeline.finish();

    // One error signal, one completion, and no structural events.
    assert!(summary.error.is_some());
    assert!(
        !log.borrow()
            .iter()
            .any(|l| l.starts_with("rule") || l.starts_with("ruleset"))
    );
}

#[test]
fn basic_rule_yields_name_and_value() {
    init_tracing();

    // Mirrors the canonical case: one rule, name "color", value "blue".
    let mut pipeline = StreamPipeline::new(PipelineOptions::default(), vec![]);
    let rules = Rc::new(RefCell::new(vec![]));
    let sink = Rc::clone(&rules);
    pipeline.bus().on(EventKind::Rule, move |event| {
        if let Event::Rule { name, value, raw } = event {
            sink.borrow_mut()
                .push((name.clone(), value.clone(), raw.variable));
        }
    });

    pipeline.write(".a { color: blue; }").unwrap();
    let summary = pipeline.finish();

    assert!(summary.is_clean());
    assert_eq!(
        *rules.borrow(),
        vec![("color".to_string(), "blue".to_string(), false)]
    );
}

#[test]
fn debug_task_installs_and_observes_a_full_walk() {
    init_tracing();

    let mut pipeline = StreamPipeline::new(PipelineOptions::default(), vec![]);
    pipeline.register(DebugTask::new()).unwrap();

    pipeline
        .write("@accent: #f00; .a { color: @accent; .b { margin: 0; } }")
        .unwrap();
    let summary = pipeline.finish();

    assert!(summary.is_clean());
    pipeline.destroy_tasks();
}

#[test]
fn imports_walk_in_reported_order_with_their_own_root_events() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.less"), ".a { color: red; }").unwrap();
    std::fs::write(dir.path().join("b.less"), ".b { color: green; }").unwrap();

    let opts = PipelineOptions {
        search_paths: vec![dir.path().to_path_buf()],
        entry_name: "entry.less".into(),
        ..PipelineOptions::default()
    };
    let mut pipeline = StreamPipeline::new(opts, vec![]);
    let log = Rc::new(RefCell::new(vec![]));
    pipeline
        .register(Recorder {
            log: Rc::clone(&log),
        })
        .unwrap();

    pipeline
        .write("@import \"a.less\";\n@import \"b.less\";\n.c { color: blue; }")
        .unwrap();
    let summary = pipeline.finish();

    assert!(summary.is_clean());
    assert_eq!(
        summary.files_walked,
        vec!["entry.less", "a.less", "b.less"]
    );

    let roots: Vec<_> = log
        .borrow()
        .iter()
        .filter(|l| l.starts_with("root"))
        .cloned()
        .collect();
    assert_eq!(roots, vec!["root entry.less", "root a.less", "root b.less"]);
}
