//! Pluggable observers of the event bus and their lifecycle.

mod debug;

pub use debug::DebugTask;

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{Event, EventBus, EventKind, HandlerId};
use crate::{Error, Result};

/// A stateful subscriber bound to one event bus for its lifetime.
///
/// A task declares the event kinds it cares about up front through an
/// explicit subscription table; the registry wires the bus handlers, no
/// runtime introspection is involved. Tasks own no tree data, only what
/// they derive from event payloads.
pub trait Task {
    /// Human-readable task name, used in diagnostics.
    fn name(&self) -> &str;

    /// The event kinds this task subscribes to.
    fn subscriptions(&self) -> &[EventKind];

    /// Precondition check, run before any subscription is made.
    ///
    /// An error here is fatal at registration time; the task is never
    /// partially installed.
    fn install(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle one event. Called for every kind in the subscription table.
    fn on_event(&mut self, event: &Event<'_>);

    /// Teardown hook, run after the registry has unsubscribed the task.
    fn destroy(&mut self) {}
}

struct Registered {
    task: Rc<RefCell<dyn Task>>,
    handles: Vec<(EventKind, HandlerId)>,
}

/// Lifecycle manager for tasks observing one event bus.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Vec<Registered>,
}

impl TaskRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task against a bus.
    ///
    /// Runs the task's [`Task::install`] precondition first and subscribes
    /// nothing if it fails, surfacing the error synchronously.
    pub fn register(&mut self, bus: &EventBus, mut task: impl Task + 'static) -> Result<()> {
        let name = task.name().to_string();
        task.install().map_err(|err| match err {
            Error::TaskInstall { .. } => err,
            other => Error::task_install(&name, other.to_string()),
        })?;

        tracing::debug!("registering task '{}'", name);

        let kinds = task.subscriptions().to_vec();
        let task: Rc<RefCell<dyn Task>> = Rc::new(RefCell::new(task));
        let mut handles = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let task = Rc::clone(&task);
            let id = bus.on(kind, move |event| task.borrow_mut().on_event(event));
            handles.push((kind, id));
        }

        self.tasks.push(Registered { task, handles });
        Ok(())
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether no tasks are registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Unsubscribe and tear down every registered task.
    ///
    /// Calling this twice, or without any registration, is a no-op.
    pub fn destroy_all(&mut self, bus: &EventBus) {
        for mut registered in self.tasks.drain(..) {
            for (kind, id) in registered.handles.drain(..) {
                bus.off(kind, id);
            }
            registered.task.borrow_mut().destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        kinds: Rc<RefCell<Vec<EventKind>>>,
        destroyed: Rc<RefCell<bool>>,
        fail_install: bool,
    }

    impl Task for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn subscriptions(&self) -> &[EventKind] {
            &[EventKind::Rule, EventKind::Comment]
        }

        fn install(&mut self) -> Result<()> {
            if self.fail_install {
                return Err(Error::task_install("recorder", "missing configuration"));
            }
            Ok(())
        }

        fn on_event(&mut self, event: &Event<'_>) {
            self.kinds.borrow_mut().push(event.kind());
        }

        fn destroy(&mut self) {
            *self.destroyed.borrow_mut() = true;
        }
    }

    fn comment_event(raw: &crate::ast::Comment) -> Event<'_> {
        Event::Comment {
            value: raw.text.clone(),
            raw,
        }
    }

    #[test]
    fn registered_task_receives_subscribed_kinds() {
        let bus = EventBus::new();
        let mut registry = TaskRegistry::new();
        let kinds = Rc::new(RefCell::new(vec![]));

        registry
            .register(
                &bus,
                Recorder {
                    kinds: Rc::clone(&kinds),
                    destroyed: Rc::new(RefCell::new(false)),
                    fail_install: false,
                },
            )
            .unwrap();

        let raw = crate::ast::Comment {
            text: "note".into(),
            source: None,
        };
        bus.emit(&comment_event(&raw));

        assert_eq!(*kinds.borrow(), vec![EventKind::Comment]);
    }

    #[test]
    fn install_failure_subscribes_nothing() {
        let bus = EventBus::new();
        let mut registry = TaskRegistry::new();

        let err = registry
            .register(
                &bus,
                Recorder {
                    kinds: Rc::new(RefCell::new(vec![])),
                    destroyed: Rc::new(RefCell::new(false)),
                    fail_install: true,
                },
            )
            .unwrap_err();

        assert!(matches!(err, Error::TaskInstall { .. }));
        assert_eq!(bus.handler_count(EventKind::Rule), 0);
        assert_eq!(bus.handler_count(EventKind::Comment), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn destroy_all_unsubscribes_and_is_idempotent() {
        let bus = EventBus::new();
        let mut registry = TaskRegistry::new();
        let destroyed = Rc::new(RefCell::new(false));

        registry
            .register(
                &bus,
                Recorder {
                    kinds: Rc::new(RefCell::new(vec![])),
                    destroyed: Rc::clone(&destroyed),
                    fail_install: false,
                },
            )
            .unwrap();

        registry.destroy_all(&bus);
        assert!(*destroyed.borrow());
        assert_eq!(bus.handler_count(EventKind::Rule), 0);

        // Second teardown is a no-op.
        registry.destroy_all(&bus);
        assert!(registry.is_empty());
    }
}
