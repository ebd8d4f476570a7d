//! The host a slider is mounted in: one document, its input hub and its
//! deferred task queue. The gesture methods replay what a browser does for
//! the corresponding user action.

use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

use log::debug;

use crate::{
    dom::{Document, ElementId},
    event::{Event, EventKind, PointerEvent},
    hub::InputHub,
    tasks::TaskQueue,
};

#[derive(Default)]
pub struct Page {
    document: RefCell<Document>,
    hub:      Rc<InputHub>,
    tasks:    TaskQueue,
}

impl Page {
    pub fn new() -> Self { Self::default() }

    /// Panics if called while a listener holds [`Page::document_mut`].
    pub fn document(&self) -> Ref<'_, Document> { self.document.borrow() }

    pub fn document_mut(&self) -> RefMut<'_, Document> { self.document.borrow_mut() }

    pub fn hub(&self) -> &Rc<InputHub> { &self.hub }

    pub fn tasks(&self) -> &TaskQueue { &self.tasks }

    /// Queues `task` to run after the current event.
    pub fn schedule(&self, task: impl FnOnce(&Page) + 'static) { self.tasks.push(Box::new(task)) }

    /// Drains the task queue, including tasks queued by the tasks it runs.
    pub fn run_pending_tasks(&self) -> usize {
        let mut ran = 0;

        while let Some(task) = self.tasks.pop() {
            task(self);
            ran += 1;
        }

        if ran > 0 {
            debug!("ran {} deferred task(s)", ran);
        }

        ran
    }

    /// Delivers `event` to its target's listeners and hands it back so the
    /// caller can see whether the default action was prevented.
    pub fn dispatch(&self, mut event: Event) -> Event {
        self.hub.dispatch(self, &mut event);
        event
    }

    /// Replaces the value of `target` and fires `input`, as typing or
    /// dragging a range thumb would.
    pub fn type_into(&self, target: ElementId, text: &str) {
        self.document_mut().set_value(target, text);
        self.dispatch(Event::new(EventKind::Input, target));
    }

    /// Presses the primary button over `target`. Returns true if a listener
    /// prevented the default action.
    pub fn mouse_down(&self, target: ElementId, client_x: f64) -> bool {
        self.dispatch(Event::new(EventKind::MouseDown, target).with_client_x(client_x)).default_prevented()
    }

    pub fn mouse_move(&self, client_x: f64) { self.hub.dispatch_pointer_move(self, &PointerEvent { client_x }) }

    pub fn mouse_up(&self, client_x: f64) { self.hub.dispatch_pointer_release(self, &PointerEvent { client_x }) }

    /// Native form reset: every control under `form` goes back to its markup
    /// value, then `reset` fires on the form.
    pub fn reset_form(&self, form: ElementId) {
        self.document_mut().reset_form_controls(form);
        self.dispatch(Event::new(EventKind::Reset, form));
    }
}
