//! Listener registry for one host page.
//!
//! Element listeners are keyed by target and event kind. Pointer movement and
//! release are not element events: anything that tracks a drag registers a
//! [`PointerObserver`] once, and the hub fans every move/release out to the
//! registered observers. A page with many sliders therefore still has one
//! document-level dispatcher.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use log::trace;

use crate::{
    dom::ElementId,
    event::{Event, EventKind, ListenerId, ObserverId, PointerEvent},
    page::Page,
};

pub type Listener = Rc<dyn Fn(&Page, &mut Event)>;

pub fn listener(f: impl Fn(&Page, &mut Event) + 'static) -> Listener { Rc::new(f) }

pub trait PointerObserver {
    fn pointer_moved(&self, page: &Page, event: &PointerEvent);
    fn pointer_released(&self, page: &Page, event: &PointerEvent);
}

struct Registration {
    id:       ListenerId,
    target:   ElementId,
    kind:     EventKind,
    listener: Listener,
}

#[derive(Default)]
pub struct InputHub {
    next_id:   Cell<u64>,
    listeners: RefCell<Vec<Registration>>,
    observers: RefCell<Vec<(ObserverId, Rc<dyn PointerObserver>)>>,
}

impl InputHub {
    pub fn new() -> Self { Self::default() }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn add_listener(&self, target: ElementId, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_id());

        self.listeners.borrow_mut().push(Registration {
            id,
            target,
            kind,
            listener,
        });

        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|r| r.id != id);
        listeners.len() != before
    }

    pub fn has_listener(&self, id: ListenerId) -> bool { self.listeners.borrow().iter().any(|r| r.id == id) }

    pub fn listener_count(&self) -> usize { self.listeners.borrow().len() }

    pub fn listener_count_for(&self, target: ElementId, kind: EventKind) -> usize {
        self.listeners.borrow().iter().filter(|r| r.target == target && r.kind == kind).count()
    }

    pub fn add_observer(&self, observer: Rc<dyn PointerObserver>) -> ObserverId {
        let id = ObserverId::new(self.next_id());
        self.observers.borrow_mut().push((id, observer));
        id
    }

    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(o, _)| *o != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize { self.observers.borrow().len() }

    /// Runs the listeners registered for the event's target and kind, in
    /// registration order. Listeners removed by an earlier listener during the
    /// same dispatch are skipped; ones added during it wait for the next event.
    pub fn dispatch(&self, page: &Page, event: &mut Event) -> usize {
        let snapshot = self
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.target == event.target && r.kind == event.kind)
            .map(|r| (r.id, r.listener.clone()))
            .collect::<Vec<_>>();

        trace!("dispatch {} on {}: {} listener(s)", event.kind, event.target, snapshot.len());

        let mut invoked = 0;

        for (id, listener) in snapshot {
            if self.has_listener(id) {
                listener(page, event);
                invoked += 1;
            }
        }

        invoked
    }

    pub fn dispatch_pointer_move(&self, page: &Page, event: &PointerEvent) {
        for observer in self.observer_snapshot() {
            observer.pointer_moved(page, event);
        }
    }

    pub fn dispatch_pointer_release(&self, page: &Page, event: &PointerEvent) {
        for observer in self.observer_snapshot() {
            observer.pointer_released(page, event);
        }
    }

    fn observer_snapshot(&self) -> Vec<Rc<dyn PointerObserver>> {
        self.observers.borrow().iter().map(|(_, o)| o.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        moves:    Cell<u32>,
        releases: Cell<u32>,
    }

    impl PointerObserver for Counter {
        fn pointer_moved(&self, _: &Page, _: &PointerEvent) { self.moves.set(self.moves.get() + 1) }
        fn pointer_released(&self, _: &Page, _: &PointerEvent) { self.releases.set(self.releases.get() + 1) }
    }

    #[test]
    fn dispatch_matches_target_and_kind() {
        let page = Page::new();
        let root = page.document().root();
        let target = page.document_mut().append_new(root, "input", &[]);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        page.hub().add_listener(target, EventKind::Input, listener(move |_, _| h.set(h.get() + 1)));

        page.dispatch(Event::new(EventKind::Input, target));
        page.dispatch(Event::new(EventKind::Reset, target));
        page.dispatch(Event::new(EventKind::Input, root));

        assert_eq!(hits.get(), 1);
        assert_eq!(page.hub().listener_count_for(target, EventKind::Input), 1);
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let page = Page::new();
        let target = page.document().root();
        let hub = page.hub().clone();
        let second_ran = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(None));

        let s = second.clone();
        hub.add_listener(
            target,
            EventKind::Input,
            listener(move |page, _| {
                if let Some(id) = s.get() {
                    page.hub().remove_listener(id);
                }
            }),
        );

        let ran = second_ran.clone();
        second.set(Some(hub.add_listener(target, EventKind::Input, listener(move |_, _| ran.set(true)))));

        let mut event = Event::new(EventKind::Input, target);
        assert_eq!(hub.dispatch(&page, &mut event), 1);
        assert!(!second_ran.get());
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn observers_receive_pointer_events_until_removed() {
        let page = Page::new();
        let counter = Rc::new(Counter {
            moves:    Cell::new(0),
            releases: Cell::new(0),
        });
        let id = page.hub().add_observer(counter.clone());

        page.mouse_move(10.0);
        page.mouse_up(10.0);
        assert!(page.hub().remove_observer(id));
        assert!(!page.hub().remove_observer(id));
        page.mouse_move(20.0);

        assert_eq!((counter.moves.get(), counter.releases.get()), (1, 1));
        assert_eq!(page.hub().observer_count(), 0);
    }
}
