use std::{cell::RefCell, collections::VecDeque};

use crate::page::Page;

pub type Task = Box<dyn FnOnce(&Page)>;

/// Work deferred until the current event has been fully handled.
///
/// The host drains the queue between events (see [`Page::run_pending_tasks`]),
/// so a task always observes the state left behind by the event that queued
/// it. There is no cancellation.
#[derive(Default)]
pub struct TaskQueue {
    queue: RefCell<VecDeque<Task>>,
}

impl TaskQueue {
    pub fn new() -> Self { Self::default() }

    pub fn push(&self, task: Task) { self.queue.borrow_mut().push_back(task) }

    pub fn pop(&self) -> Option<Task> { self.queue.borrow_mut().pop_front() }

    pub fn len(&self) -> usize { self.queue.borrow().len() }

    pub fn is_empty(&self) -> bool { self.queue.borrow().is_empty() }
}
