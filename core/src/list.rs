//! The list view-controller as a pure state machine.
//!
//! # Design
//! Every user action that needs the network is split in two. `begin_*` moves
//! the list into its in-flight state and returns what must be sent (or
//! nothing, when the action is rejected locally). `complete_*` takes the
//! settled outcome and reconciles. Between the two a front end can render the
//! pending state; `Session` runs both halves around the actual call.
//!
//! Outside an in-flight request `items` holds exactly the server-confirmed
//! set. The placeholder lives beside the list, never in it.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::NetworkError;
use crate::filter::Filter;
use crate::notice::{ErrorMessage, Notice};
use crate::types::{Todo, UpdateTodo};

#[derive(Debug, Clone)]
pub struct TodoList {
    user_id: u64,
    items: Vec<Todo>,
    filter: Filter,
    title: String,
    placeholder: Option<Todo>,
    clearing: bool,
    deleting: BTreeSet<u64>,
    updating: BTreeSet<u64>,
    focus_requested: bool,
    pub(crate) notice: Notice,
}

impl TodoList {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            filter: Filter::All,
            title: String::new(),
            placeholder: None,
            clearing: false,
            deleting: BTreeSet::new(),
            updating: BTreeSet::new(),
            focus_requested: false,
            notice: Notice::default(),
        }
    }

    // --- queries ---

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn visible(&self) -> impl Iterator<Item = &Todo> + '_ {
        let filter = self.filter;
        self.items.iter().filter(move |todo| filter.matches(todo))
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn placeholder(&self) -> Option<&Todo> {
        self.placeholder.as_ref()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    pub fn all_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|todo| todo.completed)
    }

    /// An add or a clear is in flight; the input and bulk actions are locked.
    pub fn is_busy(&self) -> bool {
        self.placeholder.is_some() || self.clearing
    }

    /// The row shows a loader and offers no remove button.
    pub fn is_pending(&self, id: u64) -> bool {
        self.deleting.contains(&id) || self.updating.contains(&id)
    }

    pub fn error(&self) -> Option<ErrorMessage> {
        self.notice.message()
    }

    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    /// Returns whether focus was requested and resets the request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    // --- local actions ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn dismiss_error(&mut self) {
        self.notice.dismiss();
    }

    // --- load ---

    pub fn complete_load(&mut self, result: Result<Vec<Todo>, NetworkError>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                debug!(error = %e, "load failed");
                self.items.clear();
                self.notice.show(ErrorMessage::LoadTodos);
            }
        }
    }

    // --- add ---

    /// Returns the trimmed title to submit, or `None` if nothing must be sent.
    pub fn begin_add(&mut self) -> Option<String> {
        if self.is_busy() {
            return None;
        }
        let title = self.title.trim();
        if title.is_empty() {
            self.notice.show(ErrorMessage::EmptyTitle);
            return None;
        }
        let title = title.to_string();
        self.placeholder = Some(Todo::placeholder(title.clone(), self.user_id));
        self.notice.dismiss();
        Some(title)
    }

    pub fn complete_add(&mut self, result: Result<Todo, NetworkError>) {
        match result {
            Ok(todo) => {
                self.upsert(todo);
                self.title.clear();
            }
            Err(e) => {
                debug!(error = %e, "add failed");
                self.notice.show(ErrorMessage::AddTodo);
            }
        }
        self.placeholder = None;
    }

    // --- delete ---

    /// Returns `false` for unknown ids and rows that already have a request
    /// outstanding.
    pub fn begin_delete(&mut self, id: u64) -> bool {
        if !self.contains(id) || self.is_pending(id) {
            return false;
        }
        self.deleting.insert(id);
        true
    }

    pub fn complete_delete(&mut self, id: u64, result: Result<(), NetworkError>) {
        match result {
            Ok(()) => {
                self.items.retain(|todo| todo.id != id);
                self.focus_requested = true;
            }
            Err(e) => {
                debug!(id, error = %e, "delete failed");
                self.notice.show(ErrorMessage::DeleteTodo);
            }
        }
        self.deleting.remove(&id);
    }

    // --- toggle ---

    pub fn begin_toggle(&mut self, id: u64) -> Option<UpdateTodo> {
        if self.is_pending(id) {
            return None;
        }
        let completed = self.items.iter().find(|todo| todo.id == id)?.completed;
        self.updating.insert(id);
        Some(UpdateTodo::completed(!completed))
    }

    pub fn complete_toggle(&mut self, id: u64, result: Result<Todo, NetworkError>) {
        match result {
            Ok(todo) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id == id) {
                    *slot = todo;
                }
            }
            Err(e) => {
                debug!(id, error = %e, "toggle failed");
                self.notice.show(ErrorMessage::UpdateTodo);
            }
        }
        self.updating.remove(&id);
    }

    // --- clear completed ---

    /// Ids of every completed item, now marked as deleting. Empty when there
    /// is nothing to clear or another bulk action is running.
    pub fn begin_clear_completed(&mut self) -> Vec<u64> {
        if self.is_busy() {
            return Vec::new();
        }
        let ids: Vec<u64> = self
            .items
            .iter()
            .filter(|todo| todo.completed && !self.is_pending(todo.id))
            .map(|todo| todo.id)
            .collect();
        if ids.is_empty() {
            return ids;
        }
        self.clearing = true;
        self.deleting.extend(ids.iter().copied());
        ids
    }

    /// Removes exactly the items whose delete succeeded. Failures are not
    /// rolled back and produce a single message.
    pub fn complete_clear_completed(&mut self, outcomes: Vec<(u64, Result<(), NetworkError>)>) {
        let mut failed = 0usize;
        for (id, result) in outcomes {
            match result {
                Ok(()) => self.items.retain(|todo| todo.id != id),
                Err(e) => {
                    debug!(id, error = %e, "clear completed: delete failed");
                    failed += 1;
                }
            }
            self.deleting.remove(&id);
        }
        if failed > 0 {
            self.notice.show(ErrorMessage::DeleteTodo);
        }
        self.clearing = false;
        self.focus_requested = true;
    }

    fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|todo| todo.id == id)
    }

    fn upsert(&mut self, todo: Todo) {
        match self.items.iter_mut().find(|item| item.id == todo.id) {
            Some(slot) => *slot = todo,
            None => self.items.push(todo),
        }
    }
}
