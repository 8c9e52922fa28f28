//! Asynchronous driver tying a `TodoList` to a `ResourceClient`.
//!
//! # Design
//! Actions take `&self`, so a host can keep several in flight (an add, a
//! delete on another row) and still apply local changes such as a filter
//! switch while they wait. The list sits behind a mutex that is only held for
//! the synchronous `begin_*`/`complete_*` steps, never across a network
//! await. Network failures end at this boundary: they are logged and turned
//! into the list's error message, never returned.
//!
//! Views go out on a `watch` channel after every transition, so a render task
//! sees the latest state without ever touching the lock.

use std::sync::{Mutex, PoisonError};

use futures::future::join_all;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::filter::Filter;
use crate::list::TodoList;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use crate::view::ViewModel;

pub struct Session<T> {
    resource: ResourceClient<T>,
    list: Mutex<TodoList>,
    views: watch::Sender<ViewModel>,
}

impl<T: Transport> Session<T> {
    pub fn new(resource: ResourceClient<T>) -> Self {
        let list = TodoList::new(resource.user_id());
        let (views, _) = watch::channel(list.view());
        Self {
            resource,
            list: Mutex::new(list),
            views,
        }
    }

    /// A copy of the current list state.
    pub fn snapshot(&self) -> TodoList {
        self.lock().clone()
    }

    pub fn view(&self) -> ViewModel {
        self.lock().view()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.views.subscribe()
    }

    #[instrument(skip(self))]
    pub async fn load(&self) {
        let result = self.resource.list_items().await;
        if let Err(e) = &result {
            warn!(error = %e, "unable to load todos");
        }
        self.update(move |list| list.complete_load(result));
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.update(move |list| list.set_title(title));
    }

    /// Submits the current input text.
    #[instrument(skip(self))]
    pub async fn add(&self) {
        let Some(title) = self.update(TodoList::begin_add) else {
            return;
        };

        let result = self.resource.create_item(&title).await;
        match &result {
            Ok(todo) => info!(id = todo.id, "todo added"),
            Err(e) => warn!(error = %e, "unable to add a todo"),
        }
        self.update(move |list| list.complete_add(result));
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) {
        if !self.update(|list| list.begin_delete(id)) {
            return;
        }

        let result = self.resource.delete_item(id).await;
        if let Err(e) = &result {
            warn!(id, error = %e, "unable to delete a todo");
        }
        self.update(move |list| list.complete_delete(id, result));
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self, id: u64) {
        let Some(update) = self.update(|list| list.begin_toggle(id)) else {
            return;
        };

        let result = self.resource.update_item(id, &update).await;
        if let Err(e) = &result {
            warn!(id, error = %e, "unable to update a todo");
        }
        self.update(move |list| list.complete_toggle(id, result));
    }

    /// Deletes every completed item concurrently and waits for all of them,
    /// whatever their outcome.
    #[instrument(skip(self))]
    pub async fn clear_completed(&self) {
        let ids = self.update(TodoList::begin_clear_completed);
        if ids.is_empty() {
            return;
        }

        let results = join_all(ids.iter().map(|id| self.resource.delete_item(*id))).await;
        let outcomes: Vec<_> = ids.into_iter().zip(results).collect();

        let failed = outcomes.iter().filter(|(_, result)| result.is_err()).count();
        if failed > 0 {
            warn!(failed, total = outcomes.len(), "unable to delete some completed todos");
        }
        self.update(move |list| list.complete_clear_completed(outcomes));
    }

    pub fn set_filter(&self, filter: Filter) {
        self.update(|list| list.set_filter(filter));
    }

    pub fn dismiss_error(&self) {
        self.update(TodoList::dismiss_error);
    }

    /// Returns whether a focus request was pending and clears it.
    pub fn take_focus_request(&self) -> bool {
        self.update(TodoList::take_focus_request)
    }

    /// Runs one synchronous step and publishes the resulting view before the
    /// lock is released, so published views never go backwards.
    fn update<R>(&self, step: impl FnOnce(&mut TodoList) -> R) -> R {
        let mut list = self.lock();
        let out = step(&mut list);
        self.views.send_replace(list.view());
        out
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TodoList> {
        self.list.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
