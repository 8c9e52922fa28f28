//! Terminal host for the todo client.
//!
//! # Overview
//! Owns everything `todo-core` leaves to the host: the HTTP round-trip
//! (`UreqTransport`), reading commands, and drawing views.
//!
//! Commands go through a `Dispatcher`. Local ones (filter, dismiss, help)
//! take effect before `dispatch` returns; the others run as their own task,
//! so input keeps being read while a request is outstanding.

pub mod command;
pub mod render;
pub mod transport;

use std::ops::ControlFlow;
use std::sync::Arc;

use todo_core::{Session, Transport, ViewModel};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::warn;

pub use command::{Command, CommandError, HELP};
pub use render::render;
pub use transport::UreqTransport;

/// Runs one command to completion.
pub async fn apply<T: Transport>(session: &Session<T>, command: Command) -> ControlFlow<()> {
    match command {
        Command::Add(title) => {
            session.set_title(title);
            session.add().await;
        }
        Command::Delete(id) => session.delete(id).await,
        Command::Toggle(id) => session.toggle(id).await,
        Command::Filter(filter) => session.set_filter(filter),
        Command::ClearCompleted => session.clear_completed().await,
        Command::Dismiss => session.dismiss_error(),
        Command::Help => println!("{HELP}"),
        Command::Quit => return ControlFlow::Break(()),
    }
    // A terminal has no input field to focus.
    session.take_focus_request();
    ControlFlow::Continue(())
}

pub struct Dispatcher<T> {
    session: Arc<Session<T>>,
    actions: JoinSet<()>,
}

impl<T: Transport + 'static> Dispatcher<T> {
    pub fn new(session: Arc<Session<T>>) -> Self {
        Self {
            session,
            actions: JoinSet::new(),
        }
    }

    /// Starts the initial load in the background.
    pub fn load(&mut self) {
        let session = Arc::clone(&self.session);
        self.actions.spawn(async move { session.load().await });
    }

    pub fn dispatch(&mut self, command: Command) -> ControlFlow<()> {
        self.reap();
        match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::Filter(_) | Command::Dismiss | Command::Help => {
                return apply_local(&self.session, command);
            }
            Command::Add(title) => {
                // Set synchronously so later input sees the same field state.
                self.session.set_title(title);
                let session = Arc::clone(&self.session);
                self.actions.spawn(async move {
                    session.add().await;
                    session.take_focus_request();
                });
            }
            command => {
                let session = Arc::clone(&self.session);
                self.actions.spawn(async move {
                    apply(&session, command).await;
                });
            }
        }
        ControlFlow::Continue(())
    }

    /// Waits for every action still in flight.
    pub async fn finish(mut self) {
        while let Some(joined) = self.actions.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "action task failed");
            }
        }
    }

    fn reap(&mut self) {
        while let Some(joined) = self.actions.try_join_next() {
            if let Err(e) = joined {
                warn!(error = %e, "action task failed");
            }
        }
    }
}

fn apply_local<T: Transport>(session: &Session<T>, command: Command) -> ControlFlow<()> {
    match command {
        Command::Filter(filter) => session.set_filter(filter),
        Command::Dismiss => session.dismiss_error(),
        Command::Help => println!("{HELP}"),
        _ => {}
    }
    ControlFlow::Continue(())
}

/// Redraws on every published view, and once more when the error banner
/// runs out.
pub async fn render_loop(mut views: watch::Receiver<ViewModel>) {
    loop {
        let view = views.borrow_and_update().clone();
        let now = Instant::now();
        println!("{}", render(&view, now));

        let expiry = view
            .error
            .as_ref()
            .map(|banner| banner.expires_at)
            .filter(|expires_at| *expires_at > now);
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = sleep_until(expiry) => {}
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
