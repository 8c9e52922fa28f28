//! Commands dispatched while requests are outstanding.
//!
//! Every request takes five seconds on a paused clock, so anything that
//! happens before the clock moves happened while a request was in flight.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use todo_app::{Command, Dispatcher};
use todo_core::{
    Config, Filter, HttpMethod, HttpRequest, HttpResponse, ResourceClient, Session, Transport,
    TransportError,
};
use tokio::time::Instant;

const LATENCY: Duration = Duration::from_secs(5);

const TWO_TODOS: &str = r#"[
    {"id":1,"title":"a","completed":false,"userId":3582},
    {"id":2,"title":"b","completed":true,"userId":3582}
]"#;

const CREATED: &str = r#"{"id":3,"title":"x","completed":false,"userId":3582}"#;

#[derive(Default)]
struct SlowTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl Transport for SlowTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(LATENCY).await;
        let (status, body) = match request.method {
            HttpMethod::Get => (200, TWO_TODOS),
            HttpMethod::Post => (201, CREATED),
            HttpMethod::Patch | HttpMethod::Delete => (200, "1"),
        };
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }
}

type SlowSession = Session<Arc<SlowTransport>>;

fn dispatcher(transport: &Arc<SlowTransport>) -> (Arc<SlowSession>, Dispatcher<Arc<SlowTransport>>) {
    let config = Config::new("http://slow", 3582);
    let session = Arc::new(Session::new(ResourceClient::new(&config, Arc::clone(transport))));
    (Arc::clone(&session), Dispatcher::new(session))
}

/// Yields until `check` holds. Only for states reached without the clock
/// moving, since a task that keeps yielding stops the paused clock from
/// advancing.
async fn until(check: impl Fn() -> bool) {
    while !check() {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn filter_applies_while_add_is_in_flight() {
    let transport = Arc::new(SlowTransport::default());
    let (session, mut dispatcher) = dispatcher(&transport);
    let started = Instant::now();

    assert!(dispatcher.dispatch(Command::Add("x".to_string())).is_continue());
    until(|| session.snapshot().placeholder().is_some()).await;

    assert!(dispatcher.dispatch(Command::Filter(Filter::Active)).is_continue());
    assert_eq!(session.snapshot().filter(), Filter::Active);
    assert!(session.view().new_todo.disabled);
    assert_eq!(started.elapsed(), Duration::ZERO);

    dispatcher.finish().await;
    assert_eq!(started.elapsed(), LATENCY);
    let list = session.snapshot();
    assert_eq!(list.items().len(), 1);
    assert!(list.placeholder().is_none());
    assert_eq!(list.filter(), Filter::Active);
}

#[tokio::test(start_paused = true)]
async fn deletes_on_different_rows_overlap() {
    let transport = Arc::new(SlowTransport::default());
    let (session, mut dispatcher) = dispatcher(&transport);
    session.load().await;
    assert_eq!(session.snapshot().items().len(), 2);
    let started = Instant::now();
    let calls = transport.calls.load(Ordering::SeqCst);

    dispatcher.dispatch(Command::Delete(1));
    until(|| session.snapshot().is_pending(1)).await;
    // Already deleting: refused without a request.
    dispatcher.dispatch(Command::Delete(1));
    dispatcher.dispatch(Command::Delete(2));
    until(|| session.snapshot().is_pending(2)).await;
    assert_eq!(started.elapsed(), Duration::ZERO);

    dispatcher.finish().await;
    assert_eq!(started.elapsed(), LATENCY);
    assert_eq!(transport.calls.load(Ordering::SeqCst), calls + 2);
    assert!(session.snapshot().items().is_empty());
    assert_eq!(session.snapshot().error(), None);
}
