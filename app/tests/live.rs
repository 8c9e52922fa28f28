//! Drive a `Session` over real HTTP against the mock server.
//!
//! # Design
//! The mock server runs on its own thread and runtime, bound to a random
//! port. Each test gets a fresh server so stores never leak between tests.

use std::ops::ControlFlow;

use todo_app::{apply, Command, UreqTransport};
use todo_core::{Config, ErrorMessage, Filter, ResourceClient, Session};

const USER_ID: u64 = 3582;

fn spawn_server() -> Config {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    Config::new(format!("http://{addr}"), USER_ID)
}

async fn add_all(session: &Session<UreqTransport>, titles: &[&str]) {
    for title in titles {
        let flow = apply(session, Command::Add(title.to_string())).await;
        assert_eq!(flow, ControlFlow::Continue(()));
    }
}

#[tokio::test]
async fn add_toggle_delete_round_trip() {
    let config = spawn_server();
    let session = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    session.load().await;
    assert!(session.snapshot().items().is_empty());
    assert!(session.view().footer.is_none());

    add_all(&session, &["Buy milk", "Walk dog"]).await;
    let ids: Vec<u64> = session.snapshot().items().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|id| *id != 0));

    apply(&session, Command::Toggle(ids[0])).await;
    assert!(session.snapshot().items()[0].completed);

    apply(&session, Command::Filter(Filter::Active)).await;
    let view = session.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].title, "Walk dog");

    // A fresh session sees what the server confirmed.
    let reloaded = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    reloaded.load().await;
    assert_eq!(reloaded.snapshot().items(), session.snapshot().items());

    for id in ids {
        apply(&session, Command::Delete(id)).await;
    }
    assert!(session.snapshot().items().is_empty());
    assert!(session.view().footer.is_none());
    assert_eq!(session.snapshot().error(), None);
}

#[tokio::test]
async fn blank_add_is_rejected() {
    let config = spawn_server();
    let session = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    session.load().await;

    apply(&session, Command::Add("   ".to_string())).await;
    assert_eq!(session.snapshot().error(), Some(ErrorMessage::EmptyTitle));

    let reloaded = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    reloaded.load().await;
    assert!(reloaded.snapshot().items().is_empty());
}

#[tokio::test]
async fn clear_completed_with_one_failure_keeps_that_item() {
    let config = spawn_server();
    let session = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    session.load().await;

    add_all(&session, &["a", "b", "c", "d"]).await;
    let ids: Vec<u64> = session.snapshot().items().iter().map(|t| t.id).collect();
    for id in &ids[..3] {
        apply(&session, Command::Toggle(*id)).await;
    }

    // Someone else removes one of them first, so our delete gets a 404.
    let other = ResourceClient::new(&config, UreqTransport::new());
    other.delete_item(ids[1]).await.unwrap();

    apply(&session, Command::ClearCompleted).await;

    let remaining: Vec<u64> = session.snapshot().items().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![ids[1], ids[3]]);
    assert_eq!(session.snapshot().error(), Some(ErrorMessage::DeleteTodo));
    assert!(!session.view().new_todo.disabled);
}

#[tokio::test]
async fn unreachable_server_shows_load_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::new(format!("http://{addr}"), USER_ID);
    let session = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    session.load().await;

    assert!(session.snapshot().items().is_empty());
    assert_eq!(session.snapshot().error(), Some(ErrorMessage::LoadTodos));
}

#[tokio::test]
async fn quit_breaks_the_loop() {
    let config = spawn_server();
    let session = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    assert_eq!(apply(&session, Command::Quit).await, ControlFlow::Break(()));
}
