use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub user_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub user_id: Option<u64>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub user_id: Option<u64>,
}

/// Items keyed by id; ids are handed out in increasing order starting at 1,
/// so iteration order is creation order.
#[derive(Debug)]
pub struct Store {
    next_id: u64,
    todos: BTreeMap<u64, Todo>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            todos: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>, Query(owner): Query<Owner>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let todos: Vec<Todo> = store
        .todos
        .values()
        .filter(|todo| owner.user_id.is_none_or(|user_id| todo.user_id == user_id))
        .cloned()
        .collect();
    debug!(count = todos.len(), user_id = ?owner.user_id, "list");
    Json(todos)
}

async fn create_todo(
    State(db): State<Db>,
    Query(owner): Query<Owner>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let user_id = input
        .user_id
        .or(owner.user_id)
        .ok_or(StatusCode::BAD_REQUEST)?;
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let todo = Todo {
        id,
        title: input.title,
        completed: input.completed,
        user_id,
    };
    store.todos.insert(id, todo.clone());
    debug!(id, user_id, "create");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
