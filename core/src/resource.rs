//! Asynchronous resource client: build, execute, parse.
//!
//! Every call is single-shot. A failure at any step comes back as a
//! `NetworkError`; nothing is retried here.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::Config;
use crate::error::NetworkError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Todo, UpdateTodo};

#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            client: TodoClient::new(&config.base_url, config.user_id),
            transport,
        }
    }

    pub fn user_id(&self) -> u64 {
        self.client.user_id()
    }

    pub async fn list_items(&self) -> Result<Vec<Todo>, NetworkError> {
        let response = self.send(self.client.build_list_todos()).await?;
        let todos = self.client.parse_list_todos(response)?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    pub async fn create_item(&self, title: &str) -> Result<Todo, NetworkError> {
        let request = self.client.build_create_todo(title)?;
        let todo = self.client.parse_create_todo(self.send(request).await?)?;
        debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    pub async fn update_item(&self, id: u64, input: &UpdateTodo) -> Result<Todo, NetworkError> {
        let request = self.client.build_update_todo(id, input)?;
        Ok(self.client.parse_update_todo(self.send(request).await?)?)
    }

    pub async fn delete_item(&self, id: u64) -> Result<(), NetworkError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)?;
        debug!(id, "deleted todo");
        Ok(())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        debug!(method, %path, "sending request");
        self.transport.execute(request).await.map_err(|e| {
            warn!(method, %path, error = %e, "request failed");
            NetworkError::from(e)
        })
    }
}
