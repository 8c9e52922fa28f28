//! Client core for a single-user todo list backed by a remote `/todos`
//! resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A host plugs in a
//! `Transport`; `ResourceClient` runs build → execute → parse, and `Session`
//! drives the `TodoList` state machine around those calls.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url` and `user_id`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoList` is pure: `begin_*` enters the in-flight state, `complete_*`
//!   reconciles with the settled result.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod list;
pub mod notice;
pub mod resource;
pub mod session;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::{Config, ConfigError};
pub use error::{ApiError, NetworkError};
pub use filter::{Filter, ParseFilterError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::TodoList;
pub use notice::{ErrorMessage, Notice, ERROR_DISPLAY};
pub use resource::ResourceClient;
pub use session::Session;
pub use transport::{Transport, TransportError};
pub use types::{NewTodo, Todo, UpdateTodo, PLACEHOLDER_ID};
pub use view::{ErrorBanner, Footer, NewTodoField, Row, ViewModel};
