//! Live preview server for facade sites.
//!
//! Serves the edited template with viewport and selection controls, watches
//! the site file and pushes reloads to connected browsers over WebSocket.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, PreviewQuery, ServerError, ServerState};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
