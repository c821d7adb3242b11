pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod health;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::WidgetConfig;
pub use error::{Result, TransportError, WidgetError};
