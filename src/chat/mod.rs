// src/chat/mod.rs
//! Chat session core: transcript model, formatting, and the single-flight
//! exchange state machine. Knows nothing about the terminal.

pub mod format;
pub mod message;
pub mod session;
pub mod view;

pub use format::{format_content, Emphasis, FormattedLine, Segment};
pub use message::{Message, Sender, Transcript};
pub use session::{ChatSession, ExchangeOutcome, PendingExchange, SessionState, APOLOGY};
pub use view::ChatView;
