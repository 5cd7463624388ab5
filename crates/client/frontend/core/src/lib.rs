//! Cross-frontend primitives for presenting the board and the user directory.
//!
//! Houses message logging, configuration, and view-model types that both the
//! CLI and future graphical clients can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::{Frontend, FrontendContext};
pub use message::{MessageEntry, MessageLevel, MessageLog, SharedMessageLog};
