//! Intent schema builder - model, slot type registry and interactive session

pub mod config;
pub mod error;
pub mod input;
pub mod schema;
pub mod session;
pub mod slot_type;

pub use config::{Config, LoggingConfig, PROJECT_CONFIG_FILE, SessionConfig};
pub use error::{Error, Result};
pub use input::{InputReader, LineReader};
pub use schema::{Document, Intent, Origin, Slot};
pub use session::{Confirmation, Session};
pub use slot_type::{BUILTIN_SLOT_TYPES, Registry, SlotTypeEntry, SlotTypeSelector, SlotTypes};
