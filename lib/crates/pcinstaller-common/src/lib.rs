pub mod catalog;
pub mod state;
pub mod types;

pub use catalog::{AgentPlugin, CatalogData, CatalogFile, PluginEntry};
pub use state::{AppStates, STATE_FILE_COMMENT, STATE_FILE_VERSION, StateFile, StateMap};
pub use types::*;
