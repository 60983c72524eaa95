//! Configuration for the level runner
//!
//! - **state**: ConfigState, the session config and its derived level list
//! - **init**: one-time initialization of a ConfigState
//! - **settings**: RunSettings, the JSON file the host populates state from

pub mod init;
pub mod settings;
pub mod state;

// Re-export commonly used types
pub use init::{initialize, initialize_aligned};
pub use settings::RunSettings;
pub use state::ConfigState;
