//! Configuration and path management for tally-cli

pub mod paths;
pub mod settings;

pub use paths::TallyPaths;
pub use settings::Settings;
