//! Command implementations.

pub mod config;
pub mod inspect;
pub mod rules;
pub mod run;

pub use self::config::execute_config;
pub use self::inspect::execute_inspect;
pub use self::rules::execute_rules;
pub use self::run::execute_run;
