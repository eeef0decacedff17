//! Configuration modules for the TutorBase API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with local-development fallbacks:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`server`]: Listening port
//! - [`uploads`]: Upload directory location

pub mod cors;
pub mod database;
pub mod server;
pub mod uploads;
