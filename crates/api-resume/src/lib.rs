mod config;
mod error;
mod openapi;
mod routes;
mod state;

pub use config::ResumeConfig;
pub use error::{ErrorResponse, ResumeError};
pub use openapi::openapi;
pub use routes::router;
