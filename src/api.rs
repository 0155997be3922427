pub mod environment;
pub mod error;
pub mod routes;
pub mod session;
pub mod status;
