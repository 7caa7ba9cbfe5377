pub mod mapping;

mod auth_gateway;
mod client;
mod disk;
mod models;
mod pending_queue;
mod probe;
mod report_store;
mod session_store;
mod user_directory;

pub use auth_gateway::HttpAuthGateway;
pub use client::build_http_client;
pub use pending_queue::JsonFileQueue;
pub use probe::HttpProbe;
pub use report_store::HttpReportStore;
pub use session_store::JsonFileSessionStore;
pub use user_directory::JsonFileUserDirectory;
