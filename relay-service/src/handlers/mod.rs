pub mod download;
pub mod fallback;
pub mod generate;
pub mod health;
pub mod metrics;
pub mod status;

pub use download::download_artifact;
pub use fallback::api_not_found;
pub use generate::generate;
pub use health::health_check;
pub use metrics::metrics;
pub use status::session_status;
