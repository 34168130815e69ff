//! HTTP handlers for random-service.

pub mod health;
pub mod metrics;
pub mod random;
pub mod root;

pub use health::health_check;
pub use random::get_random_number;
pub use root::api_info;
pub use self::metrics::metrics;
