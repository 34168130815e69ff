pub mod metrics;
pub mod random;

pub use metrics::{get_metrics, init_metrics, record_random_generated};
pub use random::generate_random_number;
