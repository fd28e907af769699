mod decision;

pub use decision::{backoff_delay, effective_config, should_retry};
