mod attempt;
pub mod auth;
pub mod concurrency;
mod conditions;
mod error;
pub mod events;
pub mod http;
pub mod metrics;
mod runner;

pub use metrics::{ExecutionMetrics, MetricsCollector, MetricsEventSink};

pub use auth::{NoTokenProvider, TokenProvider};
pub use error::ExecutionError;
pub use events::{CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use runner::Executor;
