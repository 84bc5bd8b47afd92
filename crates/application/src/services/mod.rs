pub mod answer_renderer;
pub mod query_executor;
pub mod response_aggregator;
pub mod server_banner;

pub use answer_renderer::AnswerRenderer;
pub use query_executor::{QueryExecutor, ReliableModeGuard};
pub use response_aggregator::ResponseAggregator;
pub use server_banner::ServerBanner;
