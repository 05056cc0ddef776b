//! Store and query conversation memories on the hosted mem0 service.
//!
//! The two operations, [`add_memory`] and [`query_memory`], take the memory
//! client as an explicit argument so the same code runs against the hosted
//! service and against test doubles.

mod add;
mod error;
mod query;
pub mod render;

/// Re-export for convenience.
pub use recollect_rs_config as config;
/// Re-export for convenience.
pub use recollect_rs_memory as memory;

pub use add::{AddRequest, add_memory, sample_transcript};
pub use error::OperationError;
pub use query::{
    ProjectedMemory, QUERY_TEMPLATE, QueryMode, QueryRequest, project, query_memory,
    query_memory_to,
};

/// User the sample transcript and default query belong to.
pub const DEFAULT_USER_ID: &str = "Vikas";

/// Initialize env_logger at INFO, letting `RUST_LOG` override.
///
/// Logs go to stderr so stdout only carries query output.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}
