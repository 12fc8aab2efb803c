pub mod nhl;

// Re-export commonly used types
pub use nhl::{NhlClient, NhlClientConfig};
