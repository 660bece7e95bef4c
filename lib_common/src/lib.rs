// Declare the modules to re-export
pub mod configs;
pub mod posts;
pub mod render;
pub mod retrieve;

// Re-export the primary types so binaries can use `lib_common::PostStore` etc.
pub use configs::config_sys::SysConfig;
pub use posts::ingestor::PostIngestor;
pub use posts::model::Post;
pub use posts::source::PostSource;
pub use posts::store::PostStore;
pub use render::page::{PageRenderer, RenderError};
pub use retrieve::api_http::{ApiClient, ApiResponse, FetchError};
