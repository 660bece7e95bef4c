use std::fmt;
use std::path::PathBuf;

/// Default base URL of the remote post provider.
const PROVIDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";
/// Path under the provider base URL that returns the post collection.
const PROVIDER_POSTS_PATH: &str = "posts";
/// Fixed listen port. There is no environment or file override.
const SERVER_PORT: u16 = 8080;

/// # System Configuration
///
/// All runtime settings of the PostBoard service, resolved once at startup
/// and passed by value to the components that need them.
///
/// The values are compile-time defaults. Keeping them in one struct (rather
/// than scattered constants) means the server main has a single place to log
/// the effective configuration from.
#[derive(Debug, Clone)]
pub struct SysConfig {
    /// Application name, used as the tracing target prefix in logs.
    pub app_name: String,
    /// Base URL of the remote post provider. Must be absolute.
    pub provider_base_url: String,
    /// Path joined onto `provider_base_url` to fetch the post collection.
    pub provider_posts_path: String,
    /// TCP port the HTTP server binds on all interfaces.
    pub server_port: u16,
    /// Path of the board template file, loaded per render.
    pub template_path: PathBuf,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self {
            app_name: "postboard".to_string(),
            provider_base_url: PROVIDER_BASE_URL.to_string(),
            provider_posts_path: PROVIDER_POSTS_PATH.to_string(),
            server_port: SERVER_PORT,
            template_path: PathBuf::from("templates/index.html"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl fmt::Display for SysConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SysConfig
    App name: {},
    Provider: {}{},
    Port: {},
    Template: {},
    Static dir: {}
",
            self.app_name,
            self.provider_base_url,
            self.provider_posts_path,
            self.server_port,
            self.template_path.display(),
            self.static_dir.display()
        )
    }
}
