use crate::posts::model::Post;
use crate::retrieve::api_http::{ApiClient, FetchError};

/// Stateless client for the remote post provider.
///
/// Every call is independent: one GET of the posts path, expecting a 2xx
/// JSON array of posts. There is no retry and no request timeout, so a
/// stalled provider blocks only the task that called `fetch`.
pub struct PostSource {
    /// The underlying generic HTTP client, pre-configured with the provider base URL.
    client: ApiClient,
    /// Path under the base URL that returns the post collection.
    path: String,
}

impl PostSource {
    /// Creates a source for the given provider.
    ///
    /// # Arguments
    /// * `base_url` - Absolute base URL of the provider.
    /// * `posts_path` - Path joined onto `base_url` that serves the posts.
    ///
    /// # Panics
    /// Panics if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, posts_path: &str) -> Self {
        Self {
            client: ApiClient::new(base_url),
            path: posts_path.to_string(),
        }
    }

    /// Fetches the provider's current post collection.
    ///
    /// The returned `Vec` keeps the provider's response order; the caller
    /// appends it to the store as one batch.
    ///
    /// # Errors
    /// `FetchError::Status` on a non-2xx answer, plus everything
    /// `ApiClient::get_json` reports (transport, decode, invalid path).
    pub async fn fetch(&self) -> Result<Vec<Post>, FetchError> {
        let response = self.client.get_json::<Vec<Post>>(&self.path).await?;

        if !response.success {
            tracing::error!(
                status = response.status,
                body = response.error_body.as_deref().unwrap_or(""),
                "post provider returned an error status"
            );
            return Err(FetchError::Status {
                url: response.url,
                status: response.status,
            });
        }

        // `get_json` always fills `data` on a successful response.
        Ok(response.data.unwrap_or_default())
    }
}
