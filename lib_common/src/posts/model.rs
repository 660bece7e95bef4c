use serde::{Deserialize, Serialize};

/// One post as served by the remote provider.
///
/// Wire names are camelCase (`userId`, `id`, `title`, `body`); the same
/// shape is used when handing posts to the template context, so templates
/// address fields by their wire names too. A post has no identity beyond
/// its fields and the store enforces no uniqueness on `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier of the user the post belongs to.
    pub user_id: u64,
    /// Identifier of the post itself. Not unique within the store.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}
