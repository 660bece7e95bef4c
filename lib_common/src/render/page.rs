use std::path::PathBuf;

use tera::{Context, Tera};
use thiserror::Error;

use crate::posts::model::Post;

/// Name the board template is registered under inside the per-render `Tera` instance.
const TEMPLATE_NAME: &str = "board";

/// Failure of a page render.
///
/// Both variants surface to the requester as a 500; neither is retried.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file was missing, unreadable or syntactically invalid.
    #[error("template {} could not be loaded: {source}", path.display())]
    TemplateLoad {
        /// Path of the template file that failed to load.
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
    /// The template loaded but failed while rendering the snapshot.
    #[error("template {} failed to render: {source}", path.display())]
    Render {
        /// Path of the template file that failed to render.
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
}

/// Renders the board page from a post snapshot.
///
/// Holds only the template path; each render loads the file into a fresh
/// `Tera` instance. Rendering is synchronous and CPU-bound, and the caller
/// writes nothing to the response before `render_board` has returned.
pub struct PageRenderer {
    /// Path of the board template file.
    template_path: PathBuf,
}

impl PageRenderer {
    /// Creates a renderer for the given template file.
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    /// Renders the board page for the given snapshot.
    ///
    /// The snapshot is exposed to the template as `posts`, serialized with
    /// the same camelCase field names the provider uses.
    ///
    /// # Errors
    /// `RenderError::TemplateLoad` if the template cannot be read or parsed,
    /// `RenderError::Render` if rendering fails.
    pub fn render_board(&self, posts: &[Post]) -> Result<String, RenderError> {
        let mut tera = Tera::default();
        tera.add_template_file(&self.template_path, Some(TEMPLATE_NAME))
            .map_err(|source| RenderError::TemplateLoad {
                path: self.template_path.clone(),
                source,
            })?;

        let mut context = Context::new();
        context.insert("posts", posts);

        tera.render(TEMPLATE_NAME, &context)
            .map_err(|source| RenderError::Render {
                path: self.template_path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn post(id: u64, title: &str) -> Post {
        Post {
            user_id: id,
            id,
            title: title.to_string(),
            body: format!("body {id}"),
        }
    }

    fn write_template(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("index.html");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn renders_every_post_in_snapshot_order() {
        let dir = TempDir::new().unwrap();
        let path = write_template(
            &dir,
            "{% for post in posts %}{{ post.title }}:{{ post.userId }};{% endfor %}",
        );

        let renderer = PageRenderer::new(path);
        let html = renderer
            .render_board(&[post(1, "first"), post(2, "second")])
            .unwrap();

        assert_eq!(html, "first:1;second:2;");
    }

    #[test]
    fn renders_an_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write_template(&dir, "<ul>{% for post in posts %}<li>{{ post.title }}</li>{% endfor %}</ul>");

        let renderer = PageRenderer::new(path);
        assert_eq!(renderer.render_board(&[]).unwrap(), "<ul></ul>");
    }

    #[test]
    fn missing_template_file_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let renderer = PageRenderer::new(dir.path().join("no-such-template.html"));

        let err = renderer.render_board(&[post(1, "x")]).unwrap_err();
        assert!(matches!(err, RenderError::TemplateLoad { .. }));
    }

    #[test]
    fn reference_to_a_missing_variable_is_a_render_error() {
        let dir = TempDir::new().unwrap();
        let path = write_template(&dir, "{{ not_in_context }}");

        let renderer = PageRenderer::new(path);
        let err = renderer.render_board(&[]).unwrap_err();
        assert!(matches!(err, RenderError::Render { .. }));
    }
}
