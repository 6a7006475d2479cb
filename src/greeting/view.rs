//! Landing page loading

use std::path::Path;

/// Name of the landing page template inside the templates directory
pub const INDEX_TEMPLATE: &str = "index.html";

/// Landing page compiled into the binary, served when the templates directory
/// has no readable `index.html`.
pub const EMBEDDED_INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Reads `index.html` from `templates_dir`, falling back to the embedded page.
pub async fn load_index_html(templates_dir: &Path) -> String {
    let path = templates_dir.join(INDEX_TEMPLATE);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "landing page not readable, serving embedded copy");
            EMBEDDED_INDEX_HTML.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_template_falls_back_to_embedded_page() {
        let html = load_index_html(Path::new("/nonexistent/templates")).await;
        assert_eq!(html, EMBEDDED_INDEX_HTML);
    }

    #[tokio::test]
    async fn template_on_disk_is_preferred() {
        let dir = std::env::temp_dir().join(format!("workshop-api-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join(INDEX_TEMPLATE), "<h1>custom</h1>")
            .await
            .unwrap();

        let html = load_index_html(&dir).await;
        assert_eq!(html, "<h1>custom</h1>");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
