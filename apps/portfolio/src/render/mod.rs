//! View Renderer: pure functions from portfolio content to HTML documents.
//!
//! Every page is a fragment wrapped by [`layout`]. All interpolated text goes
//! through [`escape`]; nothing else touches user or content strings.

pub mod error_page;
pub mod home;
pub mod project;
pub mod thank_you;

pub use error_page::not_found_page;
pub use home::home_page;
pub use project::project_page;
pub use thank_you::thank_you_page;

use crate::models::portfolio::Portfolio;

const STYLES: &str = r#"
      body { background: linear-gradient(180deg,#0f172a 0%, #07132a 100%); color: #e6eef8; }
      .card { background: rgba(255,255,255,0.03); border: none; }
      .card h5, .card p, .card .skill-badge { color: #ffffff !important; opacity: 1 !important; }
      .accent { color: #7dd3fc; }
      .skill-badge { background: rgba(255,255,255,0.05); padding:6px 8px; border-radius:999px; margin:4px; display:inline-block; }
      .hero { padding: 60px 0; }
      .profile-img { width:160px; height:160px; object-fit:cover; border-radius:50%; box-shadow: 0 8px 30px rgba(0,0,0,0.6); border:4px solid rgba(255,255,255,0.06); }
      .project-img { width:100%; height:180px; object-fit:cover; border-radius:8px; filter: brightness(1.1); }
      a.glow { text-decoration:none; border-bottom:1px dashed rgba(125,211,252,0.4); }
      footer { opacity:0.7; padding:30px 0; }
"#;

/// Wraps a page fragment in the shared chrome: head, navbar and footer.
pub fn layout(store: &Portfolio, content: &str) -> String {
    let profile = &store.profile;
    let name = escape(&profile.name);
    let location = escape(&profile.location);
    let github = escape(&profile.github);

    format!(
        r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{name} - Portfolio</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">
    <link href="https://unpkg.com/aos@2.3.1/dist/aos.css" rel="stylesheet">
    <style>{STYLES}</style>
  </head>
  <body>
    <nav class="navbar navbar-expand-lg navbar-dark bg-transparent">
      <div class="container">
        <a class="navbar-brand accent" href="/">{name}</a>
        <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#nav" aria-controls="nav" aria-expanded="false">
          <span class="navbar-toggler-icon"></span>
        </button>
        <div class="collapse navbar-collapse" id="nav">
          <ul class="navbar-nav ms-auto">
            <li class="nav-item"><a class="nav-link" href="/#about">About</a></li>
            <li class="nav-item"><a class="nav-link" href="/#projects">Projects</a></li>
            <li class="nav-item"><a class="nav-link" href="/#experience">Experience</a></li>
            <li class="nav-item"><a class="nav-link" href="/#contact">Contact</a></li>
          </ul>
        </div>
      </div>
    </nav>

    <main class="container">
{content}
    </main>

    <footer class="text-center text-muted">
      <div class="container">Built with Rust + axum &bull; {location} &bull; <a class="glow" href="{github}">GitHub</a></div>
    </footer>

    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"></script>
    <script src="https://unpkg.com/aos@2.3.1/dist/aos.js"></script>
    <script> AOS.init(); </script>
  </body>
</html>
"##
    )
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One inline badge per item, in order.
pub(crate) fn badges(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="skill-badge">{}</span>"#, escape(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin;

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape("a@x.com"), "a@x.com");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_layout_wraps_content_in_chrome() {
        let store = builtin::portfolio();
        let html = layout(&store, "<p>fragment</p>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Maheswaren CHINNASAMY - Portfolio</title>"));
        assert!(html.contains("<p>fragment</p>"));
        assert!(html.contains("Mauritius"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_badges_one_span_per_item() {
        let items = vec!["Rust".to_string(), "C++".to_string()];
        let html = badges(&items);
        assert_eq!(html.matches("skill-badge").count(), 2);
        assert!(html.contains(">C++<"));
        assert_eq!(badges(&[]), "");
    }
}
