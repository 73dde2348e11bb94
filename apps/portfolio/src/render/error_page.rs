use crate::models::portfolio::Portfolio;
use crate::render::{escape, layout};

pub fn not_found_page(store: &Portfolio, path: &str) -> String {
    let body = format!(
        r#"<section class="my-5 text-center">
  <div class="card p-4">
    <h3>Page not found</h3>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="btn btn-primary">Back to portfolio</a>
  </div>
</section>
"#,
        escape(path)
    );
    layout(store, &body)
}
