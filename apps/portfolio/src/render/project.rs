use crate::models::portfolio::{Portfolio, Project};
use crate::render::{badges, escape, layout};

/// Renders the detail page for one project. Sections for absent links are omitted.
pub fn project_page(store: &Portfolio, project: &Project) -> String {
    let mut links = String::new();
    if let Some(url) = project.repo_url() {
        links.push_str(&link_button(url, "View code"));
    }
    if let Some(url) = project.demo_url() {
        links.push_str(&link_button(url, "Live demo"));
    }
    if let Some(url) = project.images_url() {
        links.push_str(&link_button(url, "Image gallery"));
    }
    let links = if links.is_empty() {
        links
    } else {
        format!("        <p>\n{links}        </p>\n")
    };

    let video = project
        .video_url()
        .map(|url| {
            format!(
                r#"    <div class="mt-4">
      <h6>Video</h6>
      <video class="w-100 rounded" controls preload="metadata" src="{}"></video>
    </div>
"#,
                escape(url)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<section class="my-5">
  <a href="/" class="btn btn-sm btn-outline-light mb-3">Back</a>
  <div class="card p-4">
    <div class="row">
      <div class="col-md-5">
        <img src="{image}" class="img-fluid rounded" alt="{name}">
      </div>
      <div class="col-md-7">
        <h2>{name}</h2>
        <p>{summary}</p>
        <h6>Stack</h6>
        <p>{stack}</p>
        <h6>Contribution</h6>
        <p>{contribution}</p>
{links}      </div>
    </div>
{video}  </div>
</section>
"#,
        image = escape(&project.image),
        name = escape(&project.name),
        summary = escape(&project.summary),
        stack = badges(&project.stack),
        contribution = escape(&project.contribution),
    );

    layout(store, &body)
}

fn link_button(url: &str, label: &str) -> String {
    format!(
        "          <a class=\"btn btn-sm btn-outline-light me-2\" href=\"{}\" target=\"_blank\">{label}</a>\n",
        escape(url)
    )
}
