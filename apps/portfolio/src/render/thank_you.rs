use crate::models::contact::ContactSubmission;
use crate::models::portfolio::Portfolio;
use crate::render::{escape, layout};

/// Echoes a contact submission back to the sender. Nothing is stored or sent.
pub fn thank_you_page(store: &Portfolio, submission: &ContactSubmission) -> String {
    let message = if submission.message.is_empty() {
        String::new()
    } else {
        format!(
            "    <blockquote class=\"blockquote my-3\"><p>{}</p></blockquote>\n",
            escape(&submission.message)
        )
    };

    let body = format!(
        r#"<section class="my-5 text-center">
  <div class="card p-4">
    <h3>Thank you, {name}!</h3>
    <p>Your message has been received. I will get back to you at {email} (demo behavior).</p>
{message}    <a href="/" class="btn btn-primary">Back to portfolio</a>
  </div>
</section>
"#,
        name = escape(&submission.name),
        email = escape(&submission.email),
    );

    layout(store, &body)
}
