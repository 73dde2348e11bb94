use crate::models::portfolio::{
    CertificationEntry, EducationEntry, ExperienceEntry, Portfolio, Project, SkillGroup,
};
use crate::render::{badges, escape, layout};

/// Renders the home page: hero, about, projects, experience highlights and contact.
pub fn home_page(store: &Portfolio) -> String {
    let mut body = String::new();
    body.push_str(&hero_section(store));
    body.push_str(&about_section(store));
    body.push_str(&projects_section(&store.projects));
    body.push_str(&experience_section(&store.experience));
    body.push_str(&contact_section(store));
    layout(store, &body)
}

fn hero_section(store: &Portfolio) -> String {
    let p = &store.profile;
    format!(
        r##"<section class="hero text-center text-light">
  <div class="row align-items-center">
    <div class="col-md-4 text-md-start text-center" data-aos="fade-right">
      <img src="{image}" alt="profile" class="profile-img mb-3">
    </div>
    <div class="col-md-8" data-aos="fade-left">
      <h1 class="display-6">{name}</h1>
      <p class="lead accent">{title}</p>
      <p style="max-width:760px;">{summary}</p>
      <p>
        <a class="btn btn-outline-light me-2" href="mailto:{email}">Email me</a>
        <a class="btn btn-primary" href="#projects">View projects</a>
      </p>
    </div>
  </div>
</section>
"##,
        image = escape(&p.profile_image),
        name = escape(&p.name),
        title = escape(&p.title),
        summary = escape(&p.summary),
        email = escape(&p.email),
    )
}

fn about_section(store: &Portfolio) -> String {
    let skills: String = store.skills.iter().map(skill_group).collect();
    let education: String = store.education.iter().map(education_line).collect();
    let experience: String = store.experience.iter().map(experience_line).collect();
    let certifications = if store.certifications.is_empty() {
        String::new()
    } else {
        let items: String = store.certifications.iter().map(certification_line).collect();
        format!("        <hr>\n        <h6>Certifications</h6>\n{items}")
    };

    format!(
        r#"<section id="about" class="my-5">
  <div class="row">
    <div class="col-md-6" data-aos="fade-up">
      <div class="card p-4">
        <h4>About</h4>
        <p>{summary}</p>
        <h6>Skills</h6>
{skills}      </div>
    </div>
    <div class="col-md-6" data-aos="fade-up" data-aos-delay="100">
      <div class="card p-4">
        <h4>Education &amp; Experience</h4>
{education}{certifications}        <hr>
{experience}      </div>
    </div>
  </div>
</section>
"#,
        summary = escape(&store.profile.summary),
    )
}

fn skill_group(group: &SkillGroup) -> String {
    format!(
        "        <strong class=\"text-capitalize\">{}:</strong>\n        <div class=\"mt-2 mb-3\">\n{}\n        </div>\n",
        escape(&group.category),
        badges(&group.items)
    )
}

fn education_line(edu: &EducationEntry) -> String {
    format!(
        "        <p><strong>{}</strong><br>{} &mdash; <small>{}</small></p>\n",
        escape(&edu.degree),
        escape(&edu.school),
        escape(&edu.date)
    )
}

fn certification_line(cert: &CertificationEntry) -> String {
    let link = cert
        .credential_url()
        .map(|url| {
            format!(
                r#" <a class="glow" href="{}" target="_blank">Credential</a>"#,
                escape(url)
            )
        })
        .unwrap_or_default();
    format!(
        "        <p><strong>{}</strong><br>{} &mdash; <small>{}</small>{link}</p>\n",
        escape(&cert.name),
        escape(&cert.issuer),
        escape(&cert.date)
    )
}

fn experience_line(exp: &ExperienceEntry) -> String {
    format!(
        "        <p><strong>{}</strong> &mdash; {} <br><small>{}</small><br>{}</p>\n",
        escape(&exp.role),
        escape(&exp.company),
        escape(&exp.date),
        escape(&exp.details)
    )
}

fn projects_section(projects: &[Project]) -> String {
    let cards: String = projects.iter().map(project_card).collect();
    format!(
        r#"<section id="projects" class="my-5">
  <h3 data-aos="fade-up">Projects</h3>
  <div class="row">
{cards}  </div>
</section>
"#
    )
}

// The project name appears only in the card heading; the image alt text stays generic.
fn project_card(project: &Project) -> String {
    let code_link = project
        .repo_url()
        .map(|url| {
            format!(
                r#"<a href="{}" class="btn btn-light btn-sm ms-2" target="_blank">Code</a>"#,
                escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"    <div class="col-md-6 col-lg-4 mb-4" data-aos="zoom-in">
      <div class="card h-100 p-3">
        <img src="{image}" class="project-img" alt="project screenshot">
        <div class="card-body">
          <h5>{name}</h5>
          <p>{summary}</p>
          <div class="mb-2">
{stack}
          </div>
          <a href="/project/{id}" class="btn btn-outline-light btn-sm">Read more</a>
          {code_link}
        </div>
      </div>
    </div>
"#,
        image = escape(&project.image),
        name = escape(&project.name),
        summary = escape(&project.summary),
        stack = badges(&project.stack),
        id = escape(&project.id),
    )
}

fn experience_section(experience: &[ExperienceEntry]) -> String {
    let cards: String = experience.iter().map(experience_card).collect();
    format!(
        r#"<section id="experience" class="my-5">
  <h3 data-aos="fade-up">Experience Highlights</h3>
  <div class="row">
{cards}  </div>
</section>
"#
    )
}

fn experience_card(exp: &ExperienceEntry) -> String {
    let position = exp
        .position
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("          <p class=\"accent mb-1\">{}</p>\n", escape(p)))
        .unwrap_or_default();
    let technologies = if exp.technologies.is_empty() {
        String::new()
    } else {
        format!(
            "          <div class=\"mb-2\">\n{}\n          </div>\n",
            badges(&exp.technologies)
        )
    };
    let tasks = if exp.tasks.is_empty() {
        String::new()
    } else {
        let items: String = exp
            .tasks
            .iter()
            .map(|t| format!("            <li>{}</li>\n", escape(t)))
            .collect();
        format!("          <ul>\n{items}          </ul>\n")
    };

    format!(
        r#"    <div class="col-md-6" data-aos="fade-up" data-aos-delay="50">
        <div class="card p-3 mb-3">
          <h5>{role} <small class="text-muted">@ {company}</small></h5>
{position}          <p>{details}</p>
{technologies}{tasks}        </div>
    </div>
"#,
        role = escape(&exp.role),
        company = escape(&exp.company),
        details = escape(&exp.details),
    )
}

fn contact_section(store: &Portfolio) -> String {
    let p = &store.profile;
    format!(
        r#"<section id="contact" class="my-5">
  <h3 data-aos="fade-up">Get in touch</h3>
  <div class="row">
    <div class="col-md-6" data-aos="fade-right">
      <div class="card p-4">
        <h5>Contact</h5>
        <p>Email: <a href="mailto:{email}">{email}</a></p>
        <p>LinkedIn: <a href="{linkedin}" target="_blank">Profile</a></p>
        <p>GitHub: <a href="{github}" target="_blank">{github}</a></p>
        <p><a class="btn btn-outline-light" href="/download-cv">Download CV (sample)</a></p>
      </div>
    </div>
    <div class="col-md-6" data-aos="fade-left">
      <div class="card p-4">
        <h5>Quick message</h5>
        <form method="post" action="/contact">
          <div class="mb-3">
            <label class="form-label">Your name</label>
            <input class="form-control" name="name">
          </div>
          <div class="mb-3">
            <label class="form-label">Email</label>
            <input class="form-control" name="email">
          </div>
          <div class="mb-3">
            <label class="form-label">Message</label>
            <textarea class="form-control" name="message"></textarea>
          </div>
          <button class="btn btn-primary">Send</button>
          <small class="d-block mt-2 text-muted">(This demo form currently just shows a thank-you page.)</small>
        </form>
      </div>
    </div>
  </div>
</section>
"#,
        email = escape(&p.email),
        linkedin = escape(&p.linkedin),
        github = escape(&p.github),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::builtin;

    #[test]
    fn test_every_project_name_appears_exactly_once() {
        let store = builtin::portfolio();
        let html = home_page(&store);
        for project in &store.projects {
            let name = escape(&project.name);
            assert_eq!(
                html.matches(name.as_str()).count(),
                1,
                "project '{}' should appear exactly once",
                project.name
            );
        }
    }

    #[test]
    fn test_every_project_links_to_detail_page() {
        let store = builtin::portfolio();
        let html = home_page(&store);
        for project in &store.projects {
            assert!(html.contains(&format!(r#"href="/project/{}""#, project.id)));
        }
    }

    #[test]
    fn test_every_skill_category_and_badge_rendered() {
        let store = builtin::portfolio();
        let html = home_page(&store);
        for group in &store.skills {
            assert!(html.contains(&group.category));
            for item in &group.items {
                let badge = format!(r#"<span class="skill-badge">{}</span>"#, escape(item));
                assert!(html.contains(&badge), "missing badge for {item}");
            }
        }
    }

    #[test]
    fn test_skill_groups_keep_declared_order() {
        let html = home_page(&builtin::portfolio());
        let languages = html.find(">languages:<").unwrap();
        let frameworks = html.find(">frameworks:<").unwrap();
        let tools = html.find(">tools:<").unwrap();
        assert!(languages < frameworks && frameworks < tools);
    }

    #[test]
    fn test_home_page_is_deterministic() {
        let store = builtin::portfolio();
        assert_eq!(home_page(&store), home_page(&store));
    }

    #[test]
    fn test_code_button_only_for_projects_with_repo() {
        let store = builtin::portfolio();
        let html = home_page(&store);
        let with_repo = store
            .projects
            .iter()
            .filter(|p| p.repo_url().is_some())
            .count();
        assert_eq!(with_repo, store.projects.len() - 1);
        assert_eq!(html.matches(">Code</a>").count(), with_repo);
    }

    #[test]
    fn test_certifications_section_omitted_when_empty() {
        let store = builtin::portfolio();
        assert!(store.certifications.is_empty());
        assert!(!home_page(&store).contains("Certifications"));
    }

    #[test]
    fn test_certifications_rendered_with_credential_link() {
        let mut store = builtin::portfolio();
        store.certifications = vec![
            CertificationEntry {
                name: "ISTQB Foundation Level".to_string(),
                issuer: "ISTQB".to_string(),
                date: "2024".to_string(),
                credential_url: Some("https://example.com/cred/1".to_string()),
            },
            CertificationEntry {
                name: "Agile Basics".to_string(),
                issuer: "Example Academy".to_string(),
                date: "2023".to_string(),
                credential_url: None,
            },
        ];
        let html = home_page(&store);
        assert!(html.contains("<h6>Certifications</h6>"));
        assert!(html.contains("ISTQB Foundation Level"));
        assert!(html.contains("Agile Basics"));
        assert_eq!(html.matches(">Credential</a>").count(), 1);
        assert!(html.contains(r#"href="https://example.com/cred/1""#));
    }

    #[test]
    fn test_experience_card_shows_position_technologies_and_tasks() {
        let mut store = builtin::portfolio();
        store.experience[0].position = Some("QA Automation".to_string());
        store.experience[0].technologies = vec!["Cypress".to_string()];
        store.experience[0].tasks = vec!["Wrote regression suites".to_string()];
        let html = home_page(&store);
        assert!(html.contains(r#"<p class="accent mb-1">QA Automation</p>"#));
        assert!(html.contains(r#"<span class="skill-badge">Cypress</span>"#));
        assert!(html.contains("<li>Wrote regression suites</li>"));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut store = builtin::portfolio();
        store.profile.summary = "<script>alert(1)</script>".to_string();
        let html = home_page(&store);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_contact_form_posts_three_fields() {
        let html = home_page(&builtin::portfolio());
        assert!(html.contains(r#"<form method="post" action="/contact">"#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="message""#));
        assert!(html.contains(r#"href="/download-cv""#));
    }
}
