//! Plain-text CV built from the profile, education and experience.

use crate::models::portfolio::{EducationEntry, ExperienceEntry, Profile};

pub const CV_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub fn generate_cv(
    profile: &Profile,
    education: &[EducationEntry],
    experience: &[ExperienceEntry],
) -> String {
    let mut cv = format!(
        "{} - Resume\n\n{}\nLocation: {}\n\nSummary:\n{}\n\nEducation:\n",
        profile.name, profile.title, profile.location, profile.summary
    );

    for e in education {
        cv.push_str(&format!("- {}, {} ({})\n", e.degree, e.school, e.date));
    }

    cv.push_str("\nExperience:\n");
    for ex in experience {
        cv.push_str(&format!(
            "- {} @ {} ({})\n  {}\n",
            ex.role, ex.company, ex.date, ex.details
        ));
    }

    cv
}

/// `Content-Disposition` value for downloading the CV under `filename`.
pub fn attachment_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
