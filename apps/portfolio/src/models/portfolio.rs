use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub profile_image: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

/// One labelled group of skills. Groups keep their declared order on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub date: String,
    pub details: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_url: Option<String>,
}

impl CertificationEntry {
    pub fn credential_url(&self) -> Option<&str> {
        present(&self.credential_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub stack: Vec<String>,
    pub contribution: String,
    pub image: String,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub images_url: Option<String>,
}

// An empty link string means "no link", same as a missing one.
impl Project {
    pub fn repo_url(&self) -> Option<&str> {
        present(&self.repo_url)
    }

    pub fn demo_url(&self) -> Option<&str> {
        present(&self.demo_url)
    }

    pub fn video_url(&self) -> Option<&str> {
        present(&self.video_url)
    }

    pub fn images_url(&self) -> Option<&str> {
        present(&self.images_url)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Everything the site shows. Built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
}
