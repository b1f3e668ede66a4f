use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub static GLOBAL_CONTENT: LazyLock<Result<Content, ContentError>> = LazyLock::new(Content::load);

pub const ALL_PROJECTS: &str = "All";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub features: Vec<String>,
    pub demo: String,
    pub code: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: &'static str, reason: String },
}

/// Everything the page shows that isn't markup.
#[derive(Debug, Clone)]
pub struct Content {
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub certifications: Vec<Certification>,
    pub testimonials: Vec<Testimonial>,
}

fn parse<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let data = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&data.data).map_err(|e| ContentError::ParseError {
        file,
        reason: e.to_string(),
    })
}

impl Content {
    fn load() -> Result<Self, ContentError> {
        Ok(Self {
            projects: parse("projects.json")?,
            services: parse("services.json")?,
            certifications: parse("certifications.json")?,
            testimonials: parse("testimonials.json")?,
        })
    }
}

fn content() -> Result<&'static Content, ContentError> {
    GLOBAL_CONTENT.as_ref().map_err(Clone::clone)
}

pub fn projects() -> Result<&'static [Project], ContentError> {
    content().map(|c| c.projects.as_slice())
}

pub fn services() -> Result<&'static [Service], ContentError> {
    content().map(|c| c.services.as_slice())
}

pub fn certifications() -> Result<&'static [Certification], ContentError> {
    content().map(|c| c.certifications.as_slice())
}

pub fn testimonials() -> Result<&'static [Testimonial], ContentError> {
    content().map(|c| c.testimonials.as_slice())
}

/// `"All"` followed by every project category, in first-seen order.
pub fn project_filters(projects: &[Project]) -> Vec<String> {
    let mut filters = vec![ALL_PROJECTS.to_string()];
    for category in projects.iter().flat_map(|p| &p.categories) {
        if !filters.contains(category) {
            filters.push(category.clone());
        }
    }
    filters
}

pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_PROJECTS || p.categories.iter().any(|c| c == category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        assert_eq!(projects().unwrap().len(), 3);
        assert_eq!(services().unwrap().len(), 3);
        assert_eq!(certifications().unwrap().len(), 3);
        assert!(testimonials().unwrap().iter().all(|t| t.rating <= 5));
    }

    #[test]
    fn test_project_filters() {
        let filters = project_filters(projects().unwrap());
        assert_eq!(
            filters,
            vec!["All", "React", "Full Stack", "Frontend", "Animation"]
        );
    }

    #[test]
    fn test_filter_projects() {
        let projects = projects().unwrap();
        assert_eq!(filter_projects(projects, ALL_PROJECTS).len(), 3);
        let react = filter_projects(projects, "React")
            .into_iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(react, vec!["Cloud Guard", "Green Quest"]);
        assert!(filter_projects(projects, "Rust").is_empty());
    }

    #[test]
    fn test_missing_file_reported() {
        assert_eq!(
            parse::<Vec<Service>>("nope.json"),
            Err(ContentError::NotFound("nope.json"))
        );
    }
}
