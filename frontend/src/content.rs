use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::carousel::catalog::{Catalog, CatalogError, Entry};

const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");

pub const NAV_LINKS: [&str; 5] = ["Home", "About", "Services", "Work", "Contact"];
pub const QUICK_LINKS: [&str; 4] = ["Home", "About", "Services", "Work"];

pub const BRANDS: &[&str] = &[
    "Portfolio Projects",
    "Interior Designer Website",
    "Wedding Planner Website",
    "Animated UIs",
    "E-Commerce Solutions",
    "MERN Stack Apps",
    "React Development",
    "Client Collaborations",
];

pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: [Principle; 3] = [
    Principle {
        title: "Creative UI & UX",
        description: "Building modern, minimal, and animated interfaces using React, TailwindCSS, and GSAP/Framer Motion.",
    },
    Principle {
        title: "MERN Stack Expertise",
        description: "Creating responsive and scalable full-stack apps with React, Node.js, Express, and MongoDB.",
    },
    Principle {
        title: "Client-Focused Results",
        description: "Delivering SEO-friendly portfolios, landing pages, and e-commerce solutions tailored to client needs.",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "Instagram", url: "https://www.instagram.com/buildwithsamra/", icon: "/assets/icons/instagram.svg" },
    SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/in/samra-ateeque/", icon: "/assets/icons/linkedin.svg" },
    SocialLink { name: "GitHub", url: "https://github.com/samraateeque", icon: "/assets/icons/github.svg" },
];

// (src, inline position)
pub const TECH_LOGOS: [(&str, &str); 9] = [
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg", "top: 10%; left: 8%;"),
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg", "top: 20%; right: 10%;"),
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg", "bottom: 18%; left: 15%;"),
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/express/express-original-wordmark.svg", "bottom: 25%; right: 15%;"),
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tailwindcss/tailwindcss-plain.svg", "top: 35%; left: 40%;"),
    ("https://cdn.worldvectorlogo.com/logos/gsap-greensock.svg", "bottom: 30%; left: 40%;"),
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg", "top: 15%; right: 35%;"),
    ("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg", "bottom: 10%; right: 25%;"),
    ("https://cdn.worldvectorlogo.com/logos/framer-motion.svg", "top: 45%; right: 45%;"),
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub image: String,
    pub rating: u8,
}

impl Testimonial {
    pub fn avatar_src(&self) -> String {
        if self.image.is_empty() {
            let initial = self.name.chars().next().unwrap_or('?');
            format!("https://placehold.co/48x48/F0EEEB/333333?text={}", initial)
        } else {
            self.image.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Client,
    Demo,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 2] = [ProjectKind::Client, ProjectKind::Demo];

    pub fn label(self) -> &'static str {
        match self {
            ProjectKind::Client => "Client Work",
            ProjectKind::Demo => "Demos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub image: String,
    // None while the site is not live yet
    pub link: Option<String>,
}

pub type TestimonialCatalog = Catalog<(), Testimonial>;
pub type ProjectCatalog = Catalog<ProjectKind, Project>;

#[derive(Deserialize)]
struct TestimonialRecord {
    id: String,
    #[serde(flatten)]
    testimonial: Testimonial,
}

#[derive(Deserialize)]
struct ProjectRecord {
    id: String,
    kind: ProjectKind,
    #[serde(flatten)]
    project: Project,
}

fn parse_testimonials(json: &str) -> Result<TestimonialCatalog, ContentError> {
    let records: Vec<TestimonialRecord> = serde_json::from_str(json)?;
    let entries = records
        .into_iter()
        .map(|record| Entry::new(record.id, (), record.testimonial))
        .collect();
    Ok(Catalog::new(entries)?)
}

fn parse_projects(json: &str) -> Result<ProjectCatalog, ContentError> {
    let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
    let entries = records
        .into_iter()
        .map(|record| Entry::new(record.id, record.kind, record.project))
        .collect();
    Ok(Catalog::new(entries)?)
}

/// Bundled testimonials. A broken file renders the empty state instead of failing the page.
pub fn testimonial_catalog() -> TestimonialCatalog {
    parse_testimonials(TESTIMONIALS_JSON).unwrap_or_else(|e| {
        error!("Failed to load testimonials: {}", e);
        Catalog::empty()
    })
}

pub fn project_catalog() -> ProjectCatalog {
    parse_projects(PROJECTS_JSON).unwrap_or_else(|e| {
        error!("Failed to load projects: {}", e);
        Catalog::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_testimonials_load() {
        let catalog = parse_testimonials(TESTIMONIALS_JSON).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[0].item.name, "Anita Sharma");
        assert!(catalog.entries().iter().all(|e| (1..=5).contains(&e.item.rating)));
    }

    #[test]
    fn bundled_projects_are_tagged() {
        let catalog = parse_projects(PROJECTS_JSON).unwrap();
        assert_eq!(catalog.positions_in(&ProjectKind::Client).len(), 4);
        assert_eq!(catalog.positions_in(&ProjectKind::Demo).len(), 2);
        let demo = &catalog.entries()[4];
        assert_eq!(demo.group, ProjectKind::Demo);
        assert!(demo.item.link.is_none());
    }

    #[test]
    fn duplicate_ids_surface_as_catalog_error() {
        let json = r#"[
            {"id": "x", "quote": "a", "name": "A", "company": "C", "rating": 5},
            {"id": "x", "quote": "b", "name": "B", "company": "C", "rating": 4}
        ]"#;
        match parse_testimonials(json) {
            Err(ContentError::Catalog(CatalogError::DuplicateId(id))) => assert_eq!(id, "x"),
            other => panic!("unexpected result: {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_projects("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn missing_image_falls_back_to_initial_placeholder() {
        let testimonial = Testimonial {
            quote: "Great".to_string(),
            name: "Ravi".to_string(),
            company: "Valued Client".to_string(),
            image: String::new(),
            rating: 5,
        };
        assert_eq!(
            testimonial.avatar_src(),
            "https://placehold.co/48x48/F0EEEB/333333?text=R"
        );
    }
}
