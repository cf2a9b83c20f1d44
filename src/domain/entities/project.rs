use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
}

impl Project {
    fn new(id: &str, title: &str, description: &str, tags: &[&str], url: Option<&str>) -> Self {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            url: url.map(str::to_string),
            thumbnail: None,
        }
    }
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project::new(
            "storyengine",
            "StoryEngine: Interactive Narratives",
            "A web-based tool that blends code and storytelling to craft interactive lessons.",
            &["React", "FastAPI", "Education", "Storytelling"],
            Some("https://example.com/storyengine"),
        ),
        Project::new(
            "devcasts",
            "DevCasts: Bite-size Video Lessons",
            "A micro-learning platform for teaching web dev through short, cinematic episodes.",
            &["Next.js", "MongoDB", "Video"],
            Some("https://example.com/devcasts"),
        ),
        Project::new(
            "a11y-kit",
            "a11y-kit: Accessible UI Toolkit",
            "A component library that pairs accessibility-first patterns with playful motion.",
            &["Library", "Design Systems", "Framer Motion"],
            Some("https://example.com/a11y-kit"),
        ),
    ]
});

/// The fixed project showcase, in display order.
pub fn catalog() -> &'static [Project] {
    &PROJECTS
}
