use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type ProjectId = u32;

/// A portfolio case study.
///
/// Optional list fields deserialize as empty lists and are left out of the
/// serialized form when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_aim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_contributions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<Technology>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Project {
    /// Case-insensitive substring match over title and description.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectLink {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Technology {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntry {
    pub month: String,
    pub year: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_minimal_record_with_empty_lists() {
        let project: Project = serde_json::from_value(json!({
            "id": 7,
            "slug": "minimal",
            "title": "Minimal",
            "description": "Only the required fields"
        }))
        .unwrap();

        assert_eq!(project.id, 7);
        assert!(!project.featured);
        assert!(project.tags.is_empty());
        assert!(project.timeline.is_empty());
        assert!(project.full_description.is_none());
    }

    #[test]
    fn serializes_camel_case_and_skips_empty_optionals() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "slug": "a",
            "title": "A",
            "description": "desc",
            "projectAim": "aim",
            "technicalContributions": ["did a thing"]
        }))
        .unwrap();

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["projectAim"], "aim");
        assert_eq!(value["technicalContributions"][0], "did a thing");
        assert!(value.get("fullDescription").is_none());
        assert!(value.get("testimonials").is_none());
        // tags and links are always present for list rendering
        assert!(value["tags"].is_array());
        assert!(value["links"].is_array());
    }

    #[test]
    fn mentions_is_case_insensitive_over_title_and_description() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "slug": "weather",
            "title": "Weather Dashboard",
            "description": "Forecasts for any location"
        }))
        .unwrap();

        assert!(project.mentions("weather"));
        assert!(project.mentions("forecast"));
        assert!(!project.mentions("church"));
    }
}
