use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lesson drawn from a project, shown alongside its case study.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnowledgePoint {
    pub title: String,
    pub description: String,
    /// Icon name understood by the presentation layer (e.g. `palette`).
    pub icon: String,
}

/// A downloadable or linked asset attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectResource {
    pub title: String,
    pub url: String,
    /// `video`, `download`, `document`, ...
    #[serde(rename = "type")]
    pub kind: String,
}

/// A portfolio entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub client: String,
    pub year: String,
    pub overview: String,
    pub long_description: String,
    pub tools: Vec<String>,
    pub featured_image: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub knowledge_points: Vec<KnowledgePoint>,
    #[serde(default)]
    pub resources: Vec<ProjectResource>,
    /// Not checked against the collection; unresolved ids are dropped on read.
    #[serde(default)]
    pub related_project_ids: Vec<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}
