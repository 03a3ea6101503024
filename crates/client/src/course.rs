use serde::Deserialize;

use crate::{Client, Result};

/// A course category as listed by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub goal: String,

    #[serde(default)]
    pub short_name: String,

    /// Cover image URL.
    #[serde(default)]
    pub thumbnail: String,

    /// The listing endpoint embeds only id and visibility per lesson; the
    /// full records come from [`Client::course_lessons`].
    #[serde(default)]
    pub lessons: Vec<LessonStub>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStub {
    pub id: String,
    pub is_visible: bool,
}

impl Client {
    /// All course categories. The endpoint returns a bare JSON array.
    pub fn all_courses(&self) -> Result<Vec<Course>> {
        self.get("courses/all")
    }

    pub fn delete_course(&self, course_id: &str) -> Result<()> {
        self.delete(&format!("courses/{}", course_id))
    }
}
