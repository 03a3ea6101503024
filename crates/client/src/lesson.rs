use lesson_filter::Visible;
use serde::{Deserialize, Serialize};

use crate::{Client, Result};

/// A single lesson within a course, in the order the backend stores it.
#[derive(Debug, Clone, Deserialize)]
pub struct Lesson {
    pub id: String,

    pub title: String,

    /// Locator for the playable video. May be empty while an upload is
    /// still processing.
    #[serde(rename = "videoUrl", default)]
    pub video_url: String,

    /// Whether the lesson is a free preview.
    #[serde(rename = "isDemo")]
    pub is_demo: bool,

    /// Whether the backend currently marks the lesson as published.
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}

impl Visible for Lesson {
    fn is_visible(&self) -> bool {
        self.is_visible
    }
}

/// Fields staff may change on an existing lesson. Video replacement goes
/// through a separate upload flow and is not part of this client.
#[derive(Debug, Default, Serialize)]
pub struct LessonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "isDemo", skip_serializing_if = "Option::is_none")]
    pub is_demo: Option<bool>,

    #[serde(rename = "isVisible", skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

#[derive(Deserialize)]
struct LessonsResp {
    // Courses with no lessons come back without the key at all, so a
    // missing list is just an empty one.
    #[serde(default)]
    lessons: Vec<Lesson>,
}

impl Client {
    /// The raw lesson list for a course, in authoring order. No filtering
    /// happens here; that's the caller's job (see the `lesson_filter`
    /// crate).
    pub fn course_lessons(&self, course_id: &str) -> Result<Vec<Lesson>> {
        self.get::<LessonsResp>(&format!("courses/category/{}", course_id))
            .map(|r| r.lessons)
    }

    pub fn update_lesson(&self, lesson_id: &str, patch: &LessonPatch) -> Result<()> {
        self.patch_json(&format!("courses/lessons/{}", lesson_id), patch)
    }

    /// The backend soft-deletes lessons, hence PATCH rather than DELETE.
    pub fn delete_lesson(&self, lesson_id: &str) -> Result<()> {
        self.patch_empty(&format!("courses/lesson/{}", lesson_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lessons_parse_from_backend_shape() {
        let payload = r#"{
            "lessons": [
                {"id": "l1", "title": "Intro", "videoUrl": "https://cdn/v1.mp4", "isDemo": true, "isVisible": true},
                {"id": "l2", "title": "Draft", "videoUrl": "", "isDemo": false, "isVisible": false}
            ]
        }"#;

        let resp: LessonsResp = serde_json::from_str(payload).unwrap();
        assert_eq!(resp.lessons.len(), 2);
        assert_eq!(resp.lessons[0].id, "l1");
        assert!(resp.lessons[0].is_demo);
        assert!(!resp.lessons[1].is_visible);
    }

    #[test]
    fn missing_lessons_key_is_an_empty_list() {
        let resp: LessonsResp = serde_json::from_str("{}").unwrap();
        assert!(resp.lessons.is_empty());
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = LessonPatch {
            is_visible: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"isVisible":false}"#
        );
    }
}
