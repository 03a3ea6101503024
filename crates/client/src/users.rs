use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Client, Result};

/// A platform user, as the admin endpoints report them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub coins: Option<i64>,

    #[serde(default)]
    pub is_verified: bool,

    #[serde(default)]
    pub courses: Vec<Enrollment>,

    /// Watch history, newest first.
    #[serde(default)]
    pub showed_lesson: Vec<LessonProgress>,
}

/// Ties a user to a course
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub course_id: String,

    #[serde(default)]
    pub is_finished: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub lesson_id: String,
    pub watched_at: DateTime<Utc>,
}

/// Billing plan used when staff enrol a user by hand.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subscription {
    FullCharge,
    Monthly,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignCourseReq<'a> {
    email: &'a str,
    course_id: &'a str,
    subscription: Subscription,
}

impl Client {
    pub fn all_users(&self) -> Result<Vec<User>> {
        self.get("user/all")
    }

    pub fn user_by_email(&self, email: &str) -> Result<User> {
        self.get(&format!("user/by-email?email={}", email))
    }

    /// Enrol a user onto a course, charging them per `subscription`.
    pub fn assign_course(
        &self,
        email: &str,
        course_id: &str,
        subscription: Subscription,
    ) -> Result<()> {
        self.post_json(
            "user/assign-course",
            &AssignCourseReq {
                email,
                course_id,
                subscription,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_serialises_as_backend_constant() {
        assert_eq!(
            serde_json::to_string(&Subscription::FullCharge).unwrap(),
            r#""FULL_CHARGE""#
        );
        assert_eq!(
            serde_json::to_string(&Subscription::Monthly).unwrap(),
            r#""MONTHLY""#
        );
    }

    #[test]
    fn user_parses_with_sparse_fields() {
        let payload = r#"{
            "id": "u1",
            "email": "a@b.co",
            "showedLesson": [
                {"lessonId": "l9", "watchedAt": "2024-05-01T10:00:00Z"}
            ]
        }"#;

        let user: User = serde_json::from_str(payload).unwrap();
        assert_eq!(user.email, "a@b.co");
        assert!(user.name.is_none());
        assert!(!user.is_verified);
        assert_eq!(user.showed_lesson.len(), 1);
        assert_eq!(user.showed_lesson[0].lesson_id, "l9");
    }
}
