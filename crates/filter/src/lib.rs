//! Per-course filtering of lesson lists, as shown to students and staff.
//!
//! The backend returns each course's lessons in authoring order, and that
//! order is meaningful: callers must not re-sort the output. Filtering runs
//! in two independent stages:
//!
//! 1. a positional slice chosen per course (see [`SliceRule`] and
//!    [`Overrides`]), and
//! 2. a visibility pass that keeps only published entries (see
//!    [`visible_only`]).
//!
//! Student-facing listings run both stages ([`viewer_list`]); staff listings
//! run only the slice ([`editor_list`]), since staff edit hidden lessons too.
//!
//! The slice rules are not business logic. They paper over broken lesson
//! ordering in specific backend course records (duplicated or stale blocks
//! left behind by imports), which is why they live in a data table keyed by
//! course id rather than in the code here. When the backend records are
//! repaired, their table entries get deleted and nothing else changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A positional slicing strategy applied to a course's raw lesson list.
///
/// Positions are 0-based against the list's arrival order. All variants
/// saturate at the list bounds: an out-of-range start yields an empty
/// segment, an out-of-range end clamps to the list length. Short lists never
/// cause a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SliceRule {
    /// Keep the list unchanged.
    #[default]
    Identity,

    /// Drop positions `start..end`, keeping everything on either side.
    DropRange { start: usize, end: usize },

    /// Drop the first `count` positions.
    DropPrefix { count: usize },
}

impl SliceRule {
    /// The positional-slice stage: apply this rule to `items`, returning a
    /// new list. The input is never modified, and the output preserves the
    /// input's relative order.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match *self {
            SliceRule::Identity => items.to_vec(),
            SliceRule::DropRange { start, end } => {
                let start = start.min(items.len());
                let end = end.clamp(start, items.len());
                let mut kept = items[..start].to_vec();
                kept.extend_from_slice(&items[end..]);
                kept
            }
            SliceRule::DropPrefix { count } => items[count.min(items.len())..].to_vec(),
        }
    }
}

/// The per-course override table: course id to slice rule.
///
/// Course ids without an entry (including the empty string) resolve to
/// [`SliceRule::Identity`], so courses with healthy backend records are
/// provably unaffected by anything in the table. The table serialises as a
/// plain JSON object, which keeps it auditable as config data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(HashMap<String, SliceRule>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the rule for a course.
    pub fn set(&mut self, course_id: impl Into<String>, rule: SliceRule) {
        self.0.insert(course_id.into(), rule);
    }

    /// The rule for a course, falling back to [`SliceRule::Identity`].
    pub fn rule_for(&self, course_id: &str) -> SliceRule {
        self.0.get(course_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SliceRule)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (String, SliceRule)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Anything with a published/hidden flag.
pub trait Visible {
    fn is_visible(&self) -> bool;
}

/// The visibility stage: keep only published entries, preserving order.
/// Applying it twice gives the same result as applying it once.
pub fn visible_only<T: Visible + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|i| i.is_visible()).cloned().collect()
}

/// What a student sees for a course: the positional slice for that course,
/// restricted to published lessons.
pub fn viewer_list<T: Visible + Clone>(
    overrides: &Overrides,
    course_id: &str,
    items: &[T],
) -> Vec<T> {
    visible_only(&overrides.rule_for(course_id).apply(items))
}

/// What staff see for a course: the positional slice only. Hidden lessons
/// stay in the list so they can be edited and re-published.
pub fn editor_list<T: Clone>(overrides: &Overrides, course_id: &str, items: &[T]) -> Vec<T> {
    overrides.rule_for(course_id).apply(items)
}
