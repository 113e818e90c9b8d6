//! In-progress item edits and the point/range reconciler.

use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};
use crate::item::{CalendarItem, ItemKind, Occurrence, OccurrenceShape, Stage};

/// An item being edited in the form. Unlike `CalendarItem`, everything is
/// optional until `finish` validates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    /// Present when editing an existing item; `None` drafts get a fresh id
    /// at `finish`.
    pub id: Option<String>,
    pub kind: Option<ItemKind>,
    pub title: String,
    pub project_id: Option<String>,
    pub person_id: Option<String>,
    pub stage: Option<Stage>,
    pub occurrence: Option<Occurrence>,
    pub note: Option<String>,
}

impl ItemDraft {
    /// A fresh draft defaulting to a point occurrence at `at`.
    pub fn new_point(at: NaiveDateTime) -> Self {
        ItemDraft {
            occurrence: Some(Occurrence::Point(at)),
            ..ItemDraft::default()
        }
    }

    /// Load an existing item for editing.
    pub fn from_item(item: &CalendarItem) -> Self {
        ItemDraft {
            id: Some(item.id.clone()),
            kind: Some(item.kind),
            title: item.title.clone(),
            project_id: item.project_id.clone(),
            person_id: item.person_id.clone(),
            stage: item.stage,
            occurrence: Some(item.occurrence),
            note: item.note.clone(),
        }
    }

    /// Switch the draft between point and range representation.
    ///
    /// Lossy in one direction only: collapsing a range keeps its start and
    /// drops its end; expanding a point keeps it as the start and adds a
    /// one-day end. Fields other than the occurrence always pass through.
    /// Never fails; a draft without an occurrence starts from `now`.
    pub fn toggle(mut self, target: OccurrenceShape, now: NaiveDateTime) -> Self {
        let current = self.occurrence;
        self.occurrence = Some(match (current, target) {
            (Some(Occurrence::Point(t)), OccurrenceShape::Range) => Occurrence::Range {
                start: t,
                end: t + Duration::days(1),
            },
            (Some(Occurrence::Range { start, .. }), OccurrenceShape::Point) => {
                Occurrence::Point(start)
            }
            // Already the requested shape
            (Some(occ), _) => occ,
            (None, OccurrenceShape::Point) => Occurrence::Point(now),
            (None, OccurrenceShape::Range) => Occurrence::Range {
                start: now,
                end: now + Duration::days(1),
            },
        });
        self
    }

    /// Validate the draft and turn it into a stored item.
    ///
    /// Rejects empty titles, unset kinds and ranges ending before they
    /// start. A draft without an occurrence becomes a point at `now`. On
    /// success a create draft gets a fresh UUID; an edit draft keeps its id.
    pub fn finish(self, now: NaiveDateTime) -> ScheduleResult<CalendarItem> {
        if self.title.trim().is_empty() {
            return Err(ScheduleError::MissingField("title"));
        }
        let kind = self.kind.ok_or(ScheduleError::MissingField("kind"))?;

        let occurrence = self.occurrence.unwrap_or(Occurrence::Point(now));
        if let Occurrence::Range { start, end } = occurrence {
            if end < start {
                return Err(ScheduleError::InvalidRange { start, end });
            }
        }

        Ok(CalendarItem {
            id: self
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            kind,
            title: self.title,
            project_id: self.project_id,
            person_id: self.person_id,
            stage: self.stage,
            occurrence,
            note: self.note,
        })
    }
}
