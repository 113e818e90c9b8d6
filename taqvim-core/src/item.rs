//! Calendar items: the unit of scheduling data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category of a calendar item.
///
/// Kinds carry a presentation accent in the front-end but make no difference
/// to scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Meeting,
    Assignment,
    Deadline,
    Event,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Meeting,
        ItemKind::Assignment,
        ItemKind::Deadline,
        ItemKind::Event,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Meeting => "meeting",
            ItemKind::Assignment => "assignment",
            ItemKind::Deadline => "deadline",
            ItemKind::Event => "event",
        }
    }
}

/// Certification workflow stage. Display-only; carries no scheduling
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Registered,
    InReview,
    ReturnedForRevision,
    PreliminaryApproval,
    CertificateIssued,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Registered => "registered",
            Stage::InReview => "in review",
            Stage::ReturnedForRevision => "returned for revision",
            Stage::PreliminaryApproval => "preliminary approval",
            Stage::CertificateIssued => "certificate issued",
        }
    }
}

/// Temporal shape of an item: a single instant, or an inclusive day range.
///
/// The tagged variant makes "exactly one representation" structural; a draft
/// switching between the two goes through `ItemDraft::toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occurrence {
    Point(NaiveDateTime),
    Range {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Occurrence {
    /// Instant used for chronological ordering.
    pub fn effective_start(&self) -> NaiveDateTime {
        match self {
            Occurrence::Point(t) => *t,
            Occurrence::Range { start, .. } => *start,
        }
    }

    pub fn shape(&self) -> OccurrenceShape {
        match self {
            Occurrence::Point(_) => OccurrenceShape::Point,
            Occurrence::Range { .. } => OccurrenceShape::Range,
        }
    }
}

/// Which of the two occurrence representations a draft should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceShape {
    Point,
    Range,
}

/// A scheduled item. Project and person ids are weak references resolved by
/// the presentation layer; dangling ids are not an error here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarItem {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    pub occurrence: Occurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CalendarItem {
    pub fn effective_start(&self) -> NaiveDateTime {
        self.occurrence.effective_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn effective_start_of_both_shapes() {
        let point = Occurrence::Point(at(2024, 3, 10, 9));
        assert_eq!(point.effective_start(), at(2024, 3, 10, 9));

        let range = Occurrence::Range {
            start: at(2024, 3, 5, 8),
            end: at(2024, 3, 8, 17),
        };
        assert_eq!(range.effective_start(), at(2024, 3, 5, 8));
    }

    #[test]
    fn item_json_round_trip() {
        let item = CalendarItem {
            id: "i1".into(),
            kind: ItemKind::Deadline,
            title: "Revision deadline".into(),
            project_id: Some("p2".into()),
            person_id: None,
            stage: Some(Stage::ReturnedForRevision),
            occurrence: Occurrence::Point(at(2024, 3, 23, 16)),
            note: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: CalendarItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        // Absent optional fields stay out of the wire shape
        assert!(!json.contains("person_id"));
    }
}
