//! Pure collection operations.
//!
//! The engine never owns the item collection; hosts pass the current
//! snapshot in and store the returned one. Nothing here mutates in place,
//! so a rejected save leaves the host's collection exactly as it was.

use chrono::NaiveDateTime;

use crate::draft::ItemDraft;
use crate::error::ScheduleResult;
use crate::item::CalendarItem;

/// Validate `draft` and return a new collection with it applied.
///
/// An item with the draft's id is replaced in place (keeping its position);
/// otherwise the new item is appended. Validation failures surface before
/// anything is built, as a whole-save rejection rather than a partial write.
pub fn save(
    items: &[CalendarItem],
    draft: ItemDraft,
    now: NaiveDateTime,
) -> ScheduleResult<Vec<CalendarItem>> {
    let item = draft.finish(now)?;

    let mut next = Vec::with_capacity(items.len() + 1);
    let mut replaced = false;
    for existing in items {
        if existing.id == item.id {
            next.push(item.clone());
            replaced = true;
        } else {
            next.push(existing.clone());
        }
    }
    if !replaced {
        next.push(item);
    }
    Ok(next)
}

/// A new collection without the item with `id`. A no-op when absent.
pub fn remove(items: &[CalendarItem], id: &str) -> Vec<CalendarItem> {
    items
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect()
}
