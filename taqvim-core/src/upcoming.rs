//! Nearest scheduled item per project.

use crate::item::CalendarItem;

/// The chronologically nearest item linked to `project_id`, by effective
/// start (a range counts from its start). Equal starts keep collection
/// order. `None` when the project has no items.
pub fn upcoming_for_project<'a>(
    items: &'a [CalendarItem],
    project_id: &str,
) -> Option<&'a CalendarItem> {
    items
        .iter()
        .filter(|item| item.project_id.as_deref() == Some(project_id))
        .min_by_key(|item| item.effective_start())
}
