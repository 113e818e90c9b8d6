use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use taqvim_core::store::save;
use taqvim_core::{Clock, ItemDraft, OccurrenceShape, SystemClock};

use super::{occurrence_from_flags, parse_kind, parse_stage};
use crate::store::Store;

pub struct Args {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub project: Option<String>,
    pub person: Option<String>,
    pub stage: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub note: Option<String>,
    pub to_range: bool,
    pub to_point: bool,
}

pub fn run(store: Store, id: &str, args: Args) -> Result<()> {
    let now = SystemClock.now();

    let item = store
        .items()
        .iter()
        .find(|item| item.id == id)
        .with_context(|| format!("No item with id '{id}'"))?;
    let mut draft = ItemDraft::from_item(item);

    if let Some(kind) = &args.kind {
        draft.kind = Some(parse_kind(kind)?);
    }
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(project) = args.project {
        draft.project_id = Some(project);
    }
    if let Some(person) = args.person {
        draft.person_id = Some(person);
    }
    if let Some(stage) = &args.stage {
        draft.stage = Some(parse_stage(stage)?);
    }
    if let Some(note) = args.note {
        draft.note = Some(note);
    }
    if let Some(occurrence) =
        occurrence_from_flags(args.date.as_deref(), args.start.as_deref(), args.end.as_deref())?
    {
        draft.occurrence = Some(occurrence);
    }

    if args.to_range {
        draft = draft.toggle(OccurrenceShape::Range, now);
    }
    if args.to_point {
        draft = draft.toggle(OccurrenceShape::Point, now);
    }

    let next = save(store.items(), draft, now)?;
    println!("{} {}", "Updated".yellow(), id);
    store.replace_items(next)
}
