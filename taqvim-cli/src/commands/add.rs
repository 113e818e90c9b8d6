use anyhow::Result;
use owo_colors::OwoColorize;
use taqvim_core::store::save;
use taqvim_core::{Clock, ItemDraft, SystemClock};

use super::{occurrence_from_flags, parse_kind, parse_stage};
use crate::store::Store;

pub struct Args {
    pub kind: String,
    pub title: String,
    pub project: Option<String>,
    pub person: Option<String>,
    pub stage: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub note: Option<String>,
}

pub fn run(store: Store, args: Args) -> Result<()> {
    let now = SystemClock.now();

    let mut draft = ItemDraft::new_point(now);
    draft.kind = Some(parse_kind(&args.kind)?);
    draft.title = args.title;
    draft.project_id = args.project;
    draft.person_id = args.person;
    draft.stage = args.stage.as_deref().map(parse_stage).transpose()?;
    draft.note = args.note;
    if let Some(occurrence) =
        occurrence_from_flags(args.date.as_deref(), args.start.as_deref(), args.end.as_deref())?
    {
        draft.occurrence = Some(occurrence);
    }

    let next = save(store.items(), draft, now)?;
    if let Some(added) = next.last() {
        println!(
            "{} {} {}",
            "Added".green(),
            added.title,
            format!("({})", added.id).dimmed()
        );
    }
    store.replace_items(next)
}
