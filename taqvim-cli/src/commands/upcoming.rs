use anyhow::Result;
use owo_colors::OwoColorize;
use taqvim_core::upcoming::upcoming_for_project;

use super::format_occurrence;
use crate::render::kind_dot;
use crate::store::{Project, Store};

pub fn run(store: &Store, project: Option<&str>) -> Result<()> {
    match project {
        Some(id) => print_project(store, id, store.project(id)),
        None => {
            if store.snapshot.projects.is_empty() {
                println!("{}", "No projects in the registry".dimmed());
                return Ok(());
            }
            for (i, p) in store.snapshot.projects.iter().enumerate() {
                print_project(store, &p.id, Some(p))?;
                if i < store.snapshot.projects.len() - 1 {
                    println!();
                }
            }
            Ok(())
        }
    }
}

fn print_project(store: &Store, id: &str, project: Option<&Project>) -> Result<()> {
    match project {
        Some(p) => {
            println!("{} {}", p.code.bold(), p.title);
            if let Some(status) = &p.status {
                println!("   {}", status.dimmed());
            }
        }
        // Dangling reference: render it, don't fail
        None => println!("{} {}", "unknown project".dimmed(), id),
    }

    match upcoming_for_project(store.items(), id) {
        Some(item) => println!(
            "   next: {} {} {}",
            kind_dot(item.kind),
            item.title,
            format_occurrence(&item.occurrence)?.dimmed()
        ),
        None => println!("   {}", "no scheduled items".dimmed()),
    }
    Ok(())
}
