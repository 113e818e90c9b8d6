use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use taqvim_core::store::remove;

use crate::store::Store;

pub fn run(store: Store, id: &str) -> Result<()> {
    if !store.items().iter().any(|item| item.id == id) {
        bail!("No item with id '{}'", id);
    }

    let next = remove(store.items(), id);
    println!("{} {}", "Removed".red(), id);
    store.replace_items(next)
}
