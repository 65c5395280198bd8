use diary_core::storage::Entry;

use crate::app::Session;
use crate::ui::render::badge;
use crate::ui::Badge;

/// Delete `entry` after confirmation. Declining is the default.
///
/// Returns whether the entry was deleted.
pub fn delete_entry(session: &mut Session<'_>, entry: &Entry) -> anyhow::Result<bool> {
    if !session.console.confirm("Are you sure?", false)? {
        return Ok(false);
    }

    let removed = session.store.delete(&entry.id)?;
    tracing::info!(id = %entry.id, removed, "entry deleted");

    let message = badge(session.ui, Badge::Ok, "Entry deleted!");
    session.console.write_line(&message)?;
    Ok(true)
}
