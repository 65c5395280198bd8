use diary_core::storage::EntryFilter;

use crate::app::Session;
use crate::commands::delete_entry;
use crate::ui::render::entry_screen;

/// What to do after looking at one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryAction {
    Next,
    Delete,
    Quit,
}

impl EntryAction {
    /// `q` quits, `d` deletes, everything else moves on. End of input quits.
    fn parse(input: Option<&str>) -> Self {
        match input.map(|value| value.trim().to_lowercase()).as_deref() {
            None | Some("q") => Self::Quit,
            Some("d") => Self::Delete,
            Some(_) => Self::Next,
        }
    }
}

/// Page through all entries, newest first.
pub fn view_entries(session: &mut Session<'_>) -> anyhow::Result<()> {
    browse_entries(session, None)
}

/// Ask for a fragment and page through the entries containing it.
pub fn search_entries(session: &mut Session<'_>) -> anyhow::Result<()> {
    match session.console.read_line("Search query: ")? {
        Some(query) => browse_entries(session, Some(query)),
        None => Ok(()),
    }
}

/// Page through entries, optionally filtered by `fragment`.
///
/// The entries are fetched once. Deleting one does not re-run the query;
/// paging continues over the fetched snapshot.
pub fn browse_entries(session: &mut Session<'_>, fragment: Option<String>) -> anyhow::Result<()> {
    let mut filter = EntryFilter::new();
    if let Some(fragment) = fragment {
        filter = filter.contains(fragment);
    }

    let entries = session.store.list(&filter)?;
    if entries.is_empty() {
        session.console.write_line("No entries found.")?;
        return session.console.pause();
    }

    for entry in &entries {
        session.console.clear()?;
        for line in entry_screen(session.ui, entry) {
            session.console.write_line(&line)?;
        }

        let answer = session.console.read_line("Action: [Ndq] ")?;
        match EntryAction::parse(answer.as_deref()) {
            EntryAction::Quit => break,
            EntryAction::Delete => {
                delete_entry(session, entry)?;
            }
            EntryAction::Next => {}
        }
    }
    Ok(())
}
