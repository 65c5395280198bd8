use diary_core::storage::NewEntry;

use crate::app::Session;
use crate::ui::render::badge;
use crate::ui::Badge;

/// Capture a multi-line entry and save it after confirmation.
///
/// Empty text is ignored without asking. Saving is the default answer.
pub fn add_entry(session: &mut Session<'_>) -> anyhow::Result<()> {
    session
        .console
        .write_line("Enter your entry. Press Ctrl+D when finished.")?;

    let text = session.console.read_block()?;
    let content = text.trim();
    if content.is_empty() {
        tracing::debug!("empty entry ignored");
        return Ok(());
    }

    if !session.console.confirm("Save entry?", true)? {
        tracing::debug!("entry discarded");
        return Ok(());
    }

    let id = session.store.create(&NewEntry::new(content))?;
    tracing::info!(%id, "entry saved");

    let message = badge(session.ui, Badge::Ok, "Saved successfully!");
    session.console.write_line(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{contents, scripted, store_with, written};
    use crate::ui::UiContext;
    use diary_core::EntryStore;

    fn run_add(store: &mut diary_core::SqliteStore, input: &str) -> String {
        let ui = UiContext::plain();
        let mut console = scripted(input);
        {
            let mut session = Session::new(store, &mut console, &ui);
            add_entry(&mut session).expect("add should succeed");
        }
        written(&console)
    }

    #[test]
    fn test_add_with_default_confirmation_saves() {
        let mut store = store_with(&[]);
        let output = run_add(&mut store, "Dear diary,\ntoday was fine.\n.\n\n");

        assert_eq!(contents(&store), vec!["Dear diary,\ntoday was fine."]);
        assert!(output.contains("Save entry? [Yn] "));
        assert!(output.contains("Saved successfully!"));
    }

    #[test]
    fn test_add_with_explicit_yes_saves() {
        let mut store = store_with(&[]);
        run_add(&mut store, "hello\n.\ny\n");
        assert_eq!(contents(&store), vec!["hello"]);
    }

    #[test]
    fn test_add_refused_creates_nothing() {
        let mut store = store_with(&["existing"]);
        let output = run_add(&mut store, "not this one\n.\nn\n");

        assert_eq!(store.count().unwrap(), 1);
        assert!(!output.contains("Saved successfully!"));
    }

    #[test]
    fn test_add_empty_text_skips_confirmation() {
        let mut store = store_with(&[]);
        let output = run_add(&mut store, "   \n\n.\n");

        assert_eq!(store.count().unwrap(), 0);
        assert!(!output.contains("Save entry?"));
    }

    #[test]
    fn test_add_until_end_of_input_saves_by_default() {
        let mut store = store_with(&[]);
        run_add(&mut store, "typed then ctrl-d\n");
        assert_eq!(contents(&store), vec!["typed then ctrl-d"]);
    }
}
