//! Main menu and interaction loop.

use crate::app::Session;
use crate::commands::{add_entry, search_entries, view_entries};

/// Action run for a menu key.
pub type Handler = fn(&mut Session<'_>) -> anyhow::Result<()>;

/// One row of the main menu.
pub struct MenuItem {
    pub key: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

pub const QUIT_KEY: &str = "q";

/// Main menu, in display order.
pub const MENU: &[MenuItem] = &[
    MenuItem {
        key: "a",
        description: "Add an entry",
        handler: add_entry,
    },
    MenuItem {
        key: "v",
        description: "View previous entries",
        handler: view_entries,
    },
    MenuItem {
        key: "s",
        description: "Search entries for a string",
        handler: search_entries,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Menu lines, one per item.
pub fn render_menu(items: &[MenuItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("{}) {}", item.key, item.description))
        .collect()
}

pub fn find_item<'m>(items: &'m [MenuItem], choice: &str) -> Option<&'m MenuItem> {
    items.iter().find(|item| item.key == choice)
}

/// Run one iteration: show the menu, read a choice, dispatch.
pub fn step(session: &mut Session<'_>) -> anyhow::Result<LoopState> {
    session.console.clear()?;
    session
        .console
        .write_line(&format!("Enter '{}' to quit.", QUIT_KEY))?;
    for line in render_menu(MENU) {
        session.console.write_line(&line)?;
    }

    let choice = match session.console.read_line("Action: ")? {
        Some(input) => input.trim().to_lowercase(),
        None => return Ok(LoopState::Terminated),
    };
    if choice == QUIT_KEY {
        return Ok(LoopState::Terminated);
    }

    if let Some(item) = find_item(MENU, &choice) {
        tracing::debug!(key = item.key, "menu action");
        session.console.clear()?;
        (item.handler)(session)?;
    }
    Ok(LoopState::Running)
}

/// Repeat [`step`] until the user quits or input ends.
pub fn run(session: &mut Session<'_>) -> anyhow::Result<()> {
    while step(session)? == LoopState::Running {}
    tracing::info!("menu loop terminated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{contents, scripted, store_with, written};
    use crate::ui::UiContext;
    use diary_core::{EntryStore, SqliteStore};

    fn run_script(store: &mut SqliteStore, input: &str) -> String {
        let ui = UiContext::plain();
        let mut console = scripted(input);
        {
            let mut session = Session::new(store, &mut console, &ui);
            run(&mut session).expect("loop should finish");
        }
        written(&console)
    }

    #[test]
    fn test_menu_order_and_labels() {
        assert_eq!(
            render_menu(MENU),
            vec![
                "a) Add an entry",
                "v) View previous entries",
                "s) Search entries for a string",
            ]
        );
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item(MENU, "s").map(|item| item.key), Some("s"));
        assert!(find_item(MENU, "q").is_none());
        assert!(find_item(MENU, "z").is_none());
    }

    #[test]
    fn test_quit_terminates() {
        let mut store = store_with(&[]);
        let ui = UiContext::plain();
        let mut console = scripted(" Q \n");
        let mut session = Session::new(&mut store, &mut console, &ui);
        assert_eq!(step(&mut session).unwrap(), LoopState::Terminated);
    }

    #[test]
    fn test_unknown_choice_keeps_running() {
        let mut store = store_with(&[]);
        let ui = UiContext::plain();
        let mut console = scripted("z\n");
        let mut session = Session::new(&mut store, &mut console, &ui);
        assert_eq!(step(&mut session).unwrap(), LoopState::Running);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let mut store = store_with(&[]);
        let output = run_script(&mut store, "");
        assert!(output.contains("Enter 'q' to quit."));
    }

    #[test]
    fn test_unknown_choice_redisplays_menu() {
        let mut store = store_with(&[]);
        let output = run_script(&mut store, "z\nq\n");
        assert_eq!(output.matches("Enter 'q' to quit.").count(), 2);
    }

    #[test]
    fn test_first_second_scenario() {
        let mut store = store_with(&[]);

        run_script(&mut store, "a\nfirst\n.\ny\na\nsecond\n.\ny\nq\n");
        assert_eq!(contents(&store), vec!["second", "first"]);

        let output = run_script(&mut store, "s\nfir\nn\nq\n");
        assert!(output.contains("first"));
        assert!(!output.contains("second"));

        // view shows "second" first; delete it, then leave
        run_script(&mut store, "V\nd\ny\nq\nq\n");
        assert_eq!(contents(&store), vec!["first"]);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_add_refused_from_menu() {
        let mut store = store_with(&[]);
        run_script(&mut store, "a\ndraft\n.\nn\nq\n");
        assert_eq!(store.count().unwrap(), 0);
    }
}
