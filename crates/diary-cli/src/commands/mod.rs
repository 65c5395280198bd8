//! Interactive actions reachable from the main menu.

mod add;
mod delete;
mod view;

pub use add::add_entry;
pub use delete::delete_entry;
pub use view::{search_entries, view_entries};
