use clap::Parser;
use diary_core::VERSION;

/// Diary - a small, local, CLI-first journal
///
/// Starts an interactive menu: add entries, page through them newest first,
/// search them by substring and delete them.
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about)]
pub struct Cli {}
