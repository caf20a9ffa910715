use std::env;

mod cli;
mod clipboard;
mod exits;
mod form;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    logging::init(quiet);

    match args.len() {
        1 if cli::is_interactive() => tui::run(),
        _ => std::process::exit(cli::run(&args)),
    }
}
