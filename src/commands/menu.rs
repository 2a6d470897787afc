//! Menu command - interactive add/view/complete loop on the terminal

use std::io;

use priotask::config::Settings;
use priotask::interactive::run_menu;
use priotask::prompt::Prompter;

use super::open_scheduler;

/// Run the interactive menu on stdin/stdout
pub fn menu(settings: &Settings) -> anyhow::Result<()> {
    let mut scheduler = open_scheduler(settings);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    run_menu(&mut scheduler, &mut prompter)?;
    Ok(())
}
