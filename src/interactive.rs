//! Interactive menu loop
//!
//! Add, view and complete tasks until the user exits or input ends.
//! Errors from the scheduler are printed and the loop carries on.

use std::io::{self, BufRead, Write};

use crate::core::ports::TaskRepository;
use crate::core::services::Scheduler;
use crate::error::SchedulerError;
use crate::output::ViewResult;
use crate::prompt::Prompter;

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new task
    Add,
    /// Show pending tasks by priority
    View,
    /// Mark a task complete
    Complete,
    /// Leave the menu
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::View),
            "3" => Ok(Self::Complete),
            "4" => Ok(Self::Exit),
            _ => Err(format!("Invalid choice: {s}")),
        }
    }
}

const MENU: &str = "\n--- Menu ---\n\
                    1: Add a new task\n\
                    2: View scheduled tasks (by priority)\n\
                    3: Mark a task as complete\n\
                    4: Exit";

/// Run the menu until exit or end of input
pub fn run_menu<T, R, W>(scheduler: &mut Scheduler<T>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    T: TaskRepository,
    R: BufRead,
    W: Write,
{
    writeln!(prompter.output(), "Welcome to your task scheduler!")?;

    loop {
        writeln!(prompter.output(), "{MENU}")?;
        let Some(answer) = prompter.ask("Enter your choice (1-4): ")? else {
            break;
        };

        match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => add(scheduler, prompter)?,
            Ok(MenuChoice::View) => view(scheduler, prompter.output())?,
            Ok(MenuChoice::Complete) => {
                if !complete(scheduler, prompter)? {
                    break;
                }
            },
            Ok(MenuChoice::Exit) => break,
            Err(_) => writeln!(prompter.output(), "Invalid choice. Please enter a number from 1 to 4.")?,
        }
    }

    writeln!(prompter.output(), "Saving tasks and exiting. Goodbye!")?;
    Ok(())
}

fn add<T, R, W>(scheduler: &mut Scheduler<T>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    T: TaskRepository,
    R: BufRead,
    W: Write,
{
    let Some(task) = prompter.task_details()? else {
        return Ok(());
    };
    match scheduler.add_task(task) {
        Ok(_) => writeln!(prompter.output(), "\nTask added."),
        Err(e) => writeln!(prompter.output(), "Error: {e}"),
    }
}

fn view<T: TaskRepository, W: Write>(scheduler: &Scheduler<T>, out: &mut W) -> io::Result<()> {
    ViewResult::from(&scheduler.priority_view()).write_human(out)
}

/// Returns `false` when input ended mid-prompt
fn complete<T, R, W>(scheduler: &mut Scheduler<T>, prompter: &mut Prompter<R, W>) -> io::Result<bool>
where
    T: TaskRepository,
    R: BufRead,
    W: Write,
{
    let view = scheduler.priority_view();
    ViewResult::from(&view).write_human(prompter.output())?;
    if view.is_empty() {
        return Ok(true);
    }

    let number = match prompter.task_number()? {
        None => return Ok(false),
        Some(Err(_)) => {
            writeln!(prompter.output(), "Please enter a valid number.")?;
            return Ok(true);
        },
        Some(Ok(n)) => n,
    };

    match scheduler.complete_by_display_index(&view, number) {
        Ok(done) => writeln!(prompter.output(), "\nTask '{}' marked as complete!", done.title)?,
        Err(e @ SchedulerError::OutOfRange { .. }) => {
            writeln!(prompter.output(), "Invalid task number: {e}")?;
        },
        Err(e) => writeln!(prompter.output(), "Error: {e}")?,
    }
    Ok(true)
}
