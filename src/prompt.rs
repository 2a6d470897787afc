//! Text prompts
//!
//! Reads task details line by line, re-prompting until each answer is valid,
//! so nothing malformed reaches the core. End of input is reported as
//! `Ok(None)`.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::core::models::{Priority, Task, parse_due_date};

/// Line-oriented prompt over any reader/writer pair
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the prompts go to
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one line without its line ending
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a non-empty title
    pub fn title(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(title) = self.ask("Enter task title: ")? else {
                return Ok(None);
            };
            if !title.trim().is_empty() {
                return Ok(Some(title));
            }
            writeln!(self.output, "Title cannot be empty.")?;
        }
    }

    /// Ask for a description (may be empty)
    pub fn description(&mut self) -> io::Result<Option<String>> {
        self.ask("Enter description: ")
    }

    /// Ask for a real `YYYY-MM-DD` date
    pub fn due_date(&mut self) -> io::Result<Option<NaiveDate>> {
        loop {
            let Some(answer) = self.ask("Enter due date (YYYY-MM-DD): ")? else {
                return Ok(None);
            };
            match parse_due_date(&answer) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD.")?,
            }
        }
    }

    /// Ask for one of the four priority names (any case)
    pub fn priority(&mut self) -> io::Result<Option<Priority>> {
        let options = Priority::ALL.map(Priority::as_str).join(", ");
        loop {
            let Some(answer) = self.ask(&format!("Enter priority ({options}): "))? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(priority) => return Ok(Some(priority)),
                Err(_) => writeln!(self.output, "Invalid priority. Please choose from the list.")?,
            }
        }
    }

    /// Ask for every field and build a pending task
    pub fn task_details(&mut self) -> io::Result<Option<Task>> {
        let Some(title) = self.title()? else { return Ok(None) };
        let Some(description) = self.description()? else { return Ok(None) };
        let Some(due_date) = self.due_date()? else { return Ok(None) };
        let Some(priority) = self.priority()? else { return Ok(None) };

        Task::new(title, description, due_date, priority)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    /// Ask for a task number
    ///
    /// The inner `Err` carries the raw answer when it is not a number.
    pub fn task_number(&mut self) -> io::Result<Option<Result<usize, String>>> {
        let Some(answer) = self.ask("Enter the number of the task to mark complete: ")? else {
            return Ok(None);
        };
        let trimmed = answer.trim();
        // Negative numbers parse, so they reach the out-of-range check as 0
        Ok(Some(match trimmed.parse::<i64>() {
            Ok(n) => Ok(usize::try_from(n).unwrap_or(0)),
            Err(_) => Err(answer),
        }))
    }
}
