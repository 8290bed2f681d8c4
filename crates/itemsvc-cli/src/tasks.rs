//! Subcommand: `itemsvc tasks`, an interactive in-memory task list.
//!
//! Unrelated to the HTTP service. Tasks live only for the duration of the
//! session.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: usize,
    pub title: String,
    pub complete: bool,
}

/// Errors from task list operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(usize),
}

/// Ordered, in-memory task list.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Ids count up from 1.
    pub fn add(&mut self, title: impl Into<String>) -> &Task {
        let id = self.tasks.len() + 1;
        self.tasks.push(Task {
            id,
            title: title.into(),
            complete: false,
        });
        &self.tasks[id - 1]
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mark task `id` complete. Completing twice is fine.
    pub fn complete(&mut self, id: usize) -> Result<(), TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.complete = true;
        Ok(())
    }
}

/// Run the task list against stdin/stdout.
pub fn cmd_tasks() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive the numbered menu until the user picks exit or input ends.
pub fn run_menu<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    let mut list = TaskList::new();

    loop {
        writeln!(out, "\n--- TODO List Menu ---")?;
        writeln!(out, "1. Add Task")?;
        writeln!(out, "2. List Tasks")?;
        writeln!(out, "3. Mark Task as Complete")?;
        writeln!(out, "4. Exit")?;
        write!(out, "Choose an option: ")?;
        out.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                write!(out, "Enter task title: ")?;
                out.flush()?;
                let title = read_line(&mut input)?.unwrap_or_default();
                list.add(title.trim());
                writeln!(out, "Task added successfully!")?;
            }
            "2" => {
                if list.tasks().is_empty() {
                    writeln!(out, "No tasks found!")?;
                } else {
                    writeln!(out, "\nYour Tasks:")?;
                    for task in list.tasks() {
                        let status = if task.complete { "✓" } else { " " };
                        writeln!(out, "[{status}] {}. {}", task.id, task.title)?;
                    }
                }
            }
            "3" => {
                write!(out, "Enter task ID to mark as complete: ")?;
                out.flush()?;
                let id = read_line(&mut input)?
                    .and_then(|line| line.trim().parse().ok())
                    .unwrap_or(0);
                match list.complete(id) {
                    Ok(()) => writeln!(out, "Task marked as complete!")?,
                    Err(TaskError::NotFound(_)) => writeln!(out, "Task not found!")?,
                }
            }
            "4" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid option! Please try again.")?,
        }
    }
}

/// Read one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_menu(Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ids_are_sequential() {
        let mut list = TaskList::new();
        assert_eq!(list.add("a").id, 1);
        assert_eq!(list.add("b").id, 2);
        assert_eq!(list.tasks().len(), 2);
    }

    #[test]
    fn complete_marks_task() {
        let mut list = TaskList::new();
        list.add("a");
        list.complete(1).unwrap();
        assert!(list.tasks()[0].complete);
        assert_eq!(list.complete(7), Err(TaskError::NotFound(7)));
    }

    #[test]
    fn task_error_display() {
        assert_eq!(TaskError::NotFound(7).to_string(), "task not found: 7");
        let err: anyhow::Error = TaskError::NotFound(3).into();
        assert_eq!(err.to_string(), "task not found: 3");
    }

    #[test]
    fn menu_add_list_complete() {
        let output = run("1\nbuy milk\n1\nwalk dog\n3\n2\n2\n4\n");
        assert!(output.contains("Task added successfully!"));
        assert!(output.contains("Task marked as complete!"));
        assert!(output.contains("[ ] 1. buy milk"));
        assert!(output.contains("[✓] 2. walk dog"));
        assert!(output.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn menu_handles_bad_input() {
        let output = run("2\n9\n3\nabc\n4\n");
        assert!(output.contains("No tasks found!"));
        assert!(output.contains("Invalid option! Please try again."));
        assert!(output.contains("Task not found!"));
    }

    #[test]
    fn menu_stops_at_end_of_input() {
        let output = run("1\nonly\n");
        assert!(output.contains("Task added successfully!"));
        assert!(!output.contains("Goodbye!"));
    }
}
