//! Interactive shell over a [`Sandbox`]
//!
//! Turns parsed [`Command`]s into sandbox operations and reports the outcome
//! as text. Sandbox errors stop here: they are printed and the loop goes on.

mod command;


pub use command::Command;

use crate::sandbox::{FileEntry, Sandbox, SandboxError};
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell session: one sandbox plus output preferences
pub struct Shell {
    sandbox: Sandbox,
    /// Print listings as JSON instead of plain names
    json: bool,
}

impl Shell {
    pub fn new(sandbox: Sandbox) -> Self {
        Self {
            sandbox,
            json: false,
        }
    }

    /// Print listings as a JSON array of entries
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    /// Prompt showing the absolute cursor path
    pub fn prompt(&self) -> String {
        format!("{}> ", self.sandbox.cursor().display())
    }

    /// Execute one command, writing user-facing messages to `out`.
    ///
    /// Only failures writing to `out` are returned; sandbox errors are
    /// reported as messages.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        let outcome = match command {
            Command::Empty => return Ok(Flow::Continue),
            Command::Exit => {
                writeln!(out, "Exiting the program.")?;
                return Ok(Flow::Exit);
            }
            Command::Help => {
                writeln!(out, "{}", Command::help_text())?;
                return Ok(Flow::Continue);
            }
            Command::Unknown(name) => {
                writeln!(out, "Unknown command: {}. Type 'help' for commands.", name)?;
                return Ok(Flow::Continue);
            }
            Command::Pwd => Ok(self.sandbox.cursor_virtual()),
            Command::List => self.sandbox.list().and_then(|entries| self.render_list(&entries)),
            Command::Cd(path) => self.change_dir(&path),
            Command::Leave => self.leave_dir(),
            Command::MakeDir(name) => with_arg("mkdir <name>", &name, |name| {
                self.sandbox
                    .make_dir(name)
                    .map(|_| format!("Directory {} created.", name))
            }),
            Command::MakeFile { name, content } => with_arg("mkfile <name> [content]", &name, |name| {
                self.sandbox
                    .create_file(name, &content)
                    .map(|_| format!("File {} created.", name))
            }),
            Command::Cat(name) => with_arg("cat <name>", &name, |name| self.sandbox.read_file(name)),
            Command::DeleteFile(name) => with_arg("delfile <name>", &name, |name| {
                self.sandbox
                    .delete_file(name)
                    .map(|_| format!("File {} deleted.", name))
            }),
            Command::DeleteDir(name) => with_arg("delfolder <name>", &name, |name| {
                self.sandbox
                    .delete_dir(name)
                    .map(|_| format!("Directory {} and its contents deleted.", name))
            }),
        };

        match outcome {
            Ok(message) => writeln!(out, "{}", message)?,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                writeln!(out, "{}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn change_dir(&mut self, path: &str) -> Result<String, SandboxError> {
        self.sandbox.enter(path)?;
        Ok(format!("Changed directory to {}", self.sandbox.cursor_virtual()))
    }

    fn leave_dir(&mut self) -> Result<String, SandboxError> {
        self.sandbox.ascend()?;
        Ok(format!("Moved up to {}", self.sandbox.cursor_virtual()))
    }

    fn render_list(&self, entries: &[FileEntry]) -> Result<String, SandboxError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(entries)?);
        }

        if entries.is_empty() {
            return Ok("The directory is empty.".to_string());
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                if entry.is_dir() {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                }
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Run the interactive read loop until `exit` or end of input
    pub fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new().context("Failed to initialize readline")?;

        println!("Welcome to the sandbox shell!");
        println!("Type 'help' for commands, 'exit' to quit.");

        loop {
            match rl.readline(&self.prompt()) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }

                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    let flow = self
                        .execute(Command::parse(&line), &mut out)
                        .context("Failed to write output")?;
                    if flow == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e).context("Failed to read input"),
            }
        }

        Ok(())
    }
}

/// Run `op` with a non-empty argument, otherwise produce a usage message.
fn with_arg<F>(usage: &str, arg: &str, op: F) -> Result<String, SandboxError>
where
    F: FnOnce(&str) -> Result<String, SandboxError>,
{
    if arg.is_empty() {
        return Ok(format!("Usage: {}", usage));
    }
    op(arg)
}
