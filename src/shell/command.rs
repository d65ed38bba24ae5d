//! Shell command parsing

/// Parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change into a directory
    Cd(String),

    /// Move to the parent directory
    Leave,

    /// Create a directory
    MakeDir(String),

    /// Create a file, optionally with initial content
    MakeFile { name: String, content: String },

    /// Print a file's contents
    Cat(String),

    /// Remove a file
    DeleteFile(String),

    /// Remove a directory and its contents
    DeleteDir(String),

    /// List the current directory
    List,

    /// Print the current directory
    Pwd,

    /// Show help text
    Help,

    /// Exit the shell
    Exit,

    /// Empty input (just pressed enter)
    Empty,

    /// Unknown command
    Unknown(String),
}

impl Command {
    /// Parse a line of user input.
    ///
    /// The first word names the command (case-insensitive), the rest of the
    /// line is its argument.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Command::Empty;
        }

        let (name, arg) = split_word(trimmed);

        match name.to_lowercase().as_str() {
            "cd" => Command::Cd(arg.to_string()),
            "leave" | "up" | ".." => Command::Leave,
            "mkdir" => Command::MakeDir(arg.to_string()),
            "mkfile" => {
                let (name, content) = split_word(arg);
                Command::MakeFile {
                    name: name.to_string(),
                    content: content.to_string(),
                }
            }
            "cat" => Command::Cat(arg.to_string()),
            "delfile" => Command::DeleteFile(arg.to_string()),
            "delfolder" => Command::DeleteDir(arg.to_string()),
            "list" | "ls" => Command::List,
            "pwd" => Command::Pwd,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"Available commands:
  cd <path>                 Change into a directory
  leave                     Move up one directory (aliases: up, ..)
  mkdir <name>              Create a directory
  mkfile <name> [content]   Create a file, optionally with content
  cat <name>                Print a file
  delfile <name>            Delete a file
  delfolder <name>          Delete a directory and its contents
  list                      List the current directory (alias: ls)
  pwd                       Print the current directory
  help                      Show this help message (alias: ?)
  exit                      Exit the shell (alias: quit)"#
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}
