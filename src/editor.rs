//! External text editor round trips for the `rmine` tool.
//!
//! This module provides functionality to:
//! - Detect the user's preferred editor from the settings or environment
//! - Write a template to a temporary file, launch the editor and read it back
//! - Parse the edited text into issue, project, notes or wiki content

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, warn};

/// Template for a new issue.
pub const ISSUE_TEMPLATE: &str = "### Subject Here ###\n### Description Here ###\n";

/// Template for a new project.
pub const PROJECT_TEMPLATE: &str = "### Name Here ###\n### Identifier Here ###\n### Description Here ###\n";

/// Body of the notes template, below the issue title line.
pub const NOTES_TEMPLATE: &str = "### Notes Here ###\n";

/// Errors that can occur during external editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Failed to create the temporary file.
    #[error("Failed to create temporary file: {0}")]
    TempFileCreation(#[source] io::Error),

    /// Failed to spawn the editor process.
    #[error("Failed to launch editor '{editor}': {source}")]
    EditorSpawn {
        editor: String,
        #[source]
        source: io::Error,
    },

    /// The editor command could not be split into program and arguments.
    #[error("Invalid editor command '{editor}': {reason}")]
    InvalidCommand { editor: String, reason: String },

    /// Editor exited with a non-zero status code.
    #[error("Editor exited with status code {0}")]
    EditorExecution(i32),

    /// Editor was terminated by a signal.
    #[error("Editor was terminated by a signal")]
    EditorTerminated,

    /// Failed to read content back from the temporary file.
    #[error("Failed to read content from temporary file: {0}")]
    ContentRead(#[source] io::Error),

    /// The text was saved unchanged.
    #[error("Canceled")]
    Canceled,

    /// The edited text does not have the expected lines.
    #[error("Invalid Format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;

/// Something that lets the user edit a piece of text.
pub trait TextEditor {
    /// Edit `content` and return the saved text.
    ///
    /// `label` names the edited entity and ends up in the temp file name.
    fn edit(&self, label: &str, content: &str) -> Result<String>;
}

/// Launches the user's editor on a temporary file.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    editor: String,
}

impl ExternalEditor {
    /// Use the configured editor, or detect one from the environment.
    pub fn new(configured: Option<&str>) -> Self {
        let editor = configured
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or_else(get_editor);
        Self { editor }
    }

    pub fn with_editor(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// Open an existing file (such as the settings file) in place.
    pub fn open_file(&self, path: &Path) -> Result<()> {
        self.launch_editor(path)
    }

    fn launch_editor(&self, path: &Path) -> Result<()> {
        let (program, args) = self.command()?;
        debug!(editor = %self.editor, path = %path.display(), "Launching editor");
        let status = Command::new(program).args(args).arg(path).status().map_err(|e| {
            EditorError::EditorSpawn {
                editor: self.editor.clone(),
                source: e,
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(EditorError::EditorExecution(code)),
                None => Err(EditorError::EditorTerminated),
            }
        }
    }

    /// Split the editor command with shell quoting rules, e.g. `code --wait`.
    fn command(&self) -> Result<(String, Vec<String>)> {
        let invalid = |reason: String| EditorError::InvalidCommand {
            editor: self.editor.clone(),
            reason,
        };
        let mut words = shell_words::split(&self.editor).map_err(|e| invalid(e.to_string()))?;
        if words.is_empty() {
            return Err(invalid("empty command".to_string()));
        }
        let program = words.remove(0);
        Ok((program, words))
    }
}

impl TextEditor for ExternalEditor {
    fn edit(&self, label: &str, content: &str) -> Result<String> {
        let temp_path = create_temp_file(label, content)?;

        let result = self.launch_editor(&temp_path);

        // read and remove the file even if the editor failed
        let read_result = read_and_cleanup(&temp_path);

        result?;
        read_result
    }
}

/// Detect the user's preferred editor from environment variables.
///
/// Checks `$EDITOR`, then `$VISUAL`, then falls back to `notepad` on Windows
/// and `vim` elsewhere.
pub fn get_editor() -> String {
    env::var("EDITOR")
        .ok()
        .filter(|e| !e.is_empty())
        .or_else(|| env::var("VISUAL").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "vim".to_string()
            }
        })
}

/// Create `rmine-{label}-{pid}.txt` in the system temp directory.
fn create_temp_file(label: &str, content: &str) -> Result<PathBuf> {
    let safe_label: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let filename = format!("rmine-{}-{}.txt", safe_label, std::process::id());
    let path = env::temp_dir().join(filename);

    fs::write(&path, content).map_err(EditorError::TempFileCreation)?;

    Ok(path)
}

fn read_and_cleanup(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(EditorError::ContentRead)?;

    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to clean up temporary file {:?}: {}", path, e);
    }

    Ok(content)
}

/// Subject and description of an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueText {
    pub subject: String,
    pub description: String,
}

impl IssueText {
    /// The editor text for an existing issue.
    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.subject, self.description)
    }

    /// First line is the subject, everything after it the description.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once('\n') {
            Some((subject, description)) => Ok(Self {
                subject: subject.to_string(),
                description: description.to_string(),
            }),
            None => Ok(Self {
                subject: text.to_string(),
                description: String::new(),
            }),
        }
    }
}

/// Name, identifier and description of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectText {
    pub name: String,
    pub identifier: String,
    pub description: String,
}

impl ProjectText {
    pub fn render(&self) -> String {
        format!("{}\n{}\n{}\n", self.name, self.identifier, self.description)
    }

    /// Name and identifier on the first two lines, then the description.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.splitn(3, '\n');
        let name = lines.next().unwrap_or_default();
        let identifier = lines
            .next()
            .ok_or_else(|| EditorError::InvalidFormat("expected name and identifier lines".to_string()))?;
        let description = lines.next().unwrap_or_default().trim_end_matches('\n');

        Ok(Self {
            name: name.to_string(),
            identifier: identifier.to_string(),
            description: description.to_string(),
        })
    }
}

/// Edit an issue, starting from `existing` or the blank template.
pub fn issue_from_editor(editor: &dyn TextEditor, label: &str, existing: Option<&IssueText>) -> Result<IssueText> {
    let contents = existing
        .map(IssueText::render)
        .unwrap_or_else(|| ISSUE_TEMPLATE.to_string());
    let text = editor.edit(label, &contents)?;
    if text == contents || text.is_empty() {
        return Err(EditorError::Canceled);
    }
    IssueText::parse(&text)
}

/// Edit a project, starting from `existing` or the blank template.
pub fn project_from_editor(
    editor: &dyn TextEditor,
    label: &str,
    existing: Option<&ProjectText>,
) -> Result<ProjectText> {
    let contents = existing
        .map(ProjectText::render)
        .unwrap_or_else(|| PROJECT_TEMPLATE.to_string());
    let text = editor.edit(label, &contents)?;
    if text == contents || text.is_empty() {
        return Err(EditorError::Canceled);
    }
    ProjectText::parse(&text)
}

/// Write notes for an issue.
///
/// The first line shows the issue title and is dropped from the result.
pub fn notes_from_editor(editor: &dyn TextEditor, label: &str, title: &str) -> Result<String> {
    let contents = format!("{}\n{}", title, NOTES_TEMPLATE);
    let text = editor.edit(label, &contents)?;
    let notes = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    if notes == NOTES_TEMPLATE || notes.trim().is_empty() {
        return Err(EditorError::Canceled);
    }
    Ok(notes.to_string())
}

/// Edit the text of a wiki page.
pub fn wiki_from_editor(editor: &dyn TextEditor, label: &str, text: &str) -> Result<String> {
    let edited = editor.edit(label, text)?;
    if edited == text {
        return Err(EditorError::Canceled);
    }
    Ok(edited)
}
