//! User input abstraction layer
//!
//! Interactive code asks for lines and confirmations through `UserInput`, so
//! the browse loop and destructive commands can be driven by scripted input
//! in tests.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use rentr::ui::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(line) = input.prompt_line("search").unwrap() {
///     println!("You typed {line}");
/// }
///
/// if input.prompt_confirm("Delete saved search?", false).unwrap() {
///     println!("Deleting...");
/// }
/// ```
pub trait UserInput {
    /// Prompt for one line of text
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered a line (possibly empty)
    /// * `Ok(None)` - Input ended (EOF or interrupted)
    /// * `Err(_)` - Input operation failed
    fn prompt_line(&self, prompt: &str) -> Result<Option<String>>;

    /// Prompt for a yes/no confirmation
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_line(&self, prompt: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        let line = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match line {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(InputError::Io(io::Error::other(e))),
        }
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
