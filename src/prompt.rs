use inquire::Text;

use crate::error::AppError;

/// Blocking line input from the user
pub trait Prompt {
    /// Shows `label` and returns the entered line
    fn prompt(&mut self, label: &str) -> Result<String, AppError>;
}

/// [`Prompt`] reading from the terminal through `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn prompt(&mut self, label: &str) -> Result<String, AppError> {
        Ok(Text::new(label).prompt()?)
    }
}
