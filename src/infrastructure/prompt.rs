//! Terminal confirmations

use dialoguer::theme::Theme;
use dialoguer::Confirm;

use crate::domain::ports::Confirmer;
use crate::error::{StackpilotError, StackpilotResult};

/// Asks on the terminal; the default answer is always "no".
pub struct DialoguerConfirmer {
    theme: Box<dyn Theme>,
}

impl DialoguerConfirmer {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }
}

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> StackpilotResult<bool> {
        let answer = Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(|e| StackpilotError::Io(std::io::Error::other(e.to_string())))?;
        tracing::debug!(prompt, ?answer, "confirmation");
        // Esc counts as "no".
        Ok(answer.unwrap_or(false))
    }
}
