//! Confirmer Port
//!
//! Yes/no questions asked during interactive flows.
//! Implementations can be interactive (prompting the user) or automatic.

use crate::error::StackpilotResult;

/// Asks the operator to confirm an action.
///
/// Implementations can be:
/// - `DialoguerConfirmer`: prompts on the terminal
/// - `AutoConfirmer`: always answers yes (`--yes`)
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> StackpilotResult<bool>;
}

/// Confirmer that answers yes to everything.
///
/// Use this when `--yes` flag is passed.
pub struct AutoConfirmer;

impl Confirmer for AutoConfirmer {
    fn confirm(&self, _prompt: &str) -> StackpilotResult<bool> {
        Ok(true)
    }
}

impl<T: Confirmer + ?Sized> Confirmer for &T {
    fn confirm(&self, prompt: &str) -> StackpilotResult<bool> {
        (**self).confirm(prompt)
    }
}
