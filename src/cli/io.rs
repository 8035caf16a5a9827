use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::Result;

/// Prompt for free-form text, prefilled with `initial`. Empty input is allowed.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

/// Yes/no prompt. `None` when the user pressed Esc.
pub fn prompt_toggle(theme: &ColorfulTheme, prompt: &str, current: bool) -> Result<Option<bool>> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(current)
        .interact_opt()?)
}

/// Menu selection returning the chosen index. `None` when the user pressed Esc.
pub fn select_option(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
    default: usize,
) -> Result<Option<usize>> {
    Ok(Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()?)
}
