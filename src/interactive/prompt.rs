//
//  twitter-rest
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Terminal prompts backed by `dialoguer`.

use anyhow::Result;
use dialoguer::{Confirm, Editor, Input, Password};

/// Asks for a line of text.
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input.trim().to_string())
}

/// Asks for a secret without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password.trim().to_string())
}

/// Asks a yes/no question.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Opens the user's editor to compose text.
///
/// Returns `None` when the editor is closed without saving.
pub fn prompt_editor(initial: Option<&str>) -> Result<Option<String>> {
    let mut editor = Editor::new();
    editor.executable(get_editor());
    let result = editor.edit(initial.unwrap_or(""))?;
    Ok(result.map(|text| text.trim().to_string()))
}

/// `TW_EDITOR`, then `EDITOR`, then `VISUAL`, then `nano`.
pub fn get_editor() -> String {
    editor_from(|key| std::env::var(key).ok())
}

fn editor_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["TW_EDITOR", "EDITOR", "VISUAL"]
        .iter()
        .find_map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| "nano".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_precedence() {
        let env = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            }
        };

        assert_eq!(editor_from(env(&[])), "nano");
        assert_eq!(editor_from(env(&[("EDITOR", "vim"), ("VISUAL", "code")])), "vim");
        assert_eq!(editor_from(env(&[("TW_EDITOR", "hx"), ("EDITOR", "vim")])), "hx");
        assert_eq!(editor_from(env(&[("TW_EDITOR", " "), ("VISUAL", "code")])), "code");
    }
}
