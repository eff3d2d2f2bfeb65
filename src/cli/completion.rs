//
//  twitter-rest
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shell completion commands

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::{Cli, GlobalOptions};

/// Generate shell completion scripts
///
/// For example, `tw completion zsh > ~/.zfunc/_tw`.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    pub async fn run(&self, _global: &GlobalOptions) -> Result<()> {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, crate::APP_NAME, &mut std::io::stdout());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_shell_names() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            assert!(Cli::try_parse_from(["tw", "completion", shell]).is_ok(), "{shell}");
        }
        assert!(Cli::try_parse_from(["tw", "completion", "tcsh"]).is_err());
    }

    #[test]
    fn test_generated_script_names_binary() {
        let mut out = Vec::new();
        generate(Shell::Bash, &mut Cli::command(), crate::APP_NAME, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_tw"));
    }
}
