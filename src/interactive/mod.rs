//
//  twitter-rest
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal input for the `tw` binary.
//!
//! Commands only prompt when stdin is a terminal and `--no-prompt` is not
//! set; see [`can_prompt`].

mod prompt;

pub use prompt::*;

/// `true` when prompting is allowed and stdin is interactive.
pub fn can_prompt(no_prompt: bool) -> bool {
    !no_prompt && console::user_attended()
}
