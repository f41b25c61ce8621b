use anyhow::{Context, Result};
use std::io::{self, Write};

use dslog::console;

use crate::cli::LineArgs;

pub fn cmd_info(args: &LineArgs) -> Result<i32> {
    let msg = args.message();
    let code = match args.tag.as_deref() {
        Some(tag) => console::info_tagged(tag, &msg),
        None => console::info(&msg),
    };
    io::stdout().flush().context("flush stdout")?;
    Ok(code)
}

pub fn cmd_error(args: &LineArgs) -> Result<i32> {
    let msg = args.message();
    let code = match args.tag.as_deref() {
        Some(tag) => console::error_tagged(tag, &msg),
        None => console::error(&msg),
    };
    Ok(code)
}
