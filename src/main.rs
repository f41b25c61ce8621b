use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use dslog::console;

mod cli;
mod cmd;

use cli::{Cli, Cmd, USAGE_TEXT};
use cmd::{cmd_error, cmd_info};

const SELF_TAG: &str = "dslog";

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            console::error_tagged(SELF_TAG, &failure_message(&e));
            ExitCode::from(1)
        }
    }
}

fn failure_message(e: &anyhow::Error) -> String {
    format!("{e:#}")
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let Some(cmd) = cli.cmd else {
        eprint!("{USAGE_TEXT}");
        return Ok(2);
    };

    match cmd {
        Cmd::Help => {
            print!("{USAGE_TEXT}");
            Ok(0)
        }
        Cmd::Info(args) => cmd_info(&args),
        Cmd::Error(args) => cmd_error(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use dslog::console::{Level, Line};
    use std::io;

    #[test]
    fn flush_failure_renders_as_self_tagged_error() {
        let e = Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
            .context("flush stdout")
            .unwrap_err();
        let msg = failure_message(&e);
        assert_eq!(msg, "flush stdout: broken pipe");

        let line = Line {
            level: Level::Error,
            tag: SELF_TAG,
            msg: &msg,
        };
        assert_eq!(line.to_string(), "[ERROR][dslog] flush stdout: broken pipe");
    }
}
