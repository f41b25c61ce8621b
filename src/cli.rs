use clap::{Parser, Subcommand};

pub const USAGE_TEXT: &str = r#"dslog: print tagged log lines to stdout/stderr

Usage:
  dslog info [--tag <tag>] <message>...
  dslog error [--tag <tag>] <message>...
  dslog help

Output:
  info   [INFO][<tag>] <message>     (stdout)
  error  [ERROR][<tag>] <message>    (stderr)

  Without --tag the tag is "=======MMM=======".
  Message words are joined with single spaces.
"#;

#[derive(Parser, Debug)]
#[command(name = "dslog")]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print usage
    Help,

    /// Write an [INFO] line to stdout
    Info(LineArgs),

    /// Write an [ERROR] line to stderr
    Error(LineArgs),
}

#[derive(clap::Args, Debug)]
pub struct LineArgs {
    /// Label printed between the level and the message
    #[arg(long, short = 't')]
    pub tag: Option<String>,

    #[arg(
        required = true,
        value_name = "MESSAGE",
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub message: Vec<String>,
}

impl LineArgs {
    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}
