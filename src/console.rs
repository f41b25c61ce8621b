use std::fmt;
use std::io::{self, Write};

pub const DEFAULT_TAG: &str = "=======MMM=======";

pub const OK: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }

    pub fn emit(self, tag: &str, msg: &str) -> i32 {
        let _ = match self {
            Level::Info => write_line(&mut io::stdout().lock(), self, tag, msg),
            Level::Error => write_line(&mut io::stderr().lock(), self, tag, msg),
        };
        OK
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    pub level: Level,
    pub tag: &'a str,
    pub msg: &'a str,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.level, self.tag, self.msg)
    }
}

/// Renders the line up front so it reaches `w` in one `write_all`.
pub fn write_line<W: Write>(w: &mut W, level: Level, tag: &str, msg: &str) -> io::Result<()> {
    let line = format!("{}\n", Line { level, tag, msg });
    w.write_all(line.as_bytes())
}

pub fn info(msg: &str) -> i32 {
    Level::Info.emit(DEFAULT_TAG, msg)
}

pub fn info_tagged(tag: &str, msg: &str) -> i32 {
    Level::Info.emit(tag, msg)
}

pub fn error(msg: &str) -> i32 {
    Level::Error.emit(DEFAULT_TAG, msg)
}

pub fn error_tagged(tag: &str, msg: &str) -> i32 {
    Level::Error.emit(tag, msg)
}
