mod emit;

pub use emit::{cmd_error, cmd_info};
