mod generate;
mod inspect;

pub use generate::{GenerateArgs, cmd_generate};
pub use inspect::cmd_inspect;
