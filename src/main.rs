//! Taginput CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Edit tags interactively (default command)
//! taginput
//! taginput -t rust -t go --validate text edit
//!
//! # Feed candidates through the input and print what was accepted
//! taginput add --validate email mati@tucci.me foo
//! taginput --json add a b a
//! taginput add --events a b
//!
//! # Which validation modes accept a value?
//! taginput check 2002-04-03
//!
//! # Configuration
//! taginput config init
//! taginput config show
//! ```
//!
//! Set `RUST_LOG=debug` to see why candidates are rejected.

use taginput::{TagInputError, cli::Cli, commands};

fn main() -> Result<(), TagInputError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();
    commands::execute(&cli, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}
