//! Demo binary: prints the compile-time name table of a sample enum.
//!
//! Run with: fruits

use std::io;
use std::process::ExitCode;

use clap::Parser;
use enum_names::{EnumNames, listing, make_enum_string};

/// Print every member of the `Fruit` enum with its index
#[derive(Parser, Debug)]
#[command(name = "fruits")]
#[command(version, about, long_about = None)]
struct Cli {}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumNames)]
enum Fruit {
    apple,
    banana,
    cherry,
    grape,
    grapefruit,
    kiwi,
    lemon,
    lime,
    melon,
    orange,
    pear,
    pineapple,
    plum,
    raspberry,
    strawberry,

    EnumSize,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the listing
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let _cli = Cli::parse();

    let fruit_names = make_enum_string::<Fruit>();
    tracing::debug!(count = fruit_names.len(), "fruit name table ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match listing::write_listing(&mut out, "List of fruits:", fruit_names) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "failed to write fruit listing");
            ExitCode::FAILURE
        }
    }
}
