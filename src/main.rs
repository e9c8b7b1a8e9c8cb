use std::path::Path;
use clap::{ ArgAction, CommandFactory, Parser };
use tracing::{ debug, error };
use tracing_subscriber::EnvFilter;

mod archive_handler;
mod dependency;
mod error;
mod filename_parser;
mod output;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Jar/war file
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<String>,

    /// Log archive and parsing details to stderr
    #[arg(long, short, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "jar_dependencies=debug" } else { "jar_dependencies=warn" };

    // stdout carries the JSON result, so logs go to stderr
    tracing_subscriber
        ::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(file: &str) -> error::Result<()> {
    let dependencies = archive_handler::extract_dependencies(Path::new(file))?;
    debug!(file, count = dependencies.len(), "found dependencies");

    println!("{}", output::render_json(&dependencies)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = match args.file.as_deref() {
        Some(file) if !file.is_empty() => file,
        _ => {
            println!("Usage: jar-dependencies -f file.jar");
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(file) {
        error!("{}", e);
        std::process::exit(1);
    }
}
