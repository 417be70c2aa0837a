use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::LevelFilter;
use xword_reader::{Crossword, CrosswordReader, WsjFormatter};

/// Load a WSJ JSON crossword and print its contents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle file
    path: PathBuf,

    /// Text encoding of the file (e.g. "utf-8", "windows-1252")
    #[arg(short, long)]
    encoding: Option<String>,

    /// Print the parsed puzzle as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Respects `--debug`, and `RUST_LOG` when it is set.
fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: Failed to read puzzle");
            eprintln!("  {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let reader = CrosswordReader::new(WsjFormatter::new(), cli.encoding.as_deref())?;
    let crossword = reader.read_path(&cli.path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&crossword)?);
    } else {
        print_summary(&crossword);
    }
    Ok(())
}

fn print_summary(crossword: &Crossword) {
    println!("Title: {}", crossword.title);
    println!("Author: {}", crossword.author);
    println!("Copyright: {}", crossword.copyright);
    println!("Dimensions: {}x{}", crossword.width, crossword.height);
    if let Some(date) = crossword.release_date {
        println!("Released: {}", date);
    }
    if !crossword.description.is_empty() {
        println!("Description: {}", crossword.description);
    }

    println!("\nAcross clues:");
    for word in crossword.words_across() {
        println!("  {}. {} ({})", word.number, word.hint, word.answer());
    }
    println!("\nDown clues:");
    for word in crossword.words_down() {
        println!("  {}. {} ({})", word.number, word.hint, word.answer());
    }
}
