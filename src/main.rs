use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use voltic_guide::guide::{self, DEFAULT_AUTHOR, DEFAULT_OUTPUT, GuideConfig};
use voltic_guide::ooxml::Result;
use voltic_guide::ooxml::docx::DocumentText;

/// Generates the formatted Voltic user guide.
///
/// Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
#[derive(Parser)]
#[command(author, version, about = "Generate the Voltic user guide as a .docx document")]
struct Cli {
    /// Path of the document to write.
    #[arg(short, long, env = "VOLTIC_GUIDE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Author recorded in the document properties.
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Print the text extracted from the saved document.
    #[arg(long)]
    dump_text: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GuideConfig::default()
        .with_output(&cli.output)
        .with_author(&cli.author);

    let path = guide::write_user_guide(&config)?;
    for line in guide::status_lines(&path) {
        println!("{}", line);
    }

    if cli.dump_text {
        let text = DocumentText::from_path(&path)?;
        println!();
        println!("{}", text.text());
    }
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
