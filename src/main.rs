use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use md2docx::{Config, Converter, MakeWritable};

#[derive(Parser)]
#[command(name = "md2docx")]
#[command(about = "Convert Markdown files to editable Word documents")]
struct Cli {
    /// Input Markdown file
    #[arg(default_value = "Report.md")]
    input: PathBuf,

    /// Output DOCX file
    #[arg(short, long, default_value = "Report_Editable.docx")]
    output: PathBuf,

    /// TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document title written to the file properties
    #[arg(long)]
    title: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::compiled_default(),
    };
    if let Some(title) = cli.title {
        config.document.title = title;
    }

    let converter = Converter::new(config).with_post_save(MakeWritable);

    match converter.convert(&cli.input, &cli.output) {
        Ok(true) => {
            let output = cli.output.display();
            println!("Created editable DOCX: {}", output);
            println!("\nSUCCESS! Created {}", output);
            println!("Please close Word if it's open, then:");
            println!("1. Open {} in Word", output);
            println!("2. If you see 'Protected View', click 'Enable Editing'");
            println!("3. The document should now be fully editable");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            eprintln!("Error: could not save {}", cli.output.display());
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
