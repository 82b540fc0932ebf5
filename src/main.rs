use clap::Parser;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use trellis::{Document, TrellisError};

/// Lays out a JSON document and prints the resulting geometry as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the layout document
    document: PathBuf,

    /// Override the owner width
    #[arg(long)]
    width: Option<f32>,

    /// Override the owner height
    #[arg(long)]
    height: Option<f32>,

    /// Pretty-print the report
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<(), TrellisError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "trellis=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let reader = BufReader::new(File::open(&args.document)?);
    let document = Document::from_reader(reader)?.with_owner(args.width, args.height);
    log::info!(
        "Loaded {} ({}x{})",
        args.document.display(),
        document.owner.width,
        document.owner.height
    );

    let report = document.layout()?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);
    Ok(())
}
