use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::Path;

fn check_extension(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", file_path))?;

    match extension.to_lowercase().as_str() {
        "lrc" | "txt" => Ok(()),
        _ => Err(anyhow::anyhow!(
            "Unsupported file extension: .{}",
            extension
        )),
    }
}

fn main() -> Result<()> {
    let matches = Command::new("lrc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("LRC lyric file reader")
        .arg(
            Arg::new("input")
                .help("Input file (.lrc)")
                .required(true)
                .value_name("INPUT_FILE")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file (.lrc); prints to stdout when omitted")
                .value_name("OUTPUT_FILE")
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .help("Enable verbose output")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sort")
                .help("Sort lyric lines by time")
                .long("sort")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("offset")
                .help("Offset all timestamps by seconds (e.g. 1.5, -0.25)")
                .long("offset")
                .allow_hyphen_values(true)
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("summary")
                .help("Print the parsed document structure instead of LRC text")
                .long("summary")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "info" } else { "warn" }),
    )
    .init();

    let Some(input_file) = matches.get_one::<String>("input") else {
        anyhow::bail!("Missing input file");
    };
    let output_file = matches.get_one::<String>("output");
    let summary = matches.get_flag("summary");

    let transforms = lrc::transforms::TransformDescriptor {
        sort_by_time: matches.get_flag("sort"),
        offset_secs: matches.get_one::<f64>("offset").copied().unwrap_or(0.0),
    };

    check_extension(input_file)
        .with_context(|| format!("Failed to detect input file format: {}", input_file))?;
    if let Some(output_file) = output_file {
        check_extension(output_file)
            .with_context(|| format!("Failed to detect output file format: {}", output_file))?;
    }

    log::info!("Reading LRC file: {}", input_file);
    let content = std::fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file))?;
    let mut lrc = lrc::Lrc::loads(&content)
        .with_context(|| format!("Failed to parse LRC file: {}", input_file))?;
    log::info!(
        "Parsed {} header tag(s) and {} lyric line(s)",
        lrc.tags().len(),
        lrc.len()
    );

    log::info!("Applying transforms...");
    let lyrics = lrc::transforms::apply_transforms(lrc.lyrics(), &transforms);
    *lrc.lyrics_mut() = lyrics;

    let output_content = if summary {
        format!("{:#?}\n", lrc)
    } else {
        lrc.dumps()
    };

    match output_file {
        Some(output_file) => {
            log::info!("Writing LRC file: {}", output_file);
            std::fs::write(output_file, output_content)
                .with_context(|| format!("Failed to write output file: {}", output_file))?;
        }
        None => print!("{}", output_content),
    }

    Ok(())
}
