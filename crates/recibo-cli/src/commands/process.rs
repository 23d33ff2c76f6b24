//! Process command - extract expense data from a single receipt text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use recibo_core::models::config::ReciboConfig;
use recibo_core::{ExpenseParser, ExtractionResult};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// User the expense belongs to
    #[arg(short, long)]
    user: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        ReciboConfig::from_file(std::path::Path::new(path))?
    } else {
        ReciboConfig::default()
    };

    let text = read_input(args.input.as_deref())?;
    if text.trim().is_empty() {
        anyhow::bail!("Input is empty");
    }

    info!("Processing {} characters of receipt text", text.len());

    let user = args
        .user
        .clone()
        .unwrap_or_else(|| config.extraction.default_user.clone());

    let parser = ExpenseParser::new()
        .with_config(config.extraction.clone())
        .with_excerpt_limit(config.output.excerpt_limit);

    let result = parser.parse(&text, &user);

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_result(&result, args.format, config.output.pretty_json)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: Option<&std::path::Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty_json: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if pretty_json {
                Ok(serde_json::to_string_pretty(&result.record)?)
            } else {
                Ok(serde_json::to_string(&result.record)?)
            }
        }
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date",
        "user",
        "merchant",
        "amount",
        "category",
        "description",
        "payment_method",
    ])?;

    let record = &result.record;
    wtr.write_record([
        record.date.clone(),
        record.user.clone(),
        record.merchant.clone(),
        record.amount.to_string(),
        record.category.label().to_string(),
        record.description.clone(),
        record.payment_method.label().to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let record = &result.record;
    let mut output = String::new();

    output.push_str(&format!("Date:      {}\n", record.date));
    output.push_str(&format!("User:      {}\n", record.user));
    output.push_str(&format!("Merchant:  {}\n", record.merchant));
    output.push_str(&format!("Amount:    R$ {}\n", record.amount));
    output.push_str(&format!("Category:  {}\n", record.category));
    output.push_str(&format!("Items:     {}\n", record.description));
    output.push_str(&format!("Payment:   {}\n", record.payment_method));

    if !result.warnings.is_empty() {
        output.push('\n');
        output.push_str(&format!("Warnings:  {}\n", result.warnings.join("; ")));
    }

    output
}
