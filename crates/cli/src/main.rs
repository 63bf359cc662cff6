// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use muxgen_codegen::{HeaderGenerator, HeaderOptions, InfoClassGenerator};
use muxgen_config::DeviceDescriptor;
use muxgen_core::{emit_info_table, PcrRecord, Registry};
use muxgen_ir::DevicePackage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

const EXIT_OK: u8 = 0;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_GENERATION_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(author, version, about = "Muxgen pin mapping table generator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the pin mapping header for one package
    Generate(GenerateArgs),
    /// Print the PCR records of one template
    Table(TableArgs),
    /// Load a descriptor and report what it resolves to
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct Selection {
    /// Path to the device descriptor (YAML or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Device whose package is used
    #[arg(short, long)]
    device: Option<String>,

    /// Package name, overriding the device's package
    #[arg(short, long)]
    package: Option<String>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    selection: Selection,

    /// Output file. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TableArgs {
    #[command(flatten)]
    selection: Selection,

    /// Template base name, e.g. Ftm0
    #[arg(short, long)]
    template: String,

    /// Emit records as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Path to the device descriptor (YAML or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct CheckReport {
    family: String,
    pins: usize,
    peripherals: usize,
    functions: usize,
    used_templates: Vec<String>,
    packages: Vec<String>,
    devices: Vec<String>,
    dma_sources: usize,
}

#[derive(Serialize, Debug)]
struct TableReport<'a> {
    template: &'a str,
    package: &'a str,
    records: &'a [PcrRecord],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so generated output on stdout stays clean
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Table(args) => run_table(args),
        Commands::Check(args) => run_check(args),
    };
    match result {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Descriptor problems are configuration errors; everything else failed during generation.
fn exit_code_for(error: &anyhow::Error) -> u8 {
    let config = error.chain().any(|cause| {
        cause.is::<muxgen_config::DescriptorError>()
            || cause.is::<serde_yaml::Error>()
            || cause.is::<serde_json::Error>()
            || cause.is::<std::io::Error>()
    });
    if config {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_GENERATION_ERROR
    }
}

fn load_registry(path: &Path) -> Result<Registry> {
    let descriptor = DeviceDescriptor::from_file(path)?;
    let registry = descriptor
        .populate()
        .with_context(|| format!("Failed to populate registry from {:?}", path))?;
    Ok(registry)
}

fn select_package<'a>(registry: &'a Registry, selection: &Selection) -> Result<&'a DevicePackage> {
    let name = match (&selection.package, &selection.device) {
        (Some(package), _) => package.clone(),
        (None, Some(device)) => registry
            .find_device(device)
            .map(|d| d.package.clone())
            .ok_or_else(|| anyhow!("Unknown device {}", device))?,
        (None, None) => registry
            .devices()
            .first()
            .map(|d| d.package.clone())
            .ok_or_else(|| anyhow!("Descriptor lists no devices; pass --package"))?,
    };
    registry
        .find_device_package(&name)
        .ok_or_else(|| anyhow!("Unknown package {}", name))
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let registry = load_registry(&args.selection.input)?;
    let package = select_package(&registry, &args.selection)?;

    let file_name = args
        .output
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pin_mapping.h".to_string());
    let header = HeaderGenerator::generate(&registry, package, &HeaderOptions::new(file_name))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &header)
                .with_context(|| format!("Failed to write header {:?}", path))?;
            info!("Wrote {:?} for package {}", path, package.name);
        }
        None => print!("{}", header),
    }
    Ok(())
}

fn run_table(args: TableArgs) -> Result<()> {
    let registry = load_registry(&args.selection.input)?;
    let package = select_package(&registry, &args.selection)?;
    let template = registry
        .find_template(&args.template)
        .ok_or_else(|| anyhow!("Unknown template {}", args.template))?;
    let records = emit_info_table(&registry, template, package)?;

    if args.json {
        let report = TableReport {
            template: &args.template,
            package: &package.name,
            records: &records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", InfoClassGenerator::render_records(&records));
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let registry = load_registry(&args.input)?;
    let report = CheckReport {
        family: registry.family().to_string(),
        pins: registry.pins().len(),
        peripherals: registry.peripherals().len(),
        functions: registry.functions().len(),
        used_templates: registry
            .templates()
            .filter(|(_, t)| t.class_is_used())
            .map(|(_, t)| t.base_name().to_string())
            .collect(),
        packages: registry.packages().map(|p| p.name.clone()).collect(),
        devices: registry.devices().iter().map(|d| d.name.clone()).collect(),
        dma_sources: registry.dma_info().len(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Family:      {}", report.family);
        println!("Pins:        {}", report.pins);
        println!("Peripherals: {}", report.peripherals);
        println!("Functions:   {}", report.functions);
        println!("Classes:     {}", report.used_templates.join(", "));
        println!("Packages:    {}", report.packages.join(", "));
    }
    Ok(())
}
