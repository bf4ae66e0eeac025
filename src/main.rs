use clap::Parser;
use sfsym::{CatalogBuilder, ExecutorImpl, PipelineError, TemplateLayout, write_catalog_file};
use std::path::PathBuf;

/// Extracts every symbol under a template root into a JSON catalog.
#[derive(Parser, Debug)]
#[command(name = "sfsym", version, about)]
struct Cli {
    /// Directory containing the revision 2.0 and 3.0 template directories.
    template_root: PathBuf,

    /// Where to write the catalog.
    #[arg(short, long, default_value = "main.json")]
    output: PathBuf,

    /// Process assets one at a time on the main thread.
    #[arg(long)]
    sequential: bool,

    /// Keep the order in which templates were discovered.
    #[arg(long)]
    unsorted: bool,

    /// Name of the revision 2.0 template directory.
    #[arg(long, default_value = "2.0")]
    v2_dir: String,

    /// Name of the revision 3.0 template directory.
    #[arg(long, default_value = "3.0")]
    v3_dir: String,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let layout = TemplateLayout {
        revision2_dir: cli.v2_dir,
        revision3_dir: cli.v3_dir,
        ..TemplateLayout::default()
    };
    let executor = if cli.sequential {
        ExecutorImpl::sequential()
    } else {
        ExecutorImpl::default()
    };

    println!("Loading templates from {}", cli.template_root.display());
    let pipeline = CatalogBuilder::new()
        .with_layout(layout)
        .with_executor(executor)
        .sort_by_name(!cli.unsorted)
        .with_template_root(&cli.template_root)?
        .build()?;

    let report = pipeline.run()?;
    write_catalog_file(&report.symbols, &cli.output)?;

    println!(
        "Wrote {} symbol(s) to {} ({} failed, {} without hierarchy)",
        report.symbols.len(),
        cli.output.display(),
        report.failures.len(),
        report.hierarchy_warnings.len()
    );
    for (name, error) in &report.failures {
        eprintln!("  {}: {}", name, error);
    }
    Ok(())
}
