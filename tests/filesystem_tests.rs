#![cfg(feature = "native")]

mod common;

use common::TestResult;
use common::fixtures;
use sfsym::{
    CatalogBuilder, ExecutorImpl, ExtractError, PipelineError, TemplateError, TemplateLayout,
    read_catalog_file, write_catalog_file,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn template_tree(assets: &[(&str, &str, Option<&str>)]) -> std::io::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("2.0"))?;
    fs::create_dir(dir.path().join("3.0"))?;
    for (name, v2, v3) in assets {
        fs::write(dir.path().join("2.0").join(format!("{}.svg", name)), v2)?;
        if let Some(v3) = v3 {
            fs::write(dir.path().join("3.0").join(format!("{}.svg", name)), v3)?;
        }
    }
    Ok(dir)
}

#[test]
fn test_template_root_to_catalog_file() -> TestResult {
    common::init_logger();
    let (heart_v2, heart_v3) = fixtures::layered_asset();
    let star_v2 = fixtures::revision2(&[]);
    let dir = template_tree(&[
        ("heart", heart_v2.as_str(), Some(heart_v3.as_str())),
        ("star", star_v2.as_str(), None),
    ])?;
    fs::create_dir(dir.path().join("2.0").join("nested.svg"))?;

    let report = CatalogBuilder::new()
        .with_template_root(dir.path())?
        .build()?
        .run()?;

    assert_eq!(common::symbol_names(&report), vec!["heart"]);
    assert_eq!(report.failures, vec![("star".to_string(), ExtractError::NoVariants)]);

    let output = dir.path().join("main.json");
    write_catalog_file(&report.symbols, &output)?;
    assert!(fs::read_to_string(&output)?.starts_with("[\n  {"));
    assert_eq!(read_catalog_file(&output)?, report.symbols);
    Ok(())
}

#[test]
fn test_custom_directory_names() -> TestResult {
    let (v2, _) = fixtures::layered_asset();
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("legacy"))?;
    fs::write(dir.path().join("legacy").join("heart.svg"), &v2)?;

    let report = CatalogBuilder::new()
        .with_layout(TemplateLayout {
            revision2_dir: "legacy".to_string(),
            revision3_dir: "layered".to_string(),
            ..TemplateLayout::default()
        })
        .with_executor(ExecutorImpl::sequential())
        .with_template_root(dir.path())?
        .build()?
        .run()?;

    assert_eq!(report.symbols.len(), 1);
    assert_eq!(report.symbols[0].groups, None);
    assert_eq!(report.hierarchy_warnings.len(), 1);
    Ok(())
}

#[test]
fn test_missing_revision2_directory_aborts_run() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = CatalogBuilder::new().with_template_root(dir.path())?.build()?;

    assert!(matches!(
        pipeline.run(),
        Err(PipelineError::Template(TemplateError::NotFound(_)))
    ));
    Ok(())
}

#[test]
fn test_output_write_failure_is_pipeline_error() {
    let missing = Path::new("/nonexistent-sfsym-dir/main.json");
    assert!(matches!(
        write_catalog_file(&[], missing),
        Err(PipelineError::Io(_))
    ));
}
