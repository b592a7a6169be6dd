//! `salesboard analyze` / `salesboard validate` — load, run, report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use salesboard_analytics::{analyze, load_sales_json, AnalysisConfig, SalesData, SellerReport};

use crate::exit_codes::{analyze_exit_code, EXIT_ERROR, EXIT_USAGE};
use crate::{table, CliError};

/// JSON document printed by `--json` and written by `--output`.
#[derive(Debug, Serialize)]
pub struct ReportDocument {
    pub meta: ReportMeta,
    pub sellers: Vec<SellerReport>,
}

#[derive(Debug, Serialize)]
pub struct ReportMeta {
    pub policy: String,
    pub engine_version: String,
    pub generated_at: String,
    pub seller_count: usize,
    pub record_count: usize,
}

fn engine_err(err: salesboard_analytics::AnalyzeError) -> CliError {
    let code = analyze_exit_code(&err);
    let hint = match &err {
        salesboard_analytics::AnalyzeError::UnknownSeller { .. }
        | salesboard_analytics::AnalyzeError::UnknownProduct { .. } => {
            Some("every seller_id and sku in purchase_records must exist in sellers/products".to_string())
        }
        _ => None,
    };
    CliError { code, message: err.to_string(), hint }
}

fn read_file(path: &Path, what: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError { code: EXIT_USAGE, message: format!("cannot read {what} {}: {e}", path.display()), hint: None })
}

fn load_dataset(path: &Path) -> Result<SalesData, CliError> {
    let json = read_file(path, "dataset")?;
    load_sales_json(&json).map_err(engine_err)
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, CliError> {
    match path {
        Some(path) => {
            let toml = read_file(path, "policy")?;
            AnalysisConfig::from_toml(&toml).map_err(engine_err)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

pub fn cmd_analyze(
    data_path: PathBuf,
    config_path: Option<PathBuf>,
    json_output: bool,
    output_file: Option<PathBuf>,
    top: Option<usize>,
) -> Result<(), CliError> {
    if top == Some(0) {
        return Err(CliError::args("--top must be at least 1"));
    }

    let data = load_dataset(&data_path)?;
    let mut config = load_config(config_path.as_deref())?;
    if let Some(limit) = top {
        config.top_products_limit = limit;
    }
    let options = config.to_options().map_err(engine_err)?;

    log::info!(
        "analyzing {} records for {} sellers with policy '{}'",
        data.purchase_records.len(),
        data.sellers.len(),
        config.name,
    );

    let sellers = analyze(&data, &options).map_err(engine_err)?;

    let document = ReportDocument {
        meta: ReportMeta {
            policy: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            seller_count: sellers.len(),
            record_count: data.purchase_records.len(),
        },
        sellers,
    };

    if json_output || output_file.is_some() {
        let json_str = serde_json::to_string_pretty(&document).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;

        if let Some(ref path) = output_file {
            std::fs::write(path, &json_str).map_err(|e| CliError {
                code: EXIT_USAGE,
                message: format!("cannot write output: {e}"),
                hint: None,
            })?;
            eprintln!("wrote {}", path.display());
        }

        if json_output {
            println!("{json_str}");
        }
    }

    if !json_output {
        print!("{}", table::render(&document.sellers));
    }

    let total_bonus: f64 = document.sellers.iter().map(|s| s.bonus).sum();
    eprintln!(
        "{} sellers, {} records, total bonus {:.2}",
        document.meta.seller_count, document.meta.record_count, total_bonus,
    );

    Ok(())
}

pub fn cmd_validate(data_path: PathBuf, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let data = load_dataset(&data_path)?;
    let config = load_config(config_path.as_deref())?;
    config.to_options().map_err(engine_err)?;

    let item_count: usize = data.purchase_records.iter().map(|r| r.items.len()).sum();
    eprintln!(
        "valid: {} customers, {} sellers, {} products, {} records ({} line items); policy '{}'",
        data.customers.len(),
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
        item_count,
        config.name,
    );
    Ok(())
}
