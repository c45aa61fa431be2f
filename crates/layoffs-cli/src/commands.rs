use anyhow::{Context, Result};

use layoffs_cli::pipeline::{RunConfig, RunResult, run};
use layoffs_cli::render::{analytics_tables, cleaning_table, issues_table, views_table};
use layoffs_model::{AnalyticsOptions, CleaningOptions, NullKeyMode};

use crate::cli::{AnalyzeArgs, CleanArgs, NullKeysArg};

fn run_config(args: &CleanArgs) -> RunConfig {
    let null_keys = match args.null_keys {
        NullKeysArg::Distinct => NullKeyMode::Distinct,
        NullKeysArg::Equal => NullKeyMode::Equal,
    };
    RunConfig {
        output_dir: args.output_dir.clone(),
        cleaning: CleaningOptions {
            null_keys,
            blank_is_null: !args.keep_blank_industry,
        },
        dry_run: args.dry_run,
        ..RunConfig::new(&args.input)
    }
}

fn print_run_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if !result.outputs.is_empty() {
        println!("Output: {}", result.output_dir.display());
    }
    println!("{}", cleaning_table(&result.cleaning));
    if !result.issues.is_empty() {
        println!();
        println!("Data quality issues ({}):", result.issues.len());
        println!("{}", issues_table(&result.issues));
    }
}

pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let result = run(&run_config(args))?;
    print_run_summary(&result);
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let config = RunConfig {
        analytics: Some(AnalyticsOptions { top_n: args.top_n }),
        ..run_config(&args.clean)
    };
    let result = run(&config)?;
    let Some(report) = result.analytics.as_ref() else {
        return Ok(());
    };
    if args.json {
        let json = serde_json::to_string_pretty(report).context("serialize analytics")?;
        println!("{json}");
        return Ok(());
    }
    print_run_summary(&result);
    for (title, table) in analytics_tables(report) {
        println!();
        println!("{title}:");
        println!("{table}");
    }
    Ok(())
}

pub fn run_views() {
    println!("{}", views_table());
}
