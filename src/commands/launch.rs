//! `stagehand launch` runner

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::json;

use stagehand::launcher::launch_programs;

use crate::cli::ColorChoice;
use crate::ui::{ColoredText, UiContext};

/// Arguments collected from the CLI
#[derive(Debug)]
pub struct LaunchArgs {
    pub skip: Vec<String>,
    pub elevate: bool,
    pub programs_root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorChoice>,
}

pub fn run(args: LaunchArgs) -> Result<()> {
    let (config, config_warnings) =
        super::load_config(args.config.as_deref()).context("loading configuration")?;

    let ui = UiContext::new(args.json, args.verbose, args.color, config.output.color);
    super::print_config_warnings(&ui, &config_warnings);

    if config.launch.programs.is_empty() {
        bail!("no [[launch.program]] entries configured - nothing to launch");
    }

    let programs_root = args.programs_root.unwrap_or(config.deploy.programs_root);
    let report = launch_programs(
        &config.launch.programs,
        &programs_root,
        &args.skip,
        args.elevate,
    )
    .context("launch failed")?;

    if ui.json {
        let failed: Vec<_> = report
            .failed
            .iter()
            .map(|(name, error)| json!({"name": name, "detail": error}))
            .collect();
        println!(
            "{}",
            json!({
                "event": "launch",
                "status": if report.is_success() { "success" } else { "partial" },
                "launched": &report.launched,
                "skipped": &report.skipped,
                "failed": failed,
            })
        );
    } else {
        for warning in &report.warnings {
            ui.warn(warning);
        }
        for name in &report.launched {
            println!(
                "{} launched {name}",
                ColoredText::success(ui.ok_icon()).render(ui.color)
            );
        }
        for name in &report.skipped {
            println!("{}", ColoredText::dim(format!("- skipped {name}")).render(ui.color));
        }
        for (name, error) in &report.failed {
            eprintln!(
                "{} {name}: {error}",
                ColoredText::error(ui.err_icon()).render(ui.color)
            );
        }
    }

    if !report.is_success() {
        bail!("{} program(s) failed to launch", report.failed.len());
    }

    Ok(())
}
