//! `stagehand deploy` runner

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;

use stagehand::deploy::{run_with_callback, DeployEvent, DeployRequest};
use stagehand::report::RunSummary;
use stagehand::sync::SyncEvent;

use crate::cli::ColorChoice;
use crate::ui::{ColoredText, UiContext};

/// Arguments collected from the CLI
#[derive(Debug)]
pub struct DeployArgs {
    pub components: Vec<String>,
    pub apply_to_all_versions: bool,
    pub backup: bool,
    pub dry_run: bool,
    pub config_root: Option<PathBuf>,
    pub programs_root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorChoice>,
}

pub fn run(args: DeployArgs) -> Result<()> {
    let (config, config_warnings) =
        super::load_config(args.config.as_deref()).context("loading configuration")?;

    let ui = UiContext::new(args.json, args.verbose, args.color, config.output.color);
    super::print_config_warnings(&ui, &config_warnings);

    let request = DeployRequest {
        config_root: args.config_root.unwrap_or(config.deploy.config_root),
        programs_root: args.programs_root.unwrap_or(config.deploy.programs_root),
        components: args.components,
        apply_to_all_versions: args.apply_to_all_versions || config.deploy.apply_to_all_versions,
        backup: args.backup || config.deploy.backup,
        dry_run: args.dry_run,
    };

    if !ui.json {
        print_header(&ui, &request);
    }

    let summary = run_with_callback(&request, Some(|event| render_event(&ui, &request, event)))
        .context("deploy failed")?;

    if ui.json {
        print_json_summary(&request, &summary);
    } else {
        print_summary(&ui, &request, &summary);
    }

    Ok(())
}

fn print_header(ui: &UiContext, request: &DeployRequest) {
    println!(
        "{}",
        ColoredText::plain("Stagehand Deploy").bold().render(ui.color)
    );
    println!("Config root: {}", request.config_root.display());
    println!("Programs root: {}", request.programs_root.display());
    if request.apply_to_all_versions {
        println!("Mode: all installed versions");
    }
    if request.backup {
        println!("Mode: backup before overwrite");
    }
    if request.dry_run {
        println!("Mode: dry run");
    }
    println!();
}

fn render_event(ui: &UiContext, request: &DeployRequest, event: DeployEvent) {
    match event {
        DeployEvent::ComponentStart { component } => {
            if !ui.json && ui.verbose >= 1 {
                println!("{component}:");
            }
        }
        DeployEvent::Warning {
            component,
            reason,
            detail,
        } => {
            if ui.json {
                println!(
                    "{}",
                    json!({
                        "event": "warning",
                        "component": component,
                        "reason": reason,
                        "detail": detail,
                    })
                );
            } else {
                ui.warn(&format!("{component}: {detail}"));
            }
        }
        DeployEvent::TargetResolved { component, target } => {
            if !ui.json && ui.verbose >= 1 {
                println!("  {component} -> {target}");
            }
        }
        DeployEvent::Sync { event, .. } => render_sync_event(ui, request, event),
    }
}

fn render_sync_event(ui: &UiContext, request: &DeployRequest, event: SyncEvent) {
    if ui.json {
        if let SyncEvent::ItemError {
            relative, message, ..
        } = event
        {
            println!(
                "{}",
                json!({
                    "event": "file-error",
                    "file": relative,
                    "detail": message,
                })
            );
        }
        return;
    }

    match event {
        SyncEvent::ParentCreated { path, .. } => {
            if request.dry_run {
                println!("  would create {path}");
            } else if ui.verbose >= 2 {
                println!("  {} created {path}", ui.ok_icon());
            }
        }
        SyncEvent::BackupCreated { backup, .. } => {
            if request.dry_run {
                println!("  would back up to {backup}");
            } else if ui.verbose >= 1 {
                println!("  {} backed up to {backup}", ui.ok_icon());
            }
        }
        SyncEvent::ItemCopied { dest, .. } => {
            if request.dry_run {
                println!("  would copy to {dest}");
            } else if ui.verbose >= 1 {
                println!("  {} {dest}", ui.ok_icon());
            }
        }
        SyncEvent::ItemError {
            relative, message, ..
        } => {
            eprintln!(
                "  {} {relative}: {message}",
                ColoredText::error(ui.err_icon()).render(ui.color)
            );
        }
        SyncEvent::ItemStart { .. } => {}
    }
}

fn print_summary(ui: &UiContext, request: &DeployRequest, summary: &RunSummary) {
    println!();
    println!(
        "{}",
        ColoredText::plain("Deploy Summary").bold().render(ui.color)
    );
    println!("{}", summary.render_text());

    let errors = summary.total_errors();
    if errors > 0 {
        println!(
            "{}",
            ColoredText::warning(format!("  {errors} file(s) failed")).render(ui.color)
        );
    }
    if request.dry_run {
        println!(
            "{}",
            ColoredText::dim("  dry run - nothing was written").render(ui.color)
        );
    }
}

fn print_json_summary(request: &DeployRequest, summary: &RunSummary) {
    let status = if summary.total_errors() == 0 {
        "success"
    } else {
        "partial"
    };
    println!(
        "{}",
        json!({
            "event": "deploy",
            "status": status,
            "dry_run": request.dry_run,
            "components": &summary.components,
            "total_files": summary.total_files,
        })
    );
}
