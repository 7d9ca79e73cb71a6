#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global catalog path, set from command line
static PROJECTS_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Global heading override, set from command line
static HEADING: OnceLock<String> = OnceLock::new();

/// Get the catalog path (set from command line or default)
pub fn get_projects_path() -> PathBuf {
    PROJECTS_PATH.get().cloned().unwrap_or_else(default_projects_path)
}

/// Get the heading override, if any
pub fn get_heading() -> Option<String> {
    HEADING.get().cloned()
}

/// Default catalog location: <data_dir>/folio/projects.json
fn default_projects_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("projects.json")
}

/// Folio - portfolio project showcase
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio project showcase")]
struct Args {
    /// Project catalog file (JSON array of project records)
    #[arg(short, long)]
    projects: Option<PathBuf>,

    /// Section heading
    #[arg(long)]
    heading: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

/// Install the console subscriber; `RUST_LOG` wins over `default_filter`
fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();
}

fn main() {
    let args = Args::parse();

    init_logging(&args.log);

    let projects_path = args.projects.unwrap_or_else(default_projects_path);
    let _ = PROJECTS_PATH.set(projects_path.clone());
    if let Some(heading) = args.heading {
        let _ = HEADING.set(heading);
    }

    tracing::info!("Starting Folio with catalog: {:?}", projects_path);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_log_filter() {
        let args = Args::try_parse_from(["folio-desktop"]).unwrap();
        assert_eq!(args.log, "info");
        assert!(args.projects.is_none());
        assert!(args.heading.is_none());
    }

    #[test]
    fn args_parse_catalog_and_heading() {
        let args = Args::try_parse_from([
            "folio-desktop",
            "--projects",
            "demos/projects.json",
            "--heading",
            "Work",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.projects, Some(PathBuf::from("demos/projects.json")));
        assert_eq!(args.heading.as_deref(), Some("Work"));
        assert_eq!(args.log, "debug");
    }

    #[test]
    fn init_logging_twice_keeps_first_subscriber() {
        init_logging("debug");
        init_logging("info");
        tracing::debug!("logging initialized");
    }

    #[test]
    fn default_catalog_lives_under_folio() {
        assert!(default_projects_path().ends_with("folio/projects.json"));
    }
}
