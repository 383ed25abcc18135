use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use gtauto::cli::{run_tag_workflow, TagWorkflowArgs, WorkflowOutcome};
use gtauto::config;
use gtauto::git::Git2Repository;
use gtauto::ui::{self, ColorMode, Printer};

#[derive(clap::Parser)]
#[command(
    name = "gtauto",
    version,
    about = "Git tag automation with CHANGELOG support",
    after_help = "Examples:\n  gtauto --tag v1.0.0\n  gtauto --tag v1.0.0 --changelog path/to/CHANGELOG.md\n  gtauto --tag v1.0.0 --force"
)]
struct Args {
    #[arg(short, long, help = "Tag name to create")]
    tag: String,

    #[arg(short, long, help = "Path to CHANGELOG file [default: CHANGELOG.md]")]
    changelog: Option<PathBuf>,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Force overwrite existing tag without confirmation")]
    force: bool,

    #[arg(long, help = "Show the tag message without creating the tag")]
    dry_run: bool,

    #[arg(long, value_enum, help = "When to color output")]
    color: Option<ColorMode>,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,
}

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("gtauto")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logger(args.debug)?;

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            Printer::from_mode(args.color.unwrap_or_default())
                .error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let printer = Printer::from_mode(args.color.unwrap_or(config.behavior.color));

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            printer.error(&format!("Not a git repository: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = TagWorkflowArgs {
        tag: args.tag,
        changelog: args.changelog,
        force: args.force,
        dry_run: args.dry_run,
    };

    match run_tag_workflow(&workflow_args, &config, &repo, &printer, ui::confirm_action) {
        Ok(WorkflowOutcome::Created(_))
        | Ok(WorkflowOutcome::DryRun(_))
        | Ok(WorkflowOutcome::Cancelled) => Ok(()),
        Err(e) => {
            printer.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
