use anyhow::Result;
use clap::Parser;

use version_bump::changelog::SpliceOutcome;
use version_bump::config;
use version_bump::git::Git2Repository;
use version_bump::release;
use version_bump::ui;
use version_bump::version::BumpKind;

#[derive(clap::Parser)]
#[command(
    name = "version-bump",
    version,
    about = "Bump the version stored in version.json and cut a release"
)]
struct Args {
    #[arg(value_enum, help = "Which version component to increment")]
    kind: BumpKind,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Compute and report the next version without writing anything")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();

    // Read, compute, persist, splice
    let report = match release::run(&config, args.kind, args.dry_run, today) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    println!("{}", report.next);

    if report.splice == Some(SpliceOutcome::HeadingNotFound) {
        ui::display_warning(&format!(
            "no '## Unreleased' heading in {}; only the link line was appended",
            config.files.changelog.as_deref().unwrap_or_default()
        ));
    }

    if config.git.enabled && !args.dry_run {
        let repo = match Git2Repository::discover() {
            Ok(repo) => repo,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };

        ui::display_status(&format!("Committing and tagging version {}", report.next));
        if let Err(e) = release::tag_release(&repo, &config, &report.next) {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
        ui::display_success(&format!("Created release commit and tag for {}", report.next));
    }

    Ok(())
}
