use clap::Parser;
use grid_sweeper::{CleaningReport, NullRenderer, Scenario, ScenarioError, TextRenderer};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run a cleaning robot over a grid scenario and print each frame.
#[derive(Parser, Debug)]
#[command(name = "grid-sweeper", version, about)]
struct Args {
    /// Scenario YAML file. Runs the built-in demo room when omitted.
    scenario: Option<PathBuf>,

    /// Override the pause after each frame, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Do not draw frames, only print the summary.
    #[arg(long, short)]
    quiet: bool,
}

fn run(args: &Args) -> Result<CleaningReport, ScenarioError> {
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo_room(),
    };
    if let Some(ms) = args.delay_ms {
        scenario.render.frame_delay_ms = ms;
    }
    if args.quiet {
        scenario.render.enabled = false;
    }

    let report = if scenario.render.enabled {
        let delay = scenario.render.frame_delay();
        scenario.run(&mut TextRenderer::new(io::stdout().lock(), delay))
    } else {
        scenario.run(&mut NullRenderer)
    };
    Ok(report)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            println!(
                "Finished at {} after {} move attempts: {} cleaned, {} dirt left, {} obstacles",
                report.final_position,
                report.stats.move_attempts,
                report.counts.cleaned,
                report.counts.dirt,
                report.counts.obstacle
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
