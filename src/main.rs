use std::fs::{self, OpenOptions};
use std::io;

use anyhow::Result;
use clap::Parser;
use splitscope::cli::{self, Cli, Command, TuiArgs};
use splitscope::session::{ArrayGenerator, SearchSession};
use splitscope::{ui, util, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    match cli.command.unwrap_or(Command::Tui(TuiArgs::default())) {
        Command::Tui(args) => {
            init_file_logging()?;
            run_tui(args).await
        }
        Command::Trace(args) => {
            init_stderr_logging();
            let config = Config::load();
            cli::run_trace(&config, &args, &mut io::stdout().lock())
        }
        Command::Play(args) => {
            init_stderr_logging();
            let config = Config::load();
            cli::run_play(&config, &args, &mut io::stdout()).await
        }
    }
}

async fn run_tui(args: TuiArgs) -> Result<()> {
    ui::install_panic_hook();

    let config = args.apply(Config::load());
    let generator = args
        .seed
        .map_or_else(ArrayGenerator::new, ArrayGenerator::seeded);
    let session = SearchSession::with_generator(config.limits(), generator);

    tracing::info!(
        size = config.array.size,
        target_value = config.default_target,
        speed = config.playback.speed,
        "Starting TUI"
    );

    let mut app = App::with_session(config, session).with_config_path(util::config_path());
    app.run().await
}

/// Log to ~/.splitscope/logs/splitscope.log; the terminal belongs to the UI.
fn init_file_logging() -> Result<()> {
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();
}
