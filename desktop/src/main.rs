mod broadcaster;
mod config;
mod input;
mod runner;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_engine::config::ConfigManager;
use snake_engine::logger;
use snake_engine::score::FileHighScoreStore;
use tokio::sync::mpsc;

use state::{RunnerCommand, SharedState};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    /// Path to the YAML config file; defaults to a file next to the
    /// executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => config::get_config_manager(),
    };
    let config: config::Config = config_manager.get_config()?;

    let settings = config.session_settings();
    let store = FileHighScoreStore::new(config.high_score_file.clone());

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let runner_thread = std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(runner::run_snake_game(
            shared_state_clone,
            command_rx,
            settings,
            store,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.board_width as f32 + 20.0,
                config.board_height as f32 + 160.0,
            ])
            .with_title("Snake"),
        ..Default::default()
    };

    let command_tx_clone = command_tx.clone();
    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(shared_state, command_tx_clone)))),
    )?;

    // Window closed; stop the runner task and wait for it.
    let _ = command_tx.send(RunnerCommand::Quit);
    let _ = runner_thread.join();

    Ok(())
}
