use std::process::ExitCode;

use clap::Parser;

use gridmarks::app::{AppController, AppState, CommandEditorLauncher};
use gridmarks::cli::Cli;
use gridmarks::config::SettingsStore;
use gridmarks::logging::init_logging;

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("Failed to initialize logging: {err}");
    }

    let cli = Cli::parse();
    let store = SettingsStore::default();

    let settings = cli.startup_settings(&store);
    tracing::info!(cells_count = settings.cells_count, "Starting");

    let controller = AppController::new(
        AppState::new(settings),
        Box::new(rand::thread_rng()),
        Box::new(CommandEditorLauncher::default()),
    );

    let (controller, exit_code) = match run_window(controller) {
        Ok(result) => result,
        Err(message) => {
            tracing::error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = store.save(&controller.into_settings()) {
        tracing::error!("Failed to create or open config file for writing. ({err})");
    }

    ExitCode::from(exit_code.clamp(0, u8::MAX as i32) as u8)
}

#[cfg(windows)]
fn run_window(controller: AppController) -> Result<(AppController, i32), String> {
    use gridmarks::ui::main_window::{MainWindow, show_error_dialog};

    MainWindow::run(controller).map_err(|err| {
        let message = err.to_string();
        show_error_dialog(&message);
        message
    })
}

#[cfg(not(windows))]
fn run_window(_controller: AppController) -> Result<(AppController, i32), String> {
    Err("Failed to create window! A Windows desktop is required.".to_string())
}
