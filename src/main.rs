use anyhow::Result;
use clap::Parser;
use my_alarm::app::App;
use my_alarm::cli::Cli;
use my_alarm::session::UserStore;
use my_alarm::utils::{get_log_dir, get_log_path, LOG_FILE_NAME};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Leave raw mode first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = get_log_path();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The TUI owns stdout, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();
    eprintln!("Logs are being written to: {:?}", log_file);

    let config = cli.load_config()?;
    let mut app = App::new(config, cli.config_path(), UserStore::default_location())?;
    let result = app.run();

    drop(guard);
    result
}
