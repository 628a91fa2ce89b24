mod app;
mod generators;
mod maze;
mod session;
mod solvers;

use app::App;

fn main() -> std::io::Result<()> {
    let _log_guard = init_logging();

    let mut input = String::new();
    println!(
        "Enter maze dimensions (width height [seed]). Maximum size is 255x255, seed is optional:"
    );
    std::io::stdin().read_line(&mut input)?;

    let mut tokens = input.split_whitespace();
    let width = tokens.next().and_then(|s| s.parse::<u8>().ok());
    let height = tokens.next().and_then(|s| s.parse::<u8>().ok());
    let seed = tokens.next().and_then(|s| s.parse::<u64>().ok());

    let (Some(width), Some(height)) = (width, height) else {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    };
    if width == 0 || height == 0 {
        eprintln!("Width and height must be at least 1.");
        return Ok(());
    }

    let app = App::default();
    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run(width, height, seed);
    App::restore_terminal(&mut stdout)?;
    result
}

/// Log to a file in the temp directory: stdout belongs to the maze display.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "mazewalk.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
