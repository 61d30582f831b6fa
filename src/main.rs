use mazelab::app::App;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log to a file because the terminal is taken over by the visualizer.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazelab.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("MAZELAB_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::default().run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    result
}
