mod properties;

use tracing::Level;

/// Routes pool events to the test output, only the first call installs the subscriber.
pub(crate) fn trace_to_test_writer() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .with_line_number(true)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
