use flexi_logger::{DeferredNow, Logger, Record};
use log::info;
use once_cell::sync::OnceCell;

static LOGGER_STARTED: OnceCell<bool> = OnceCell::new();

pub fn log_format(w: &mut dyn std::io::Write, now: &mut DeferredNow, record: &Record) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {} [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.6f %:z"),
        record.level(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

/// Starts the process logger once; later calls return the first outcome.
///
/// `spec` is the default level filter (e.g. `"info"`, `"range_slider=debug"`)
/// and is overridden by `RUST_LOG`. Logs go to stderr unless `directory` is
/// given.
pub fn init_logger(spec: &str, directory: Option<&str>) -> bool {
    *LOGGER_STARTED.get_or_init(|| {
        let logger = Logger::with_env_or_str(spec).format(log_format);

        let started = match directory {
            Some(dir) => logger.log_to_file().directory(dir).start(),
            None => logger.start(),
        };

        match started {
            Ok(_) => {
                info!("Started logger...");
                true
            }
            Err(e) => {
                eprintln!("range slider logger not started: {}", e);
                false
            }
        }
    })
}
