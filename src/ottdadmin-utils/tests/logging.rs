use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Metadata, Record};
use ottdadmin_utils::{
    loggable,
    logging::{qualified_name, LazyLogger, Loggable, Logger},
};

#[derive(Default)]
struct AdminSession {
    logger: LazyLogger,
}

loggable!(AdminSession => logger);

#[derive(Default)]
struct Wrapper<T> {
    _inner: T,
    logger: LazyLogger,
}

loggable!(Wrapper<u32> => logger);

#[test]
fn names_follow_type_path() {
    assert_eq!(qualified_name::<AdminSession>(), "logging.AdminSession");
    assert_eq!(qualified_name::<Wrapper<u32>>(), "logging.Wrapper");
    assert_eq!(qualified_name::<u32>(), "u32");

    assert_eq!(Logger::for_type::<AdminSession>().name(), "logging.AdminSession");
}

#[test]
fn logger_is_cached() {
    let session = AdminSession::default();
    assert!(!session.logger.is_initialized());

    let first = Arc::clone(session.log());
    let second = Arc::clone(session.log());

    assert!(session.logger.is_initialized());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), "logging.AdminSession");
}

#[test]
fn reset_recreates_logger() {
    let mut session = AdminSession::default();

    let before = Arc::clone(session.log());
    session.reset_log();
    assert!(!session.logger.is_initialized());

    let after = Arc::clone(session.log());
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before, after);
}

#[test]
fn reset_without_logger_is_noop() {
    let mut session = AdminSession::default();

    session.reset_log();
    session.reset_log();
    assert!(!session.logger.is_initialized());
}

#[test]
fn generic_types_share_base_name() {
    let wrapper = Wrapper::<u32>::default();

    assert_eq!(wrapper.log().name(), "logging.Wrapper");
    wrapper.log().info("emitting without an installed logger is fine");
}

/// Captures every record as `(target, level, message)`.
struct CaptureLogger(Mutex<Vec<(String, Level, String)>>);

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.0.lock().unwrap().push((
            record.target().to_owned(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));

fn captured_for(target: &str) -> Vec<(Level, String)> {
    CAPTURE
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(t, ..)| t == target)
        .map(|(_, level, msg)| (*level, msg.clone()))
        .collect()
}

// The only test in this binary that installs a logger or changes the
// global max level.
#[test]
fn records_target_logger_name() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let session = AdminSession::default();
    let logger = session.log();
    assert!(logger.enabled(Level::Trace));

    logger.error("lost connection");
    logger.warn(format_args!("retrying in {}s", 5));
    logger.info("connected");
    logger.debug("sent join packet");
    logger.trace("raw frame");

    assert_eq!(
        captured_for("logging.AdminSession"),
        [
            (Level::Error, "lost connection".to_owned()),
            (Level::Warn, "retrying in 5s".to_owned()),
            (Level::Info, "connected".to_owned()),
            (Level::Debug, "sent join packet".to_owned()),
            (Level::Trace, "raw frame".to_owned()),
        ]
    );

    log::set_max_level(LevelFilter::Info);
    assert!(!logger.enabled(Level::Trace));
    assert!(!logger.enabled(Level::Debug));
    assert!(logger.enabled(Level::Warn));

    logger.debug("filtered out");
    assert_eq!(captured_for("logging.AdminSession").len(), 5);

    log::set_max_level(LevelFilter::Trace);
}
