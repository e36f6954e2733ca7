//! Lazily created, per-type named loggers.
//!
//! Types opt into this by embedding a [`LazyLogger`] and implementing
//! [`Loggable`], usually through the [`loggable!`](crate::loggable)
//! macro. The first call to [`Loggable::log`] creates a [`Logger`]
//! named after the concrete type; it is then cached on the instance
//! until [`Loggable::reset_log`] is called.
//!
//! Records are emitted through the [`log`] facade with the logger name
//! as their target, so whatever logger the application installs decides
//! where they end up.

use std::{any, fmt, sync::Arc};

use log::Level;
use once_cell::unsync::OnceCell;

/// Computes the logger name for a type.
///
/// The result has the form `<module path>.<type name>`, with generic
/// arguments dropped.
pub fn qualified_name<T: ?Sized>() -> String {
    let full = any::type_name::<T>();
    let path = full.split_once('<').map_or(full, |(path, _)| path);

    match path.rsplit_once("::") {
        Some((module, name)) => format!("{module}.{name}"),
        None => path.to_owned(),
    }
}

/// A named logging sink.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Logger {
    name: Box<str>,
}

impl Logger {
    /// Creates a logger with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().into_boxed_str(),
        }
    }

    /// Creates a logger named after type `T`.
    ///
    /// See [`qualified_name`] for the naming scheme.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::new(qualified_name::<T>())
    }

    /// Gets the name of this logger.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether records at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: self.name(), level)
    }

    /// Emits a record at the given level.
    pub fn log(&self, level: Level, msg: impl fmt::Display) {
        log::log!(target: self.name(), level, "{msg}");
    }

    /// Emits a record at [`Level::Error`].
    #[inline]
    pub fn error(&self, msg: impl fmt::Display) {
        self.log(Level::Error, msg)
    }

    /// Emits a record at [`Level::Warn`].
    #[inline]
    pub fn warn(&self, msg: impl fmt::Display) {
        self.log(Level::Warn, msg)
    }

    /// Emits a record at [`Level::Info`].
    #[inline]
    pub fn info(&self, msg: impl fmt::Display) {
        self.log(Level::Info, msg)
    }

    /// Emits a record at [`Level::Debug`].
    #[inline]
    pub fn debug(&self, msg: impl fmt::Display) {
        self.log(Level::Debug, msg)
    }

    /// Emits a record at [`Level::Trace`].
    #[inline]
    pub fn trace(&self, msg: impl fmt::Display) {
        self.log(Level::Trace, msg)
    }
}

/// Instance-level cache slot for a [`Logger`].
///
/// This is not thread-safe. Instances shared between threads must
/// synchronize access externally.
#[derive(Clone, Debug, Default)]
pub struct LazyLogger(OnceCell<Arc<Logger>>);

impl LazyLogger {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Gets the cached logger, creating one named after `T` on first
    /// access.
    pub fn get<T: ?Sized>(&self) -> &Arc<Logger> {
        self.0.get_or_init(|| {
            let logger = Logger::for_type::<T>();
            log::trace!("Created logger '{}'", logger.name());

            Arc::new(logger)
        })
    }

    /// Drops the cached logger, if any.
    pub fn reset(&mut self) {
        self.0.take();
    }

    /// Whether a logger is currently cached.
    pub fn is_initialized(&self) -> bool {
        self.0.get().is_some()
    }
}

/// A type that carries its own lazily created [`Logger`].
pub trait Loggable {
    /// Gets the slot the logger is cached in.
    fn lazy_logger(&self) -> &LazyLogger;

    /// Gets the slot the logger is cached in, mutably.
    fn lazy_logger_mut(&mut self) -> &mut LazyLogger;

    /// Gets the logger for this instance.
    ///
    /// The first call creates it; subsequent calls return the very
    /// same handle until [`Loggable::reset_log`] is called.
    fn log(&self) -> &Arc<Logger> {
        self.lazy_logger().get::<Self>()
    }

    /// Drops the cached logger so that the next [`Loggable::log`]
    /// call creates a new one.
    fn reset_log(&mut self) {
        self.lazy_logger_mut().reset();
    }
}

/// Implements [`Loggable`](crate::logging::Loggable) for a type given
/// the name of its [`LazyLogger`](crate::logging::LazyLogger) field.
///
/// ```
/// use ottdadmin_utils::{loggable, logging::{LazyLogger, Loggable}};
///
/// #[derive(Default)]
/// struct Client {
///     logger: LazyLogger,
/// }
///
/// loggable!(Client => logger);
///
/// let client = Client::default();
/// client.log().info("connected");
/// ```
#[macro_export]
macro_rules! loggable {
    ($ty:ty => $field:ident) => {
        impl $crate::logging::Loggable for $ty {
            #[inline]
            fn lazy_logger(&self) -> &$crate::logging::LazyLogger {
                &self.$field
            }

            #[inline]
            fn lazy_logger_mut(&mut self) -> &mut $crate::logging::LazyLogger {
                &mut self.$field
            }
        }
    };
}
