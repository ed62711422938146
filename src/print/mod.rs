//! Print and log helpers built on the interpolation engine
//!
//! Thin caller-facing surface: interpolate a template, then hand the text
//! to an output sink or to the [`log`] facade. The separator used when
//! concatenating positional arguments is carried in an explicit
//! [`PrintConfig`] passed to each [`Printer`], never in process-wide
//! mutable state.

use crate::interp::errors::InterpError;
use crate::interp::scanner;
use crate::value::Value;
use std::fmt;
use std::io;

/// Configuration for a [`Printer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Separator placed between positional arguments by
    /// [`Printer::print_all`]
    pub separator: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            separator: " ".to_string(),
        }
    }
}

/// Errors from the print helpers
#[derive(Debug)]
pub enum PrintError {
    /// The template referenced a missing argument
    Interp(InterpError),
    /// The sink rejected the write
    Io(io::Error),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::Interp(e) => write!(f, "{}", e),
            PrintError::Io(e) => write!(f, "Write to output sink failed: {}", e),
        }
    }
}

impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrintError::Interp(e) => Some(e),
            PrintError::Io(e) => Some(e),
        }
    }
}

impl From<InterpError> for PrintError {
    fn from(e: InterpError) -> Self {
        PrintError::Interp(e)
    }
}

impl From<io::Error> for PrintError {
    fn from(e: io::Error) -> Self {
        PrintError::Io(e)
    }
}

/// Writes interpolated text to an output sink
pub struct Printer<W: io::Write> {
    sink: W,
    config: PrintConfig,
}

impl<W: io::Write> Printer<W> {
    /// Create a printer with the default single-space separator.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, PrintConfig::default())
    }

    /// Create a printer with an explicit configuration.
    pub fn with_config(sink: W, config: PrintConfig) -> Self {
        Printer { sink, config }
    }

    /// Interpolate `template` against `args` and write the result.
    pub fn print(&mut self, template: &str, args: &[Value]) -> Result<(), PrintError> {
        let text = scanner::interpolate(template, args)?;
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Like [`Printer::print`], with a trailing newline.
    pub fn println(&mut self, template: &str, args: &[Value]) -> Result<(), PrintError> {
        self.print(template, args)?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Write each argument's text joined by the configured separator.
    pub fn print_all(&mut self, args: &[Value]) -> Result<(), PrintError> {
        let text = self.join_all(args);
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Like [`Printer::print_all`], with a trailing newline.
    pub fn println_all(&mut self, args: &[Value]) -> Result<(), PrintError> {
        self.print_all(args)?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn join_all(&self, args: &[Value]) -> String {
        args.iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(&self.config.separator)
    }
}

/// Interpolate `template` against `args` and emit the result at `level`
/// through the [`log`] facade.
///
/// An out-of-range placeholder is returned to the caller instead of being
/// logged as garbage text.
pub fn log_interp(level: log::Level, template: &str, args: &[Value]) -> Result<(), InterpError> {
    let text = scanner::interpolate(template, args)?;
    log::log!(level, "{}", text);
    Ok(())
}

/// [`log_interp`] at debug level.
pub fn debug(template: &str, args: &[Value]) -> Result<(), InterpError> {
    log_interp(log::Level::Debug, template, args)
}

/// [`log_interp`] at info level.
pub fn info(template: &str, args: &[Value]) -> Result<(), InterpError> {
    log_interp(log::Level::Info, template, args)
}

/// [`log_interp`] at warn level.
pub fn warn(template: &str, args: &[Value]) -> Result<(), InterpError> {
    log_interp(log::Level::Warn, template, args)
}

/// [`log_interp`] at error level.
pub fn error(template: &str, args: &[Value]) -> Result<(), InterpError> {
    log_interp(log::Level::Error, template, args)
}
