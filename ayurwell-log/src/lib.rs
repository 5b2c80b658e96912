//! Logging for the AyurWellness crates.
//!
//! `trace!` through `error!` write one line per message to stderr. The
//! configuration is read from the environment before the first level check,
//! so `AYURWELL_DEBUG=1` takes effect without calling [`init`].
//!
//! ```rust
//! use ayurwell_log::{debug, info, warn};
//!
//! info!("registration form mounted");
//! let field = "email";
//! debug!(target: "ayurwell::register", "revalidating {}", field);
//! warn!("submission already in flight");
//! ```
//!
//! # Environment Variables
//!
//! - `AYURWELL_DEBUG=1` - turn on debug output
//! - `AYURWELL_LOG_LEVEL=trace|debug|info|warn|error|off`
//! - `AYURWELL_LOG_FORMAT=pretty|compact|json` (default `json`)
//! - `AYURWELL_LOG_COLOR=1|0`
//! - `AYURWELL_LOG_TIMESTAMPS=1|0`
//! - `AYURWELL_LOG_MODULE=1|0` - include the log target

use once_cell::sync::Lazy;
use std::env;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Severity of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Nothing is printed
    Off = 5,
}

impl Level {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable, optionally colored
    Pretty,
    /// Level initial and message
    Compact,
    /// JSON lines
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub debug: bool,
    /// Minimum level printed
    pub level: Level,
    pub format: Format,
    /// Colored level names (pretty format only)
    pub color: bool,
    pub timestamps: bool,
    /// Include the log target
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

impl LogConfig {
    /// Read `AYURWELL_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| {
            lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };
        let defaults = Self::default();
        let debug = flag("AYURWELL_DEBUG").unwrap_or(false);

        Self {
            debug,
            level: lookup("AYURWELL_LOG_LEVEL")
                .and_then(|s| Level::parse(&s))
                .unwrap_or(if debug { Level::Debug } else { defaults.level }),
            format: lookup("AYURWELL_LOG_FORMAT")
                .and_then(|s| Format::parse(&s))
                .unwrap_or(defaults.format),
            color: flag("AYURWELL_LOG_COLOR")
                .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some()),
            timestamps: flag("AYURWELL_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            module_path: flag("AYURWELL_LOG_MODULE").unwrap_or(defaults.module_path),
        }
    }
}

// Runtime overrides live in atomics; CONFIG seeds them exactly once.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
    LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
    config
});

/// Load the configuration now.
///
/// Optional: every level check and setter loads it on first use.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// The configuration read from the environment.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Whether messages at `level` are printed. Debug messages also pass while
/// debug mode is on.
pub fn is_level_enabled(level: Level) -> bool {
    if level == Level::Off {
        return false;
    }
    level >= current_level() || (level == Level::Debug && is_debug_enabled())
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Change the minimum level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime. Enabling it lowers the level to `Debug`.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

// ============================================================================
// Output
// ============================================================================

/// One message, ready to be rendered in any [`Format`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub target: &'a str,
    pub message: &'a str,
}

impl Record<'_> {
    /// Render as a single line without the trailing newline.
    pub fn render(&self, config: &LogConfig) -> String {
        match config.format {
            Format::Pretty => self.render_pretty(config),
            Format::Compact => self.render_compact(config),
            Format::Json => self.render_json(config),
        }
    }

    fn target(&self, config: &LogConfig) -> Option<&str> {
        (config.module_path && !self.target.is_empty()).then_some(self.target)
    }

    fn render_pretty(&self, config: &LogConfig) -> String {
        let mut line = String::new();
        if config.timestamps {
            line.push_str(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f ").to_string());
        }
        line.push_str(&format!("{:<5} ", self.level_label(config)));
        if let Some(target) = self.target(config) {
            line.push_str(&format!("[{}] ", target));
        }
        line.push_str(self.message);
        line
    }

    fn render_compact(&self, config: &LogConfig) -> String {
        let mut line = String::new();
        if config.timestamps {
            line.push_str(&chrono::Local::now().format("%H:%M:%S ").to_string());
        }
        line.push_str(&self.level.as_str()[..1]);
        line.push(' ');
        if let Some(target) = self.target(config) {
            line.push_str(&format!("{}: ", target));
        }
        line.push_str(self.message);
        line
    }

    #[cfg(feature = "json")]
    fn render_json(&self, config: &LogConfig) -> String {
        let mut line = serde_json::Map::new();
        if config.timestamps {
            line.insert("timestamp".into(), chrono::Utc::now().to_rfc3339().into());
        }
        line.insert("level".into(), self.level.as_str().into());
        if let Some(target) = self.target(config) {
            line.insert("target".into(), target.into());
        }
        line.insert("message".into(), self.message.into());
        serde_json::Value::Object(line).to_string()
    }

    #[cfg(not(feature = "json"))]
    fn render_json(&self, config: &LogConfig) -> String {
        let mut fields = Vec::new();
        if config.timestamps {
            fields.push(format!(r#""timestamp":"{}""#, chrono::Utc::now().to_rfc3339()));
        }
        fields.push(format!(r#""level":"{}""#, self.level.as_str()));
        if let Some(target) = self.target(config) {
            fields.push(format!(r#""target":"{}""#, target.escape_default()));
        }
        fields.push(format!(r#""message":"{}""#, self.message.escape_default()));
        format!("{{{}}}", fields.join(","))
    }

    #[cfg(feature = "color")]
    fn level_label(&self, config: &LogConfig) -> String {
        use colored::Colorize;
        if !config.color {
            return self.level.as_str().to_string();
        }
        let label = self.level.as_str();
        match self.level {
            Level::Trace => label.magenta(),
            Level::Debug => label.blue(),
            Level::Info => label.green(),
            Level::Warn => label.yellow(),
            Level::Error | Level::Off => label.red().bold(),
        }
        .to_string()
    }

    #[cfg(not(feature = "color"))]
    fn level_label(&self, _config: &LogConfig) -> &'static str {
        self.level.as_str()
    }
}

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !is_level_enabled(level) {
        return;
    }
    let record = Record {
        level,
        target,
        message,
    };
    eprintln!("{}", record.render(config()));
}

// ============================================================================
// Macros
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($level) {
            $crate::log($level, $target, &format!($($arg)+));
        }
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__log!($level, target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Trace, $($arg)+) };
}

/// Printed when `AYURWELL_DEBUG=1` or the level is `debug` or lower.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Error, $($arg)+) };
}
