use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    /// Values above `Trace` saturate.
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "OFF" => Some(DebugLevel::Off),
            "ERROR" => Some(DebugLevel::Error),
            "WARN" => Some(DebugLevel::Warn),
            "INFO" => Some(DebugLevel::Info),
            "DEBUG" => Some(DebugLevel::Debug),
            "TRACE" => Some(DebugLevel::Trace),
            _ => None,
        }
    }
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);
static INDENT: AtomicUsize = AtomicUsize::new(0);

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= get_debug_level()
}

pub fn indent() {
    INDENT.fetch_add(1, Ordering::Relaxed);
}

pub fn dedent() {
    let _ = INDENT.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
        Some(n.saturating_sub(1))
    });
}

pub fn format_indent() -> String {
    "  ".repeat(INDENT.load(Ordering::Relaxed))
}

/// Writes one diagnostic line to stderr. Callers check `should_log` first.
pub fn emit(level: DebugLevel, component: &str, message: &str) {
    use color::*;

    let label = match level {
        DebugLevel::Error => format!("{RED}ERROR{RESET}"),
        DebugLevel::Warn => format!("{YELLOW}WARN{RESET}"),
        DebugLevel::Info => format!("{GREEN}INFO{RESET}"),
        DebugLevel::Debug => format!("{BLUE}DEBUG{RESET}"),
        DebugLevel::Trace => format!("{GRAY}TRACE{RESET}"),
        DebugLevel::Off => return,
    };
    eprintln!("{}{} [{}] {}", format_indent(), label, component, message);
}

pub mod color {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}
