use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that switches debug output on without the `--debug` flag.
pub const DEBUG_ENV_VAR: &str = "AVITOCARD_DEBUG";

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Enables debug output when the flag is set or `AVITOCARD_DEBUG` holds a truthy value.
pub fn init(flag: bool) {
    let from_env = std::env::var(DEBUG_ENV_VAR)
        .map(|value| env_value_enables(&value))
        .unwrap_or(false);
    set_debug(flag || from_env);
}

fn env_value_enables(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            println!("[{}] {}", module_path!(), format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! debug_eprintln {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[{}] {}", module_path!(), format_args!($($arg)*));
        }
    };
}
