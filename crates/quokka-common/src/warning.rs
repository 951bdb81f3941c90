//! Parser warnings with colored terminal output.
//!
//! Recovery from malformed markup is never an error, but it is worth telling
//! the user about. Warnings are deduplicated per unique message so a document
//! with hundreds of identical stray end tags reports the problem once.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, kept for deduplication.
static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn warned() -> &'static Mutex<HashSet<String>> {
    WARNED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Report a recoverable parsing problem (prints once per unique message).
///
/// Best-effort: if the set mutex is poisoned the warning is dropped rather
/// than panicking, since warnings must never abort a parse.
///
/// # Example
/// ```ignore
/// warn_once("Tree Builder", "discarding stray end tag </span>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if let Ok(mut seen) = warned().lock()
        && seen.insert(key)
    {
        eprintln!("{YELLOW}[Quokka {component}] ⚠ {message}{RESET}");
    }
}

/// Forget all recorded warnings (call when starting a new document).
pub fn clear_warnings() {
    if let Ok(mut seen) = warned().lock() {
        seen.clear();
    }
}
