//! Panic hook that prints a short crash report instead of the default
//! one-line panic message.

use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════";

/// Install the crash-report hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{RULE}");
        eprintln!("leadgen-roi {VERSION} crashed ({})", std::env::consts::OS);
        eprintln!("{RULE}");
        for line in crash_details(info) {
            eprintln!("  {line}");
        }
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            eprintln!();
            eprintln!("{}", std::backtrace::Backtrace::capture());
        } else {
            eprintln!("  Run with RUST_BACKTRACE=1 for a stack trace");
        }
        eprintln!("{RULE}");
    }));
}

fn crash_details(info: &PanicHookInfo<'_>) -> Vec<String> {
    let mut lines = vec![format!("Panic: {}", truncate(&extract_panic_message(info), 120))];

    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("Span: {}", metadata.name()));
    }

    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
