use colored::Colorize;
use udc_console::{ApiStatus, Toast, ToastKind};

/// Print a status message with a spinner-like indicator
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print an informational message only in verbose mode
pub fn verbose_message(verbose: bool, message: &str) {
    if verbose {
        info_message(message);
    }
}

/// Print a flow notification
pub fn toast(toast: &Toast) {
    match toast.kind {
        ToastKind::Success => success_message(&toast.message),
        ToastKind::Error => error_message(&toast.message),
    }
}

/// Print the connector service status badge
pub fn api_status(status: ApiStatus, timestamp: Option<&str>) {
    let label = match status {
        ApiStatus::Connected => format!("● {}", status.label()).green().bold(),
        ApiStatus::Offline => format!("● {}", status.label()).red().bold(),
        ApiStatus::Unknown => format!("● {}", status.label()).yellow(),
    };

    match timestamp {
        Some(time) => println!("{} {}", format!("[{time}]").dimmed(), label),
        None => println!("{label}"),
    }
}
