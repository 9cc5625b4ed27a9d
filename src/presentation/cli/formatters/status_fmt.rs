use colored::{ColoredString, Colorize};

use crate::domain::value_objects::endpoint_status::EndpointStatus;

#[must_use]
pub fn status_badge(status: EndpointStatus) -> ColoredString {
    let label = format!(" {status} ");
    match status {
        EndpointStatus::Up => label.on_green().black().bold(),
        EndpointStatus::Down => label.on_red().white().bold(),
        EndpointStatus::Unknown => label.on_bright_black().white(),
    }
}

/// Response time, colored by how slow it is.
#[must_use]
pub fn colorize_latency(seconds: f64) -> ColoredString {
    let text = format!("{seconds:.2}s");
    if seconds >= 5.0 {
        text.red().bold()
    } else if seconds >= 1.0 {
        text.yellow()
    } else {
        text.green()
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}
