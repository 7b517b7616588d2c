use crate::catalog::DiscoveryEntry;
use colored::*;

pub fn print_header(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
    println!("{}", "=".repeat(text.chars().count()).bright_cyan());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red().bold());
}

pub fn print_info(text: &str) {
    println!("{}", text.blue());
}

pub fn print_prompt(text: &str) {
    print!("{}", text.yellow().bold());
}

/// Ten-cell bar for a 0-100 score
pub fn relevance_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize + 5) / 10;
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}

/// One discovery card: checkbox, name, type, status, first two capabilities, match
pub fn print_entry(entry: &DiscoveryEntry, selected: bool) {
    let record = entry.record();
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let status = if record.status.as_str() == "active" {
        record.status.to_string().green()
    } else {
        record.status.to_string().red()
    };
    let capabilities = record
        .capabilities
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let score = entry.display_score();

    println!(
        "{} {:<20} {:<8} {:<9} {:>3}% {}  {}",
        checkbox,
        record.name.bold(),
        record.kind.to_string().magenta(),
        status,
        score,
        relevance_bar(score),
        capabilities.dimmed()
    );
    println!("    {}", record.id.dimmed());
}
