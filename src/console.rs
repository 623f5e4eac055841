//! Colored console output for command results.
//! Diagnostics go through `log`; this module prints what the user asked for.

use crate::registry::TemplateDescriptor;
use colored::{Color, Colorize};
use std::path::Path;

pub fn success(message: &str) {
    println!("{}", format!("✅ {message}").green());
}

pub fn warn(message: &str) {
    println!("{}", format!("⚠️  {message}").yellow());
}

pub fn info(message: &str) {
    println!("{}", format!("ℹ️  {message}").blue());
}

/// Secondary detail line.
pub fn running(message: &str) {
    println!("{}", message.bright_black());
}

pub fn divider() {
    println!("{}", "─".repeat(50).bright_black());
}

/// Lines of a rounded box around `lines`, with one column of padding.
pub fn boxed(lines: &[String]) -> Vec<String> {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("╭{}╮", "─".repeat(width + 2)));
    for line in lines {
        let pad = width - line.chars().count();
        out.push(format!("│ {line}{} │", " ".repeat(pad)));
    }
    out.push(format!("╰{}╯", "─".repeat(width + 2)));
    out
}

fn print_box(title: &str, message: &str, color: Color) {
    let mut lines = vec![title.to_string(), String::new()];
    lines.extend(message.lines().map(str::to_string));
    println!();
    for (i, line) in boxed(&lines).into_iter().enumerate() {
        if i == 1 {
            // the title row
            println!("{}", line.color(color).bold());
        } else {
            println!("{}", line.color(color));
        }
    }
    println!();
}

pub fn success_box(title: &str, message: &str) {
    print_box(title, message, Color::Green);
}

pub fn banner(version: &str) {
    let lines = [
        format!("MyCLI v{version}"),
        "Manage Reusable Code Templates".to_string(),
    ];
    for line in boxed(&lines) {
        println!("{}", line.blue().bold());
    }
}

pub fn template_info(template: &TemplateDescriptor, target: &Path) {
    println!("{} {}", "Adding template:".blue(), template.title.blue().bold());
    running(&format!("Type: {}", template.kind));
    running(&format!("Description: {}", template.description));
    running(&format!("Target: {}", target.display()));
    if !template.dependencies.is_empty() {
        running(&format!("Dependencies: {}", template.dependencies.join(", ")));
    }
    println!();
}
