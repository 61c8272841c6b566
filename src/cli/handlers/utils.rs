use crate::controller::Confirm;
use crate::model::Memory;
use crate::render::DATE_PLACEHOLDER;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Read, Write};

/// Resolve story content from the CLI arg or stdin ('-')
pub fn resolve_story(story: String) -> Result<String> {
    if story == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content.trim().to_string());
    }
    Ok(story)
}

/// `[y/N]` prompt on stdin
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }
}

pub fn print_memory_list(memories: &[Memory]) {
    if memories.is_empty() {
        println!("No memories found.");
        return;
    }

    for memory in memories {
        let title = if memory.title.is_empty() {
            "(untitled)".dimmed().to_string()
        } else {
            memory.title.bold().to_string()
        };
        println!(
            "{} {} [{}] {}",
            memory.id.to_string().cyan(),
            memory.date().unwrap_or(DATE_PLACEHOLDER).yellow(),
            memory.coordinate().to_string().blue(),
            title
        );
    }
}

pub fn print_memory(memory: &Memory) {
    println!("{} {}", memory.id.to_string().cyan().bold(), memory.title.bold());
    println!("Date:     {}", memory.date().unwrap_or(DATE_PLACEHOLDER).yellow());
    println!("Location: {}", memory.coordinate().to_string().blue());
    if let Some(url) = memory.photo_url() {
        println!("Photo:    {}", url.magenta());
    }

    if !memory.story.is_empty() {
        println!("\n{}", memory.story);
    }
}
