//! Terminal output for tarotctl

use owo_colors::OwoColorize;
use tarot_shared::{CatalogIssue, HealthResponse, Orientation, ReadingResponse};

use crate::client::CatalogCard;
use crate::history::HistoryEntry;

const SEPARATOR: &str = "------------------------------------------------------------";

fn orientation_tag(orientation: Orientation) -> String {
    match orientation {
        Orientation::Upright => format!("[{}]", orientation.label()).bright_green().to_string(),
        Orientation::Reversed => format!("[{}]", orientation.label()).yellow().to_string(),
    }
}

/// Full reading: card, meaning for the drawn orientation, interpretation
pub fn print_reading(reading: &ReadingResponse) {
    let card = &reading.card;
    let meaning = match reading.orientation {
        Orientation::Upright => &card.meaning_upright,
        Orientation::Reversed => &card.meaning_reversed,
    };

    println!();
    println!("{}  {}", card.name.bold(), orientation_tag(reading.orientation));
    println!("{}", card.keywords.join(" / ").dimmed());
    println!("{}", meaning.cyan());
    if let Some(concern) = &reading.concern {
        println!();
        println!("[고민] {}", concern);
    }
    println!("{}", SEPARATOR.dimmed());
    println!("{}", reading.interpretation);
    println!("{}", SEPARATOR.dimmed());
    println!("id: {}", reading.id.dimmed());
    if let Some(created_at) = reading.created_at {
        println!("{}", created_at.format("%Y-%m-%d %H:%M UTC").to_string().dimmed());
    }
}

/// One line per reading
pub fn print_reading_list(readings: &[ReadingResponse]) {
    if readings.is_empty() {
        println!("리딩 기록이 없습니다.");
        return;
    }
    for reading in readings {
        let category = reading
            .category
            .map(|c| c.label().to_string())
            .unwrap_or_default();
        let created = reading
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{}  {:<8} {} {}  {}",
            created.dimmed(),
            category,
            reading.card.name,
            orientation_tag(reading.orientation),
            reading.id.dimmed()
        );
    }
}

pub fn print_cards(cards: &[CatalogCard]) {
    for card in cards {
        println!(
            "{:<14} {}  {}",
            card.id.cyan(),
            card.name,
            card.keywords.join(", ").dimmed()
        );
    }
    println!();
    println!("{} cards", cards.len());
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("저장된 기록이 없습니다.");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}. {}  {:<8} {} {}  {}",
            i + 1,
            entry.saved_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            entry.category.label(),
            entry.card_name,
            orientation_tag(entry.orientation),
            entry.id.dimmed()
        );
    }
}

pub fn print_health(health: &HealthResponse) {
    let status = if health.status == "ok" {
        format!("[{}]", health.status.to_uppercase()).bright_green().to_string()
    } else {
        format!("[{}]", health.status.to_uppercase()).bright_red().to_string()
    };
    println!("{}  tarotd v{}", status, health.version);
    println!("  uptime: {}s", health.uptime_seconds);
    println!("  cards:  {}", health.cards);
    println!("  store:  {}", health.store);
}

pub fn print_catalog_issues(issues: &[CatalogIssue], total: usize) {
    if issues.is_empty() {
        println!("{} {} cards, no issues", "[OK]".bright_green(), total);
        return;
    }
    println!("{} {} issue(s) found", "[FAIL]".bright_red(), issues.len());
    for issue in issues {
        println!("  * {}", issue);
    }
}
