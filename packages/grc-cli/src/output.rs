//! Human readable rendering of table models and summaries.

use colored::Colorize;
use grc_core::details::PLACEHOLDER;
use grc_core::record::display_text;
use grc_core::{DetailEntry, TableDefinition, TableModel, ViolationCard};

pub fn print_table(model: &TableModel, definition: &TableDefinition) {
    let columns: Vec<&str> = definition
        .table_keys
        .iter()
        .map(|column| column.resource_key.as_str())
        .collect();

    if columns.is_empty() {
        for id in &model.item_ids {
            println!("{id}");
        }
    } else {
        println!("{}", columns.join("\t").bold());
        for id in &model.item_ids {
            let Some(record) = model.items.get(id) else {
                continue;
            };
            let row: Vec<String> = columns
                .iter()
                .map(|column| {
                    grc_core::get_field(record, column)
                        .map(display_text)
                        .unwrap_or_else(|| PLACEHOLDER.to_string())
                })
                .collect();
            println!("{}", row.join("\t"));
        }
    }

    let mut footer = format!(
        "{} rows, next sort {}",
        model.total_filtered_items, model.sort_direction
    );
    if !model.search_value.is_empty() {
        footer.push_str(&format!(", search \"{}\"", model.search_value));
    }
    println!("{}", footer.dimmed());
}

pub fn print_details(columns: &[Vec<DetailEntry>]) {
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            println!("{}", "|".dimmed());
        }
        for entry in column {
            println!("{}  {}", entry.label.bold(), entry.value);
        }
    }
}

pub fn print_violations(cards: &[ViolationCard]) {
    for card in cards {
        let count = card.count.to_string();
        let count = if card.alert() { count.red().bold() } else { count.normal() };
        println!("{count} {:?} violations", card.violation_type);
    }
}
