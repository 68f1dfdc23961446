use crate::analysis::recommender::{BuildRecommendation, BuildSource, RecommendedItem};
use crate::analysis::records::AbilitySlot;
use colored::*;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ItemRow {
    stage: String,
    item: String,
    cost: String,
}

pub fn display_recommendation(rec: &BuildRecommendation) {
    println!(
        "\n{}",
        format!("🛡️  Build for {} ({})", rec.champion_name, rec.archetype)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let roles = if rec.profile.primary_role.is_empty() {
        "unknown".to_string()
    } else {
        rec.profile.primary_role.clone()
    };
    println!(
        "{} {}   {} {}   {} {}",
        "Role:".bold(),
        roles,
        "Durable:".bold(),
        yes_no(rec.profile.is_durable),
        "Crowd control:".bold(),
        yes_no(rec.profile.has_crowd_control),
    );

    if rec.source == BuildSource::Fallback {
        println!(
            "{}",
            "Item catalog unavailable, showing the standard build for this archetype".yellow()
        );
    }
    println!();

    let stages: [(&str, &[RecommendedItem]); 4] = [
        ("Starter", &rec.starters),
        ("Boots", &rec.boots),
        ("Core", &rec.core_items),
        ("Luxury", &rec.luxury_items),
    ];

    let mut rows = vec![];
    for (stage, items) in stages {
        if items.is_empty() {
            rows.push(ItemRow {
                stage: stage.to_string(),
                item: "-".dimmed().to_string(),
                cost: String::new(),
            });
        }
        for item in items {
            rows.push(ItemRow {
                stage: stage.to_string(),
                item: item.name.clone(),
                cost: format!("{}g", item.total_cost),
            });
        }
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    display_skill_order(rec);
}

fn display_skill_order(rec: &BuildRecommendation) {
    println!("\n{}", "Skill Order".bold().yellow());

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend((1..=rec.level_sequence.len()).map(|lvl| lvl.to_string()));
    builder.push_record(header);

    for slot in AbilitySlot::ALL {
        let mut record = vec![slot.label().bold().to_string()];
        record.extend(rec.skill_order[slot.row()].iter().map(|set| {
            if *set {
                slot.label().green().to_string()
            } else {
                String::new()
            }
        }));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);

    if !rec.max_order.is_empty() {
        let order: Vec<&str> = rec.max_order.iter().map(|s| s.label()).collect();
        println!("  Max order: {}", order.join(" > ").bold());
    }

    let unassigned = rec.level_sequence.iter().filter(|s| s.is_none()).count();
    if unassigned > 0 {
        println!(
            "  {} {} level(s) have no skill point assigned",
            "⚠️".yellow(),
            unassigned
        );
    }
    println!();
}

fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}
