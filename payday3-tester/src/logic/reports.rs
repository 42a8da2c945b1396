use anyhow::Result;
use colored::Colorize;
use payday3_game::{OptionDef, OptionKind};
use std::io::Write;

use super::catalog::CatalogReport;

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CatalogReport,
) -> Result<()> {
    writeln!(out)?;
    let title = format!("🎯 {} Objective Catalog", report.name);
    writeln!(out, "{}", title.bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let platforms: Vec<String> = std::iter::once(report.platform)
        .chain(report.platforms_other.iter().copied())
        .map(|p| p.to_string())
        .collect();
    writeln!(out, "Platforms: {}", platforms.join(", "))?;
    writeln!(out, "Adult only / unrated: {}", report.is_adult_only_or_unrated)?;
    writeln!(out)?;

    writeln!(out, "{}", "📚 Datasets".bright_yellow().bold())?;
    for (name, items) in &report.datasets {
        writeln!(out, "{} ({})", name.bold(), items.len())?;
        for item in items {
            writeln!(out, "   • {item}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "{}", "⚖️  Objective Templates".bright_yellow().bold())?;
    let total = report.total_weight();
    for template in &report.objectives {
        writeln!(
            out,
            "{} (weight {}/{total})",
            template.label.bold(),
            template.weight
        )?;
    }
    if total == 0 {
        writeln!(out, "{}", "All template weights are zero.".red())?;
    }
    if !report.constraints.is_empty() {
        writeln!(out, "Constraints: {}", report.constraints.len())?;
    }

    if !report.previews.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "🎲 Preview Objectives".bright_green().bold())?;
        for (n, preview) in report.previews.iter().enumerate() {
            writeln!(out, "{:>3}. {}", n + 1, preview.text.green())?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CatalogReport,
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CatalogReport,
) -> Result<()> {
    writeln!(out, "# {} Objective Catalog\n", report.name)?;

    writeln!(out, "## Datasets\n")?;
    for (name, items) in &report.datasets {
        writeln!(out, "### {name} ({})\n", items.len())?;
        for item in items {
            writeln!(out, "- {item}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## Objective Templates\n")?;
    writeln!(out, "| Label | Weight |")?;
    writeln!(out, "|---|---|")?;
    for template in &report.objectives {
        writeln!(out, "| {} | {} |", template.label, template.weight)?;
    }
    writeln!(out)?;

    if !report.previews.is_empty() {
        writeln!(out, "## Preview Objectives\n")?;
        for preview in &report.previews {
            writeln!(out, "1. {}", preview.text)?;
        }
    }
    Ok(())
}

pub fn generate_schema_listing<W: Write + ?Sized>(
    out: &mut W,
    schema: &[OptionDef],
) -> Result<()> {
    writeln!(out, "Available options:")?;
    for def in schema {
        let shape = match &def.kind {
            OptionKind::Toggle { default } => format!("toggle (default {default})"),
            OptionKind::Range {
                range_start,
                range_end,
                default,
            } => format!("range {range_start}..={range_end} (default {default})"),
            OptionKind::Set { valid_keys, .. } => format!("set of [{}]", valid_keys.join(", ")),
            OptionKind::Choice { choices, default } => {
                format!("one of [{}] (default {default})", choices.join(", "))
            }
        };
        writeln!(out, "  {:28} - {}: {shape}", def.key, def.display_name)?;
        writeln!(out, "  {:28}   {}", "", def.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::preview::draw_previews;
    use payday3_game::{Payday3Game, option_schema};

    fn report() -> CatalogReport {
        let game = Payday3Game::default();
        let previews = draw_previews(&game, 3, 5);
        CatalogReport::build(&game, previews)
    }

    #[test]
    fn json_report_is_parseable() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["name"], "PAYDAY 3");
        assert_eq!(value["previews"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn markdown_report_lists_templates() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# PAYDAY 3 Objective Catalog"));
        assert!(text.contains("| Beat LOUDHEIST on DIFFICULTY in Loud | 50 |"));
        assert!(text.contains("### difficulty (3)"));
    }

    #[test]
    fn console_report_mentions_every_dataset() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Platforms: PC, PS5, XSX"));
        assert!(text.contains("loud_heist (18)"));
        assert!(text.contains("stealth_heist (17)"));
    }

    #[test]
    fn schema_listing_names_every_option() {
        let mut buf = Vec::new();
        generate_schema_listing(&mut buf, &option_schema()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Available options:"));
        for def in option_schema() {
            assert!(text.contains(def.key));
        }
        assert!(text.contains("range 0..=100 (default 50)"));
    }
}
