use std::collections::HashMap;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::OrgReport;

/// Render a colored terminal report.
pub fn render(report: &OrgReport, quiet: bool) {
    if quiet {
        for name in &report.repos {
            println!("{}", name);
        }
        return;
    }

    println!("\n {} v{}", "gh-org".bold(), env!("CARGO_PKG_VERSION"));
    match &report.display_name {
        Some(name) if name != &report.org => {
            println!(" Organization: {} ({})", name.bold(), report.org)
        }
        _ => println!(" Organization: {}", report.org.bold()),
    }
    if let Some(url) = &report.html_url {
        println!(" {}", url.dimmed());
    }
    println!();

    if report.repos.is_empty() {
        println!(" {} No matching repositories.\n", "[EMPTY]".yellow().bold());
    } else {
        println!("{}", build_table(report));
    }

    println!(" {}\n", summary_line(report));
}

fn build_table(report: &OrgReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
        ]);

    for (i, name) in report.repos.iter().enumerate() {
        let license = match report.license_of(name) {
            Some(key) => Cell::new(key).fg(Color::Green),
            None => Cell::new("none").fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(name),
            license,
        ]);
    }

    table
}

fn summary_line(report: &OrgReport) -> String {
    let shown = format!("{} of {} repositories", report.repos.len(), report.total);
    match report.license_label() {
        Some(label) => format!("{} with license {}", shown, label.cyan()),
        None => format!("{}  {}", shown, top_licenses(report)),
    }
}

/// The three most common license keys among listed repositories.
fn top_licenses(report: &OrgReport) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &report.repos {
        let lic = report.license_of(name).unwrap_or("none");
        *counts.entry(lic).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(lic, cnt)| format!("{} ({})", lic, cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(repos: &[(&str, Option<&str>)], license: Option<serde_json::Value>) -> OrgReport {
        OrgReport {
            org: "acme".to_string(),
            display_name: None,
            html_url: None,
            license,
            total: 5,
            repos: repos.iter().map(|(n, _)| n.to_string()).collect(),
            license_keys: repos
                .iter()
                .filter_map(|(n, l)| l.map(|l| (n.to_string(), l.to_string())))
                .collect(),
        }
    }

    #[test]
    fn test_top_licenses_orders_by_count() {
        let r = report(
            &[
                ("a", Some("mit")),
                ("b", Some("apache-2.0")),
                ("c", Some("apache-2.0")),
                ("d", None),
            ],
            None,
        );
        assert_eq!(top_licenses(&r), "[apache-2.0 (2), mit (1), none (1)]");
    }

    #[test]
    fn test_top_licenses_empty() {
        assert_eq!(top_licenses(&report(&[], None)), "");
    }

    #[test]
    fn test_table_has_row_per_repo() {
        let r = report(&[("a", Some("mit")), ("b", None)], None);
        assert_eq!(build_table(&r).row_iter().count(), 2);
    }

    #[test]
    fn test_summary_mentions_filter() {
        colored::control::set_override(false);
        let r = report(&[("a", Some("mit"))], Some(serde_json::json!("mit")));
        assert_eq!(summary_line(&r), "1 of 5 repositories with license mit");
    }
}
