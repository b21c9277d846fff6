use colored::Colorize;
use privcat_core::{
    article_title, article_ui_translation, has_filters, tag_display_label, ArticleGroup,
    CatalogAccess, DanglingReference, Example, FilterState, Pattern, RiskLevel,
};
use std::collections::HashMap;
use std::fmt::Write;

/// Markdown-style list of the active filters
pub fn format_active_filters(filters: &FilterState) -> String {
    let mut out = String::new();
    if !has_filters(filters) {
        return out;
    }

    let _ = writeln!(out, "{}\n", "## Active Filters".bold());
    if !filters.gdpr_tags.is_empty() {
        let labels: Vec<String> = filters.gdpr_tags.iter().map(|t| tag_display_label(t)).collect();
        let _ = writeln!(out, "- **GDPR:** {}", labels.join(" AND "));
    }
    if !filters.ui_evidence_tags.is_empty() {
        let _ = writeln!(out, "- **UI evidence:** {}", filters.ui_evidence_tags.join(" AND "));
    }
    if !filters.heuristics.is_empty() {
        let _ = writeln!(out, "- **Heuristics:** {}", filters.heuristics.join(" AND "));
    }
    if !filters.search_query.trim().is_empty() {
        let _ = writeln!(out, "- **Search:** \"{}\"", filters.search_query.trim());
    }
    out.push('\n');
    out
}

/// One pattern as a short list entry
pub fn format_pattern_summary(pattern: &Pattern) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "### {} {}\n",
        pattern.name.bold(),
        format!("({}, {})", pattern.slug, pattern.id).dimmed()
    );
    if !pattern.definition.is_empty() {
        let _ = writeln!(out, "{}\n", pattern.definition);
    }
    if !pattern.gdpr_tags().is_empty() {
        let labels: Vec<String> = pattern.gdpr_tags().iter().map(|t| tag_display_label(t)).collect();
        let _ = writeln!(out, "**GDPR:** {}\n", labels.join("; "));
    }
    out
}

pub fn format_example_summary(example: &Example) -> String {
    let mut out = format!("- {} {}", example.name.bold(), format!("({})", example.id).dimmed());
    for url in example.urls() {
        let _ = write!(out, "\n  {}", url.cyan());
    }
    out.push('\n');
    out
}

fn risk_label(level: RiskLevel) -> String {
    let label = format!("[{}]", level.as_str());
    match level {
        RiskLevel::High => label.red().bold().to_string(),
        RiskLevel::Medium => label.yellow().to_string(),
        RiskLevel::Low => label.green().to_string(),
    }
}

/// Full pattern page: GDPR basis, UI conditions, pitfalls, guidance, examples
pub fn format_pattern_detail(access: &CatalogAccess, pattern: &Pattern) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", pattern.name.bold());
    let _ = writeln!(out, "**Id:** {}  **Slug:** {}\n", pattern.id, pattern.slug);
    let _ = writeln!(out, "**Definition:** {}\n", pattern.definition);
    let _ = writeln!(out, "**Goal:** {}\n", pattern.goal);

    let _ = writeln!(out, "## GDPR Basis\n");
    for article in &pattern.gdpr_basis.articles {
        let title = if article.title.is_empty() {
            article_title(&article.article_number)
        } else {
            article.title.clone()
        };
        let _ = writeln!(out, "### {} {}\n", article.article_ref.bold(), title);
        let _ = writeln!(out, "_{}_\n", article_ui_translation(&article.article_number));
        if let Some(url) = &article.url {
            let _ = writeln!(out, "{}\n", url.cyan());
        }
        for tag in &article.gdpr_tag_expectations {
            let _ = writeln!(out, "- {}", tag_display_label(tag));
        }
        if !article.gdpr_tag_expectations.is_empty() {
            out.push('\n');
        }
    }

    let _ = writeln!(out, "## Observable UI Conditions\n");
    let _ = writeln!(out, "{}\n", pattern.observable_ui_conditions.raw);
    for tag in pattern.ui_evidence_tags() {
        let _ = writeln!(out, "- {}", tag);
    }

    if !pattern.pitfalls.items.is_empty() {
        let _ = writeln!(out, "\n## Pitfalls\n");
        for item in &pattern.pitfalls.items {
            let _ = writeln!(out, "- {} {}", risk_label(item.risk_level), item.text);
        }
    }

    if !pattern.heuristics.considerations.is_empty() {
        let _ = writeln!(out, "\n## Heuristics\n");
        for consideration in pattern.considerations() {
            let _ = writeln!(out, "- {}", consideration);
        }
    }

    if !pattern.design_guidance.evaluative_questions.is_empty() {
        let _ = writeln!(out, "\n## Evaluative Questions\n");
        for question in &pattern.design_guidance.evaluative_questions {
            let _ = writeln!(out, "- {}", question);
        }
    }

    let examples = access.examples_for_pattern(pattern.id.as_str());
    let _ = writeln!(out, "\n## Examples ({})\n", examples.len());
    if examples.is_empty() {
        let _ = writeln!(out, "_No examples linked to this pattern._");
    }
    for example in examples {
        out.push_str(&format_example_summary(example));
    }
    out
}

pub fn format_example_detail(access: &CatalogAccess, example: &Example) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} {}\n", example.name.bold(), format!("({})", example.id).dimmed());
    for url in example.urls() {
        let _ = writeln!(out, "- {}", url.cyan());
    }
    if let Some(figma) = &example.figma_template_url {
        let _ = writeln!(out, "\n**Design template:** {}", figma.cyan());
    }

    let patterns = access.patterns_for_example(example.id.as_str());
    let _ = writeln!(out, "\n## Patterns ({})\n", patterns.len());
    for pattern in patterns {
        let _ = writeln!(out, "- {} {}", pattern.name.bold(), format!("({})", pattern.slug).dimmed());
    }
    out
}

/// Tags grouped by article with the number of patterns carrying each tag
pub fn format_tag_groups(groups: &[ArticleGroup], counts: &HashMap<String, usize>) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(
            out,
            "## Art. {} {}\n",
            group.article_number.bold(),
            article_title(&group.article_number)
        );
        let _ = writeln!(out, "_{}_\n", article_ui_translation(&group.article_number));
        for tag in &group.tags {
            let count = counts.get(tag).copied().unwrap_or(0);
            let line = format!("- {} ({})", tag_display_label(tag), count);
            if count == 0 {
                let _ = writeln!(out, "{}", line.dimmed());
            } else {
                let _ = writeln!(out, "{}", line);
            }
        }
        out.push('\n');
    }
    out
}

pub fn format_validation_summary(access: &CatalogAccess) -> String {
    let catalog = access.catalog();
    let mut out = String::new();
    let _ = writeln!(out, "{} catalog is valid\n", "✓".green().bold());
    let _ = writeln!(out, "- **Schema version:** {}", catalog.meta.schema_version);
    let _ = writeln!(out, "- **Generated at:** {}", catalog.meta.generated_at);
    let _ = writeln!(out, "- **Patterns:** {}", catalog.patterns.len());
    let _ = writeln!(out, "- **Examples:** {}", catalog.examples.len());
    let _ = writeln!(out, "- **GDPR tags:** {}", catalog.indexes.gdpr_tags.len());
    let _ = writeln!(out, "- **UI evidence tags:** {}", catalog.indexes.ui_evidence_tags.len());
    let _ = writeln!(out, "- **Heuristics:** {}", catalog.indexes.heuristics.len());

    let dangling = access.dangling_references();
    if !dangling.is_empty() {
        let _ = writeln!(
            out,
            "\n{} {} dangling reference(s) will be skipped:",
            "!".yellow().bold(),
            dangling.len()
        );
        for reference in dangling {
            let line = match reference {
                DanglingReference::Example { from, to } => format!("{} -> unknown example {}", from, to),
                DanglingReference::Pattern { from, to } => format!("{} -> unknown pattern {}", from, to),
            };
            let _ = writeln!(out, "  - {}", line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use privcat_core::{group_tags_by_article, load_catalog_from_str, LoadOptions};

    fn fixture() -> CatalogAccess {
        colored::control::set_override(false);
        load_catalog_from_str(
            include_str!("../privcat-core/tests/fixtures/catalog.json"),
            &LoadOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn active_filters_empty_when_nothing_set() {
        colored::control::set_override(false);
        assert!(format_active_filters(&FilterState::default()).is_empty());

        let filters = FilterState::default()
            .with_gdpr_tag("GDPR-A12-Plain-Language-Notice")
            .with_search(" consent ");
        let out = format_active_filters(&filters);
        assert!(out.contains("- **GDPR:** Art. 12 · Plain language notice"));
        assert!(out.contains("- **Search:** \"consent\""));
    }

    #[test]
    fn pattern_detail_lists_articles_and_examples() {
        let access = fixture();
        let pattern = access.pattern_by_slug("privacy-by-default-settings").unwrap();
        let out = format_pattern_detail(&access, pattern);

        assert!(out.contains("# Privacy-Protective Defaults"));
        assert!(out.contains("In UI terms: default settings should protect privacy"));
        assert!(out.contains("- Art. 25 · Privacy protective defaults"));
        assert!(out.contains("[low] Defaults reset after updates"));
        assert!(out.contains("## Examples (1)"));
    }

    #[test]
    fn example_detail_lists_urls_and_patterns() {
        let access = fixture();
        let example = access.example_by_id("ex-001").unwrap();
        let out = format_example_detail(&access, example);

        assert!(out.contains("- https://stream.example/signup"));
        assert!(out.contains("- https://stream.example/privacy"));
        assert!(out.contains("## Patterns (2)"));
    }

    #[test]
    fn tag_groups_show_counts() {
        colored::control::set_override(false);
        let groups = group_tags_by_article(&["GDPR-A12-X", "GDPR-A9-Z"]);
        let mut counts = HashMap::new();
        counts.insert("GDPR-A12-X".to_string(), 3);

        let out = format_tag_groups(&groups, &counts);
        let art9 = out.find("## Art. 9").unwrap();
        let art12 = out.find("## Art. 12").unwrap();
        assert!(art9 < art12);
        assert!(out.contains("- Art. 12 · X (3)"));
        assert!(out.contains("- Art. 9 · Z (0)"));
    }

    #[test]
    fn validation_summary_reports_dangling_references() {
        let access = fixture();
        let out = format_validation_summary(&access);

        assert!(out.contains("- **Patterns:** 4"));
        assert!(out.contains("2 dangling reference(s)"));
        assert!(out.contains("pat-003 -> unknown example ex-404"));
    }
}
