use anyhow::{bail, Context, Result};
use colored::Colorize;
use privcat_core::{
    build_tag_counts, group_tags_by_article, load_catalog_from_path, parse_facet_filters,
    CatalogAccess, CatalogError, FilterState, LoadOptions,
};
use std::path::Path;

use crate::cli::FilterArgs;
use crate::errors::map_catalog_load_error;
use crate::output::{
    format_active_filters, format_example_detail, format_example_summary, format_pattern_detail,
    format_pattern_summary, format_tag_groups, format_validation_summary,
};

/// Load the catalog, printing a readable report when it is rejected
pub fn load(path: &Path, options: &LoadOptions) -> Result<CatalogAccess> {
    load_catalog_from_path(path, options).map_err(|err| {
        report_load_error(&err, path);
        anyhow::Error::new(err).context(format!("could not load catalog '{}'", path.display()))
    })
}

fn report_load_error(error: &CatalogError, path: &Path) {
    let (title, message, details) = map_catalog_load_error(error, path);
    eprintln!("{} {}\n", title.red().bold(), message);
    eprintln!("{}\n", details);
}

/// Build a filter state from command-line arguments
pub fn filter_state_from_args(args: &FilterArgs) -> FilterState {
    let mut filters = FilterState {
        gdpr_tags: args.gdpr_tags.clone(),
        ui_evidence_tags: args.ui_evidence_tags.clone(),
        heuristics: args.heuristics.clone(),
        search_query: args.search.clone(),
        template_collections: Vec::new(),
    };

    for rejected in parse_facet_filters(&args.facets, &mut filters) {
        tracing::warn!(facet = %rejected, "ignoring facet filter, expected gdpr=, ui= or heuristic=");
    }

    filters
}

pub fn run_validate(path: &Path, options: &LoadOptions) -> Result<()> {
    let access = load(path, options)?;
    print!("{}", format_validation_summary(&access));
    Ok(())
}

pub fn run_filter(path: &Path, options: &LoadOptions, args: &FilterArgs, json: bool) -> Result<()> {
    let access = load(path, options)?;
    let filters = filter_state_from_args(args);
    let result = access.apply_filters(&filters);

    if json {
        let rendered = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("# Filtered Results\n");
    print!("{}", format_active_filters(&filters));

    println!("**Matching Patterns:** {}\n", result.patterns.len());
    if result.patterns.is_empty() {
        println!("_No patterns match the specified filters. Try removing one expectation._\n");
        return Ok(());
    }
    for pattern in &result.patterns {
        print!("{}", format_pattern_summary(pattern));
    }

    println!("## Examples ({})\n", result.examples.len());
    for example in &result.examples {
        print!("{}", format_example_summary(example));
    }
    Ok(())
}

pub fn run_show(path: &Path, options: &LoadOptions, slug: &str) -> Result<()> {
    let access = load(path, options)?;
    let Some(pattern) = access.pattern_by_slug(slug) else {
        bail!("no pattern with slug '{}'", slug);
    };

    print!("{}", format_pattern_detail(&access, pattern));
    Ok(())
}

pub fn run_example(path: &Path, options: &LoadOptions, id: &str) -> Result<()> {
    let access = load(path, options)?;
    let Some(example) = access.example_by_id(id) else {
        bail!("no example with id '{}'", id);
    };

    print!("{}", format_example_detail(&access, example));
    Ok(())
}

pub fn run_tags(path: &Path, options: &LoadOptions, args: &FilterArgs) -> Result<()> {
    let access = load(path, options)?;
    let filters = filter_state_from_args(args);
    let result = access.apply_filters(&filters);

    // Counts follow the filtered set so exhausted tags show 0
    let counts = build_tag_counts(result.patterns.iter().copied());
    let groups = group_tags_by_article(&access.catalog().indexes.gdpr_tags);

    println!("# GDPR Expectations by Article\n");
    print!("{}", format_active_filters(&filters));
    print!("{}", format_tag_groups(&groups, &counts));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args_merge_generic_facets() {
        let args = FilterArgs {
            gdpr_tags: vec!["GDPR-A12-X".to_string()],
            facets: vec!["ui=Toggle".to_string(), "bogus".to_string()],
            search: "notice".to_string(),
            ..Default::default()
        };

        let filters = filter_state_from_args(&args);
        assert_eq!(filters.gdpr_tags, vec!["GDPR-A12-X"]);
        assert_eq!(filters.ui_evidence_tags, vec!["Toggle"]);
        assert!(filters.heuristics.is_empty());
        assert_eq!(filters.search_query, "notice");
    }
}
