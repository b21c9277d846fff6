//! GDPR tag codec
//!
//! Tags look like `GDPR-A12-Plain-Language-Notice`: a literal `GDPR-` marker,
//! an optional `A<digits>` article number and a hyphen-delimited expectation.
//! Parsing never fails; a tag without an article number keeps its whole
//! remainder as the label.

use crate::models::Pattern;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

pub const TAG_PREFIX: &str = "GDPR-";

pub const ARTICLE_BASE_URL: &str = "https://www.legislation.gov.uk/eur/2016/679/article/";

pub const DEFAULT_UI_TRANSLATION: &str = "In UI terms: translate this requirement into a clear control, a clear explanation, or a clear user pathway.";

pub const ARTICLE_TITLES: &[(&str, &str)] = &[
    ("5", "Principles relating to processing of personal data"),
    ("6", "Lawfulness of processing"),
    ("7", "Conditions for consent"),
    ("12", "Transparent information, communication and modalities"),
    ("13", "Information to be provided where personal data are collected from the data subject"),
    ("14", "Information to be provided where personal data have not been obtained from the data subject"),
    ("15", "Right of access by the data subject"),
    ("16", "Right to rectification"),
    ("17", "Right to erasure ('right to be forgotten')"),
    ("18", "Right to restriction of processing"),
    ("20", "Right to data portability"),
    ("21", "Right to object"),
    ("25", "Data protection by design and by default"),
];

pub const ARTICLE_UI_TRANSLATIONS: &[(&str, &str)] = &[
    ("5", "In UI terms: make data use visible and purposeful—no hidden processing, clear separation of optional vs. required data."),
    ("6", "In UI terms: clearly explain the legal basis for processing data in context."),
    ("7", "In UI terms: consent must be freely given and reversible—no preselection, neutral framing, and withdrawal as easy as consent."),
    ("12", "In UI terms: make privacy information easy to find, easy to read, and timed to the decision."),
    ("13", "In UI terms: disclose key details at the moment data is collected—purpose, retention, recipients, and user rights."),
    ("14", "In UI terms: when data comes from third parties, explain the source and how it will be used."),
    ("15", "In UI terms: users should be able to find and view their personal data easily, with a clear entry point and understandable summaries."),
    ("16", "In UI terms: provide clear paths for users to correct or update their personal data."),
    ("17", "In UI terms: make account and data deletion easy to find, with clear scope explanation."),
    ("18", "In UI terms: allow users to pause processing with clear explanation of what restriction means."),
    ("20", "In UI terms: offer data export in machine-readable formats with clear explanation of portability."),
    ("21", "In UI terms: provide easy opt-out controls for direct marketing and objection to processing."),
    ("25", "In UI terms: default settings should protect privacy—non-essential processing off by default, with clear user control."),
];

/// A suggested starting tag for browsing by article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStartPreset {
    pub label: &'static str,
    pub tag: &'static str,
    pub article_number: &'static str,
}

pub const QUICK_START_PRESETS: &[QuickStartPreset] = &[
    QuickStartPreset {
        label: "Transparency (Art. 12)",
        tag: "GDPR-A12-Accessible-Notice-Presentation",
        article_number: "12",
    },
    QuickStartPreset {
        label: "Notice at collection (Art. 13)",
        tag: "GDPR-A13-Purpose-Explained-at-Collection",
        article_number: "13",
    },
    QuickStartPreset {
        label: "Consent quality (Art. 7)",
        tag: "GDPR-A7-Consent-Visually-Distinct",
        article_number: "7",
    },
    QuickStartPreset {
        label: "Privacy defaults (Art. 25)",
        tag: "GDPR-A25-Privacy-Protective-Defaults",
        article_number: "25",
    },
    QuickStartPreset {
        label: "User rights (Art. 15)",
        tag: "GDPR-A15-Data-Access-Entry-Point",
        article_number: "15",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedGdprTag {
    /// Digits after `A`, or empty when the tag carries no article number
    pub article_number: String,
    pub expectation_label: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedGdprTag {
    pub display: String,
    pub raw: String,
}

fn article_prefix() -> &'static Regex {
    static ARTICLE_PREFIX: OnceLock<Regex> = OnceLock::new();
    ARTICLE_PREFIX.get_or_init(|| Regex::new(r"^A([0-9]+)-?").expect("valid article regex"))
}

/// Split a tag into its article number and the raw (still hyphenated) remainder
fn split_tag(tag: &str) -> (&str, &str) {
    let remainder = tag.strip_prefix(TAG_PREFIX).unwrap_or(tag);

    match article_prefix().captures(remainder) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let digits = caps.get(1).map_or("", |m| m.as_str());
            (digits, &remainder[whole..])
        }
        None => ("", remainder),
    }
}

/// Parse a GDPR tag into its components
///
/// `GDPR-A12-Plain-Language-Notice` gives article `12` and label
/// `Plain language notice`.
pub fn parse_gdpr_tag(tag: &str) -> ParsedGdprTag {
    let (article_number, remainder) = split_tag(tag);

    ParsedGdprTag {
        article_number: article_number.to_string(),
        expectation_label: format_expectation_label(remainder),
        raw: tag.to_string(),
    }
}

/// Format a tag for display: `Art. 12 · Plain language notice`
pub fn format_gdpr_tag(tag: &str) -> FormattedGdprTag {
    let (article_number, remainder) = split_tag(tag);
    let description = format_expectation_label(remainder);

    let display = if article_number.is_empty() {
        description
    } else {
        format!("Art. {} · {}", article_number, description)
    };

    FormattedGdprTag {
        display,
        raw: tag.to_string(),
    }
}

/// Hyphens to spaces, lower-cased, first word character upper-cased
pub fn format_expectation_label(text: &str) -> String {
    let lowered = text.replace('-', " ").to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => {
            let mut label = first.to_ascii_uppercase().to_string();
            label.push_str(chars.as_str());
            label
        }
        _ => lowered,
    }
}

pub fn tag_display_label(tag: &str) -> String {
    format_gdpr_tag(tag).display
}

pub fn expectation_only_label(tag: &str) -> String {
    parse_gdpr_tag(tag).expectation_label
}

/// Count, per tag, how many of the given patterns carry it
///
/// A tag listed twice by the same pattern still counts once for that pattern,
/// so the result is a pattern count rather than a per-occurrence tally.
pub fn build_tag_counts<'a, I>(patterns: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a Pattern>,
{
    let mut counts = HashMap::new();

    for pattern in patterns {
        let mut seen = HashSet::new();
        for tag in pattern.gdpr_tags() {
            if seen.insert(tag.as_str()) {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
    }

    counts
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn article_title(article_number: &str) -> String {
    lookup(ARTICLE_TITLES, article_number)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Article {}", article_number))
}

/// "In UI terms" reading of an article
pub fn article_ui_translation(article_number: &str) -> &'static str {
    lookup(ARTICLE_UI_TRANSLATIONS, article_number).unwrap_or(DEFAULT_UI_TRANSLATION)
}

pub fn article_url(article_number: &str) -> String {
    format!("{}{}", ARTICLE_BASE_URL, article_number)
}
