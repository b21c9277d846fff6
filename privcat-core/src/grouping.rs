use crate::sorting::{compare_article_numbers, compare_labels};
use crate::tags::parse_gdpr_tag;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleGroup {
    pub article_number: String,
    pub tags: Vec<String>,
}

/// Group tags by article number
/// Tags without an article number are left out. Groups come back in ascending
/// numeric article order; tags within a group are ordered by expectation label.
pub fn group_tags_by_article<S: AsRef<str>>(tags: &[S]) -> Vec<ArticleGroup> {
    let mut groups: HashMap<String, Vec<(String, String)>> = HashMap::new();

    for tag in tags {
        let parsed = parse_gdpr_tag(tag.as_ref());
        if parsed.article_number.is_empty() {
            continue;
        }

        groups
            .entry(parsed.article_number)
            .or_default()
            .push((parsed.expectation_label, parsed.raw));
    }

    let mut grouped: Vec<ArticleGroup> = groups
        .into_iter()
        .map(|(article_number, mut entries)| {
            entries.sort_by(|(label_a, raw_a), (label_b, raw_b)| {
                compare_labels(label_a, label_b).then_with(|| raw_a.cmp(raw_b))
            });
            ArticleGroup {
                article_number,
                tags: entries.into_iter().map(|(_, raw)| raw).collect(),
            }
        })
        .collect();

    grouped.sort_by(|a, b| compare_article_numbers(&a.article_number, &b.article_number));
    grouped
}

/// Distinct article numbers referenced by the tags, ascending numerically
pub fn article_numbers_from_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut numbers: Vec<String> = tags
        .iter()
        .map(|tag| parse_gdpr_tag(tag.as_ref()).article_number)
        .filter(|number| !number.is_empty())
        .collect();

    numbers.sort_by(|a, b| compare_article_numbers(a, b));
    numbers.dedup();
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_in_numeric_order() {
        let groups = group_tags_by_article(&["GDPR-A9-Z", "GDPR-A12-X"]);
        let order: Vec<&str> = groups.iter().map(|g| g.article_number.as_str()).collect();
        assert_eq!(order, vec!["9", "12"]);
    }

    #[test]
    fn test_tags_without_article_are_dropped() {
        let groups = group_tags_by_article(&["GDPR-Loose-Tag", "GDPR-A7-Y", "not a tag"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].article_number, "7");
        assert_eq!(groups[0].tags, vec!["GDPR-A7-Y"]);
    }

    #[test]
    fn test_tags_sorted_by_label_within_group() {
        let groups = group_tags_by_article(&[
            "GDPR-A12-Timely-Notice",
            "GDPR-A12-accessible-Notice",
            "GDPR-A12-Plain-Language",
        ]);
        assert_eq!(
            groups[0].tags,
            vec![
                "GDPR-A12-accessible-Notice",
                "GDPR-A12-Plain-Language",
                "GDPR-A12-Timely-Notice",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let tags: Vec<String> = Vec::new();
        assert!(group_tags_by_article(&tags).is_empty());
        assert!(article_numbers_from_tags(&tags).is_empty());
    }

    #[test]
    fn test_article_numbers_from_tags() {
        let numbers = article_numbers_from_tags(&[
            "GDPR-A25-Defaults",
            "GDPR-A7-Consent",
            "GDPR-A25-Other",
            "GDPR-No-Article",
        ]);
        assert_eq!(numbers, vec!["7", "25"]);
    }
}
