use privcat_core::{
    apply_filters, create_empty_filter_state, load_catalog, CatalogAccess, FilterResult, FilterState,
    LoadOptions,
};
use proptest::prelude::*;
use proptest::sample::subsequence;
use std::collections::HashSet;
use std::sync::OnceLock;

fn fixture() -> &'static CatalogAccess {
    static ACCESS: OnceLock<CatalogAccess> = OnceLock::new();
    ACCESS.get_or_init(|| {
        let contents = include_str!("fixtures/catalog.json");
        let document = serde_json::from_str(contents).expect("fixture is JSON");
        load_catalog(&document, &LoadOptions::default()).expect("load fixture")
    })
}

fn pattern_ids(result: &FilterResult<'_>) -> Vec<String> {
    result.patterns.iter().map(|p| p.id.to_string()).collect()
}

fn example_ids(result: &FilterResult<'_>) -> Vec<String> {
    result.examples.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn scenario_gdpr_tags_narrow_results() {
    let access = fixture();

    let filters = create_empty_filter_state().with_gdpr_tag("GDPR-A12-Plain-Language-Notice");
    assert_eq!(pattern_ids(&access.apply_filters(&filters)), vec!["pat-001", "pat-002"]);

    let filters = filters.with_gdpr_tag("GDPR-A7-Consent-Visually-Distinct");
    let result = access.apply_filters(&filters);
    assert_eq!(pattern_ids(&result), vec!["pat-001"]);
    assert_eq!(example_ids(&result), vec!["ex-001", "ex-003"]);
}

#[test]
fn empty_filter_returns_everything_reachable() {
    let access = fixture();
    let result = access.apply_filters(&create_empty_filter_state());

    assert_eq!(
        pattern_ids(&result),
        vec!["pat-001", "pat-002", "pat-003", "pat-004"]
    );
    // ex-004 only points at a pattern that does not exist
    assert_eq!(example_ids(&result), vec!["ex-001", "ex-002", "ex-003"]);
}

#[test]
fn facets_combine_with_search() {
    let access = fixture();

    let filters = FilterState::default()
        .with_ui_evidence_tag("Unticked-Toggle")
        .with_heuristic("User control and freedom");
    assert_eq!(pattern_ids(&access.apply_filters(&filters)), vec!["pat-001", "pat-003"]);

    let filters = filters.with_search("SETTINGS PAGE");
    let result = access.apply_filters(&filters);
    assert_eq!(pattern_ids(&result), vec!["pat-003"]);
    assert_eq!(example_ids(&result), vec!["ex-003"]);

    let filters = FilterState::default().with_search("three clicks");
    let result = access.apply_filters(&filters);
    assert_eq!(pattern_ids(&result), vec!["pat-004"]);
    assert!(result.examples.is_empty());
}

#[test]
fn unknown_tag_matches_nothing() {
    let access = fixture();
    let filters = FilterState::default().with_gdpr_tag("GDPR-A99-Unknown");
    let result = access.apply_filters(&filters);

    assert!(result.patterns.is_empty());
    assert!(result.examples.is_empty());
}

#[test]
fn filtering_does_not_touch_the_catalog() {
    let access = fixture();
    let before = access.catalog().clone();
    let filters = FilterState::default().with_search("consent");
    let snapshot = filters.clone();

    let _ = apply_filters(access.catalog(), &filters);

    assert_eq!(access.catalog(), &before);
    assert_eq!(filters, snapshot);
}

fn vocabulary(access: &CatalogAccess) -> (Vec<String>, Vec<String>, Vec<String>) {
    let indexes = &access.catalog().indexes;
    (
        indexes.gdpr_tags.clone(),
        indexes.ui_evidence_tags.clone(),
        indexes.heuristics.clone(),
    )
}

fn filter_state_strategy() -> impl Strategy<Value = FilterState> {
    let (gdpr, ui, heuristics) = vocabulary(fixture());
    let searches = prop_oneof![
        Just(String::new()),
        Just("consent".to_string()),
        Just("  Notice ".to_string()),
        Just("data".to_string()),
        Just("zzz".to_string()),
    ];

    (
        subsequence(gdpr, 0..=2),
        subsequence(ui, 0..=2),
        subsequence(heuristics, 0..=2),
        searches,
    )
        .prop_map(|(gdpr_tags, ui_evidence_tags, heuristics, search_query)| FilterState {
            gdpr_tags,
            ui_evidence_tags,
            heuristics,
            search_query,
            template_collections: Vec::new(),
        })
}

fn extra_facet_strategy() -> impl Strategy<Value = (usize, String)> {
    let (gdpr, ui, heuristics) = vocabulary(fixture());
    prop_oneof![
        proptest::sample::select(gdpr).prop_map(|t| (0usize, t)),
        proptest::sample::select(ui).prop_map(|t| (1usize, t)),
        proptest::sample::select(heuristics).prop_map(|t| (2usize, t)),
    ]
}

proptest! {
    #[test]
    fn adding_a_facet_value_never_widens_results(
        filters in filter_state_strategy(),
        (facet, value) in extra_facet_strategy(),
    ) {
        let access = fixture();
        let base: HashSet<String> = pattern_ids(&access.apply_filters(&filters)).into_iter().collect();

        let narrowed_filters = match facet {
            0 => filters.clone().with_gdpr_tag(value),
            1 => filters.clone().with_ui_evidence_tag(value),
            _ => filters.clone().with_heuristic(value),
        };
        let narrowed: HashSet<String> =
            pattern_ids(&access.apply_filters(&narrowed_filters)).into_iter().collect();

        prop_assert!(narrowed.is_subset(&base));
    }

    #[test]
    fn filtering_is_idempotent_and_ordered(filters in filter_state_strategy()) {
        let access = fixture();
        let first = access.apply_filters(&filters);
        let second = access.apply_filters(&filters);

        prop_assert_eq!(pattern_ids(&first), pattern_ids(&second));
        prop_assert_eq!(example_ids(&first), example_ids(&second));

        let orders: Vec<i64> = first.patterns.iter().map(|p| p.sort_order).collect();
        prop_assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn examples_are_unique_and_linked(filters in filter_state_strategy()) {
        let access = fixture();
        let result = access.apply_filters(&filters);

        let ids = example_ids(&result);
        let unique: HashSet<&String> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());

        let surviving: HashSet<&str> = result.patterns.iter().map(|p| p.id.as_str()).collect();
        for example in &result.examples {
            prop_assert!(example.pattern_ids.iter().any(|pid| surviving.contains(pid.as_str())));
        }

        // Examples keep catalog order
        let positions: Vec<usize> = result
            .examples
            .iter()
            .map(|e| access.examples().iter().position(|c| c.id == e.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
