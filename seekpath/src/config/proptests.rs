//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn path_entry_strategy() -> impl Strategy<Value = String> {
    "(\\./|/)?[a-z]{1,8}(/[a-z]{1,8}){0,3}"
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::collection::vec(path_entry_strategy(), 0..4)),
        prop::option::of(path_entry_strategy()),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(search_paths, data_dir, output_format)| Config {
            search_paths,
            data_dir,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Scalars from the higher-precedence source win when set
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.data_dir, &high.data_dir.clone().or(low.data_dir.clone()));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Search paths keep every entry, lower precedence first
    #[test]
    fn config_merge_search_paths_concatenate(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let expected: Vec<String> = low.search_paths.clone().unwrap_or_default()
            .into_iter()
            .chain(high.search_paths.clone().unwrap_or_default())
            .collect();
        prop_assert_eq!(result.search_paths.unwrap_or_default(), expected);
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Well-formed entries always pass validation
    #[test]
    fn config_generated_entries_valid(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }
}
