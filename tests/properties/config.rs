//! Property tests for config parsing.

use proptest::prelude::*;

use skillmeter::Config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_config_parse_never_panics(content in "(?s).{0,256}") {
        let _ = toml::from_str::<Config>(&content);
    }

    /// PROPERTY: any non-negative configured range is accepted.
    #[test]
    fn property_non_negative_range_accepted(range in 0i64..=i64::from(u32::MAX)) {
        let config: Config = toml::from_str(&format!("[scoring]\nrange = {range}\n")).unwrap();
        prop_assert_eq!(i64::from(config.jitter_range().unwrap().get()), range);
    }

    /// PROPERTY: any negative configured range is rejected.
    #[test]
    fn property_negative_range_rejected(range in i64::MIN..0) {
        let config: Config = toml::from_str(&format!("[scoring]\nrange = {range}\n")).unwrap();
        prop_assert!(config.jitter_range().is_err());
    }
}
