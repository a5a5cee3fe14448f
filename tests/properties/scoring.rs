//! Property tests for stable score computation.

use proptest::prelude::*;

use skillmeter::{
    compute_level, stable_jitter, JitterRange, Level, ScoreBreakdown, SkillRecord,
    StableScoreComputer,
};

fn skill_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 &()+#.-]{0,32}").unwrap()
}

fn small_range() -> impl Strategy<Value = u32> {
    0u32..=20
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical inputs always produce the identical level.
    #[test]
    fn property_level_is_deterministic(
        name in skill_name(),
        base in any::<i32>(),
        range in small_range(),
    ) {
        let range = JitterRange::new(range);
        prop_assert_eq!(compute_level(&name, base, range), compute_level(&name, base, range));
    }

    /// PROPERTY: the level is always within [40, 95].
    #[test]
    fn property_level_is_bounded(
        name in "(?s).{0,64}",
        base in any::<i32>(),
        range in any::<u32>(),
    ) {
        let level = compute_level(&name, base, JitterRange::new(range)).get();
        prop_assert!((Level::MIN..=Level::MAX).contains(&level));
    }

    /// PROPERTY: the unclamped value stays within base ± range, and the
    /// clamp only ever moves it toward 40 or 95.
    #[test]
    fn property_jitter_stays_in_band(
        name in skill_name(),
        base in -200i32..=300,
        range in small_range(),
    ) {
        let b = ScoreBreakdown::compute(&name, base, JitterRange::new(range));
        let r = i64::from(range);
        prop_assert!(b.jitter >= -r && b.jitter <= r);
        prop_assert_eq!(b.unclamped, i64::from(base) + b.jitter);

        let level = i64::from(b.level.get());
        if b.unclamped < i64::from(Level::MIN) {
            prop_assert_eq!(level, i64::from(Level::MIN));
        } else if b.unclamped > i64::from(Level::MAX) {
            prop_assert_eq!(level, i64::from(Level::MAX));
        } else {
            prop_assert_eq!(level, b.unclamped);
        }
    }

    /// PROPERTY: jitter depends only on the name, never on the base.
    #[test]
    fn property_jitter_independent_of_base(
        name in skill_name(),
        a in 45i32..=90,
        b in 45i32..=90,
    ) {
        let range = JitterRange::new(3);
        let ja = i64::from(compute_level(&name, a, range).get()) - i64::from(a);
        let jb = i64::from(compute_level(&name, b, range).get()) - i64::from(b);
        prop_assert_eq!(ja, jb);
        prop_assert_eq!(ja, stable_jitter(&name, range));
    }

    /// PROPERTY: bar fill never exceeds the bar and never panics.
    #[test]
    fn property_fill_fits_any_width(level in 0i64..=120, width in any::<usize>()) {
        let level = Level::clamped(level);
        let filled = level.fill(width);
        prop_assert!(filled <= width);
        if width <= 10_000 {
            prop_assert_eq!(filled, (usize::from(level.get()) * width + 50) / 100);
        }
    }

    /// PROPERTY: batch results do not depend on processing order.
    #[test]
    fn property_batch_is_order_independent(
        entries in proptest::collection::vec((skill_name(), 0i32..=100), 0..=24),
    ) {
        let records: Vec<SkillRecord> = entries
            .iter()
            .map(|(name, base)| SkillRecord::new(name.clone(), *base, "Misc"))
            .collect();
        let computer = StableScoreComputer::default();

        let forward = computer.compute_all(&records);

        let mut reversed_records = records.clone();
        reversed_records.reverse();
        let mut reversed = computer.compute_all(&reversed_records);
        reversed.reverse();

        prop_assert_eq!(&forward, &reversed);
        for (record, computed) in records.iter().zip(&forward) {
            prop_assert_eq!(computed.level(), computer.level(record.name(), record.base()));
        }
    }
}

#[test]
fn name_content_changes_jitter_somewhere() {
    // Not a constant function of base alone.
    let range = JitterRange::DEFAULT;
    let levels: std::collections::HashSet<u8> = ["Python", "Python2", "Java", "C++", "Rust", ""]
        .iter()
        .map(|n| compute_level(n, 70, range).get())
        .collect();
    assert!(levels.len() > 1);
}
