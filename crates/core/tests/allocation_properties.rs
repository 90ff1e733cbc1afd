//! Property-based tests for the allocation heuristic and prompt rendering.
//!
//! Uses `proptest` to check the allocation invariants under random subject
//! lists and hour budgets.

use proptest::prelude::*;

use studyplan_core::allocation::round1;
use studyplan_core::{StudyRequest, allocate, build_prompt};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Up to eight distinct subject names plus a weak subset of them.
fn arb_subjects() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::btree_set("[A-Z][a-z]{2,8}", 1..8)
        .prop_flat_map(|set| {
            let subjects: Vec<String> = set.into_iter().collect();
            let len = subjects.len();
            (Just(subjects), prop::collection::vec(any::<bool>(), len))
        })
        .prop_map(|(subjects, mask)| {
            let weak = subjects
                .iter()
                .zip(mask)
                .filter(|(_, weak)| *weak)
                .map(|(s, _)| s.clone())
                .collect();
            (subjects, weak)
        })
}

// ---------------------------------------------------------------------------
// Known values, checked against Python's round(x, 1)
// ---------------------------------------------------------------------------

const CATALOG_OF_EIGHT: [&str; 8] = [
    "Maths",
    "Science",
    "English",
    "History",
    "Geography",
    "Physics",
    "Chemistry",
    "Biology",
];

#[test]
fn near_tie_shares_match_reference_values() {
    // (daily hours, hours per normal subject) with eight subjects, one weak
    let table = [(1.0, 0.1), (2.0, 0.1), (3.0, 0.1), (5.0, 0.2), (7.0, 0.3), (8.0, 0.4)];
    for (daily, expected) in table {
        let entries = allocate(daily, &CATALOG_OF_EIGHT, &["Maths"]);
        let normal: Vec<f64> = entries.iter().filter(|e| !e.is_weak).map(|e| e.hours).collect();
        assert_eq!(normal.len(), 7);
        assert!(
            normal.iter().all(|h| *h == expected),
            "daily_hours = {daily}: got {normal:?}, expected {expected}"
        );
    }
}

#[test]
fn near_tie_prompt_line() {
    let request = StudyRequest {
        class_level: "Class 10".into(),
        subjects: CATALOG_OF_EIGHT.iter().map(|s| s.to_string()).collect(),
        weak_subjects: vec!["Maths".into()],
        daily_hours: 1.0,
        exam_days: 30,
    };
    let prompt = build_prompt(&request, &request.allocation());
    assert!(prompt.contains("Maths: 0.6 hours (focus on weak areas)\n"));
    assert!(prompt.contains("Science: 0.1 hours\n"));
}

// ---------------------------------------------------------------------------
// Property: weak and normal shares follow the fixed formula
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn shares_follow_formula(
        daily_hours in 0.0..24.0f64,
        (subjects, weak) in arb_subjects(),
    ) {
        let entries = allocate(daily_hours, &subjects, &weak);
        let weak_share = round1(daily_hours * 0.6);
        let normal = round1(round1(daily_hours * 0.4) / subjects.len() as f64);

        let weak_sum: f64 = entries.iter().filter(|e| e.is_weak).map(|e| e.hours).sum();
        prop_assert!((weak_sum - weak_share * weak.len() as f64).abs() < 1e-9);

        for entry in entries.iter().filter(|e| !e.is_weak) {
            prop_assert_eq!(entry.hours, normal);
        }
        prop_assert_eq!(entries.len(), subjects.len());
    }

    #[test]
    fn hours_are_one_decimal_and_close_to_exact_share(
        daily_hours in 0.0..24.0f64,
        (subjects, weak) in arb_subjects(),
    ) {
        let entries = allocate(daily_hours, &subjects, &weak);
        let n = subjects.len() as f64;

        for entry in &entries {
            let tenths = entry.hours * 10.0;
            prop_assert!((tenths - tenths.round()).abs() < 1e-6, "{} is not one decimal", entry.hours);

            // Each rounding step moves the value by at most 0.05
            let (exact, tolerance) = if entry.is_weak {
                (daily_hours * 0.6, 0.05)
            } else {
                (daily_hours * 0.4 / n, 0.05 + 0.05 / n)
            };
            prop_assert!(
                (entry.hours - exact).abs() <= tolerance + 1e-9,
                "{} hours for {} is too far from {}",
                entry.hours,
                entry.subject,
                exact
            );
        }
    }

    #[test]
    fn allocation_is_deterministic(
        daily_hours in 0.0..24.0f64,
        (subjects, weak) in arb_subjects(),
    ) {
        prop_assert_eq!(
            allocate(daily_hours, &subjects, &weak),
            allocate(daily_hours, &subjects, &weak)
        );
    }

    #[test]
    fn weak_first_and_input_order_kept(
        daily_hours in 1.0..8.0f64,
        (subjects, weak) in arb_subjects(),
    ) {
        let entries = allocate(daily_hours, &subjects, &weak);
        let split = entries.iter().take_while(|e| e.is_weak).count();
        prop_assert_eq!(split, weak.len());
        prop_assert!(entries[split..].iter().all(|e| !e.is_weak));

        let weak_order: Vec<&String> = entries[..split].iter().map(|e| &e.subject).collect();
        prop_assert_eq!(weak_order, weak.iter().collect::<Vec<_>>());

        let normal_order: Vec<&String> = entries[split..].iter().map(|e| &e.subject).collect();
        let expected: Vec<&String> = subjects.iter().filter(|s| !weak.contains(s)).collect();
        prop_assert_eq!(normal_order, expected);
    }

    #[test]
    fn decoupled_weak_list_yields_one_entry_each(
        daily_hours in 0.0..8.0f64,
        weak in prop::collection::vec("[A-Z][a-z]{2,8}", 0..6),
    ) {
        let subjects: Vec<String> = Vec::new();
        let entries = allocate(daily_hours, &subjects, &weak);
        prop_assert_eq!(entries.len(), weak.len());
        prop_assert!(entries.iter().all(|e| e.is_weak));
    }

    #[test]
    fn rendered_weak_lines_precede_normal_lines(
        daily_hours in 1.0..8.0f64,
        (subjects, weak) in arb_subjects(),
    ) {
        let request = StudyRequest {
            class_level: "Class 10".into(),
            subjects,
            weak_subjects: weak,
            daily_hours,
            exam_days: 30,
        };
        let prompt = build_prompt(&request, &request.allocation());
        let lines: Vec<&str> = prompt
            .lines()
            .filter(|l| l.ends_with(" hours") || l.ends_with("(focus on weak areas)"))
            .collect();
        let first_normal = lines.iter().position(|l| !l.ends_with("(focus on weak areas)"));
        if let Some(idx) = first_normal {
            prop_assert!(lines[idx..].iter().all(|l| !l.ends_with("(focus on weak areas)")));
        }
    }
}
