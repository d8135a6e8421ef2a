//! Property tests for the tracer, navigator and generator.

use proptest::prelude::*;
use splitscope::search::Outcome;
use splitscope::session::{ArrayGenerator, SessionLimits};
use splitscope::{Nav, SearchTracer, Status, StepNavigator};

fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..200).prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

/// ceil(log2(n + 1))
fn max_decisions(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

proptest! {
    #[test]
    fn prop_step_count_is_logarithmic(values in sorted_vec(), target in -1100i64..1100) {
        let trace = SearchTracer::run(&values, target);
        let bound = max_decisions(values.len());

        prop_assert!(trace.comparisons() <= bound);
        prop_assert!(trace.len() <= bound + 2);
    }

    #[test]
    fn prop_trace_shape(values in sorted_vec(), target in -1100i64..1100) {
        let trace = SearchTracer::run(&values, target);
        let steps = trace.steps();

        prop_assert_eq!(steps[0].status, Status::Searching);
        prop_assert_eq!(steps[0].mid, None);
        prop_assert!(steps.last().unwrap().status.is_terminal());
        prop_assert!(steps[..steps.len() - 1]
            .iter()
            .all(|s| s.status == Status::Searching));
    }

    #[test]
    fn prop_present_target_is_found(values in sorted_vec().prop_filter("non-empty", |v| !v.is_empty()),
                                    pick in any::<prop::sample::Index>()) {
        let target = values[pick.index(values.len())];
        let trace = SearchTracer::run(&values, target);

        let last = trace.final_step().unwrap();
        prop_assert_eq!(last.status, Status::Found);
        prop_assert_eq!(last.outcome, Outcome::Equal);
        let index = trace.found_index().unwrap();
        prop_assert_eq!(last.mid, Some(index));
        prop_assert_eq!(values[index], target);
    }

    #[test]
    fn prop_absent_target_is_not_found(values in sorted_vec(), target in -1100i64..1100) {
        prop_assume!(!values.contains(&target));
        let trace = SearchTracer::run(&values, target);

        prop_assert_eq!(trace.final_step().unwrap().status, Status::NotFound);
        prop_assert!(trace.steps().iter().all(|s| s.outcome != Outcome::Equal));
        prop_assert_eq!(trace.found_index(), None);
    }

    #[test]
    fn prop_navigation_round_trip(values in sorted_vec(), target in -1100i64..1100,
                                  moves in prop::collection::vec(any::<bool>(), 0..30)) {
        let trace = SearchTracer::run(&values, target);
        let last = trace.len() - 1;
        let mut nav = StepNavigator::with_trace(trace);

        for forward in moves {
            let before = nav.cursor();
            let result = if forward { nav.advance() } else { nav.retreat() };
            match result {
                Nav::Moved => {
                    let back = if forward { nav.retreat() } else { nav.advance() };
                    prop_assert_eq!(back, Nav::Moved);
                    prop_assert_eq!(nav.cursor(), before);
                    // redo so the walk keeps moving
                    if forward { nav.advance(); } else { nav.retreat(); }
                }
                Nav::AtEnd => prop_assert_eq!(before, last),
                Nav::AtStart => prop_assert_eq!(before, 0),
                Nav::Unbound => prop_assert!(false, "navigator is bound"),
            }
            prop_assert!(nav.cursor() <= last);
            prop_assert_eq!(nav.current().unwrap(), nav.current().unwrap());
        }
    }

    #[test]
    fn prop_generated_arrays_are_valid(seed in any::<u64>(), size in 10usize..=50,
                                       target in 1i64..=100, guarantee in any::<bool>()) {
        let limits = SessionLimits::default();
        let array = ArrayGenerator::seeded(seed)
            .generate(&limits, size, guarantee.then_some(target))
            .unwrap();

        prop_assert_eq!(array.len(), size);
        prop_assert!(array.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(array.as_slice().iter().all(|v| (1..=100).contains(v)));
        if guarantee {
            prop_assert!(array.contains(target));
        }
    }
}
