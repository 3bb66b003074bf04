//! Choosing among candidate itineraries.
//!
//! Transit options are ranked by the user's optimization criterion. Car,
//! bicycle and walk trips take the fastest leg.

use crate::domain::{ItineraryLeg, OptimizationCriterion};

use super::options::ItineraryOption;

/// The value an option is ranked by under `criterion`; lower is better.
///
/// Durations compare in milliseconds.
pub fn criterion_key(option: &ItineraryOption, criterion: OptimizationCriterion) -> i64 {
    match criterion {
        OptimizationCriterion::TotalTime => option.total_time().num_milliseconds(),
        OptimizationCriterion::Transfers => option.num_transfers(),
        OptimizationCriterion::WaitTime => option.wait_time().num_milliseconds(),
        OptimizationCriterion::WalkingTime => option.walking_time().num_milliseconds(),
    }
}

/// The best option under `criterion`, or `None` if there are none.
///
/// Ties go to the earliest option in `options`.
pub fn select_option(
    options: &[ItineraryOption],
    criterion: OptimizationCriterion,
) -> Option<&ItineraryOption> {
    options
        .iter()
        .min_by_key(|option| criterion_key(option, criterion))
}

/// The leg with the shortest travel time; ties go to the earliest leg.
pub fn fastest_leg(legs: &[ItineraryLeg]) -> Option<&ItineraryLeg> {
    legs.iter().min_by_key(|leg| leg.travel_time())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coordinate, OptionId};
    use chrono::Duration;
    use proptest::prelude::*;

    fn criterion_strategy() -> impl Strategy<Value = OptimizationCriterion> {
        prop::sample::select(OptimizationCriterion::ALL.to_vec())
    }

    /// Options with 1-6 legs of random travel and wait times.
    fn options_strategy() -> impl Strategy<Value = Vec<ItineraryOption>> {
        prop::collection::vec(
            prop::collection::vec((0i64..3600, 0i64..900, 0.0f64..5000.0), 1..6),
            0..8,
        )
        .prop_map(|options| {
            options
                .into_iter()
                .enumerate()
                .map(|(id, legs)| {
                    let id = id as u32;
                    let legs = legs
                        .into_iter()
                        .enumerate()
                        .map(|(s, (travel, wait, dist))| {
                            ItineraryLeg::new(
                                OptionId(id),
                                s as u32,
                                Duration::seconds(travel),
                                Duration::seconds(wait),
                                dist,
                                vec![Coordinate::new(36.0, -78.9).unwrap()],
                            )
                            .unwrap()
                        })
                        .collect();
                    ItineraryOption::new(OptionId(id), legs).unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// The selected option is never beaten by another under the same criterion.
        #[test]
        fn selected_is_minimal(options in options_strategy(), criterion in criterion_strategy()) {
            match select_option(&options, criterion) {
                None => prop_assert!(options.is_empty()),
                Some(best) => {
                    let best_key = criterion_key(best, criterion);
                    for other in &options {
                        prop_assert!(best_key <= criterion_key(other, criterion));
                    }
                }
            }
        }
    }
}
