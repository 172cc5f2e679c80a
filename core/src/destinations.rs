//! Destination ordering and trip progress
//!
//! Display order is priority first (1 before 5), then entry order. The sort is
//! stable, so destinations sharing both keys keep the order they were given in.

use waypoint_types::Destination;

use crate::taxonomy::Priority;

/// Destinations in display order. Returns the input records themselves,
/// reordered; nothing is copied or mutated.
pub fn order(destinations: &[Destination]) -> Vec<&Destination> {
    let mut ordered: Vec<&Destination> = destinations.iter().collect();
    ordered.sort_by_key(|d| (d.priority_level, d.order_index));
    ordered
}

pub fn completed_count(destinations: &[Destination]) -> usize {
    destinations.iter().filter(|d| d.is_completed).count()
}

/// Percentage of destinations marked completed, rounded half up.
/// An empty list is 0% complete.
pub fn progress(destinations: &[Destination]) -> u8 {
    progress_of(completed_count(destinations), destinations.len())
}

/// Rounded-half-up percentage of `completed` out of `total` (0 when `total` is 0).
pub fn progress_of(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // round(100 * c / t) == floor((200 * c + t) / (2 * t))
    ((200 * completed + total) / (2 * total)) as u8
}

pub fn priority_of(destination: &Destination) -> Priority {
    Priority::from_level(destination.priority_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_destination(id: i64, priority_level: i32, order_index: i32) -> Destination {
        Destination {
            id,
            trip_id: 1,
            order_index,
            priority_level,
            is_completed: false,
            name: format!("Stop {id}"),
            description: None,
            destination_type: None,
            address: None,
            latitude: None,
            longitude: None,
            visit_date: None,
            visit_time: None,
            price_range: None,
        }
    }

    fn with_completion(flags: &[bool]) -> Vec<Destination> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &done)| Destination {
                is_completed: done,
                ..make_destination(i as i64 + 1, 3, i as i32 + 1)
            })
            .collect()
    }

    fn ids(ordered: &[&Destination]) -> Vec<i64> {
        ordered.iter().map(|d| d.id).collect()
    }

    #[test]
    fn orders_by_priority_then_entry_order() {
        let destinations = vec![
            make_destination(1, 3, 1),
            make_destination(2, 1, 2),
            make_destination(3, 1, 1),
        ];
        assert_eq!(ids(&order(&destinations)), vec![3, 2, 1]);
    }

    #[test]
    fn priority_beats_order_index() {
        let destinations = vec![
            make_destination(1, 5, 1),
            make_destination(2, 4, 2),
            make_destination(3, 2, 30),
            make_destination(4, 1, 40),
        ];
        assert_eq!(ids(&order(&destinations)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let destinations = vec![
            make_destination(10, 2, 1),
            make_destination(11, 2, 1),
            make_destination(12, 1, 1),
            make_destination(13, 2, 1),
        ];
        assert_eq!(ids(&order(&destinations)), vec![12, 10, 11, 13]);
    }

    #[test]
    fn order_returns_the_input_records() {
        let destinations = vec![make_destination(1, 2, 1), make_destination(2, 1, 1)];
        let ordered = order(&destinations);
        assert!(std::ptr::eq(ordered[0], &destinations[1]));
        assert!(std::ptr::eq(ordered[1], &destinations[0]));
        assert_eq!(order(&destinations), ordered);
    }

    #[test]
    fn order_of_empty_list_is_empty() {
        assert!(order(&[]).is_empty());
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        assert_eq!(progress(&with_completion(&[true, false, true])), 67);
        assert_eq!(progress(&with_completion(&[true, false, false])), 33);
        assert_eq!(progress(&with_completion(&[true, false])), 50);
        assert_eq!(progress(&with_completion(&[true, true])), 100);
        assert_eq!(progress(&with_completion(&[false, false])), 0);
    }

    #[test]
    fn progress_rounds_halves_up() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        let mut flags = [false; 8];
        flags[0] = true;
        assert_eq!(progress(&with_completion(&flags)), 13);
        flags[1] = true;
        flags[2] = true;
        assert_eq!(progress(&with_completion(&flags)), 38);
    }

    #[test]
    fn progress_of_empty_is_zero() {
        assert_eq!(progress(&[]), 0);
        assert_eq!(progress_of(0, 0), 0);
    }

    #[test]
    fn progress_never_drops_when_completing_more() {
        for total in 1..=40 {
            let mut last = 0;
            for completed in 0..=total {
                let pct = progress_of(completed, total);
                assert!(pct >= last, "{completed}/{total}");
                assert!(pct <= 100);
                last = pct;
            }
            assert_eq!(last, 100);
        }
    }

    #[test]
    fn adding_completed_destination_never_lowers_progress() {
        let mut destinations = with_completion(&[false, true, false]);
        let before = progress(&destinations);
        destinations.push(Destination {
            is_completed: true,
            ..make_destination(99, 3, 4)
        });
        assert!(progress(&destinations) >= before);
    }

    #[test]
    fn priority_of_coerces_unknown_levels() {
        assert_eq!(priority_of(&make_destination(1, 1, 1)), Priority::MustSee);
        assert_eq!(priority_of(&make_destination(1, 0, 1)), Priority::Medium);
        assert_eq!(priority_of(&make_destination(1, 7, 1)).label(), "Medium Priority");
    }
}
