//! search filtering and sorting over the in-memory catalog

use crate::store::controller::error::StoreError;
use crate::store::model::lesson::{Lesson, SortKey, SortOrder};
use crate::store::state::StoreState;
use crate::store::util::price;
use std::cmp::Ordering;

/// The catalog as rendered: lessons matching the search term, sorted
/// when a sort key is selected. Row numbers shown by the shell are
/// indexes into this list.
pub(crate) fn visible_lessons(state: &StoreState) -> Vec<&Lesson> {
    let term = state.search_term.to_lowercase();
    let mut result: Vec<&Lesson> = state
        .lessons
        .iter()
        .filter(|lesson| matches_term(lesson, &term))
        .collect();

    if let Some(key) = state.sort_by {
        result.sort_by(|a, b| match state.sort_order {
            SortOrder::Asc => compare(a, b, key),
            SortOrder::Desc => compare(a, b, key).reverse(),
        });
    }
    result
}

fn matches_term(lesson: &Lesson, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    lesson.subject.to_lowercase().contains(term)
        || lesson.location.to_lowercase().contains(term)
        || lesson
            .features
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(term)
        || lesson.price.to_lowercase().contains(term)
}

// price and seats compare numerically, text keys case-folded
fn compare(a: &Lesson, b: &Lesson, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => price::numeric_value(&a.price).cmp(&price::numeric_value(&b.price)),
        SortKey::Seats => a.seats.cmp(&b.seats),
        SortKey::Subject => a.subject.to_lowercase().cmp(&b.subject.to_lowercase()),
        SortKey::Location => a.location.to_lowercase().cmp(&b.location.to_lowercase()),
    }
}

/// Select the attribute to sort on, keeping the current order.
pub(crate) fn set_sort(state: &mut StoreState, key: SortKey) {
    state.sort_by = Some(key);
}

/// Flip between ascending and descending. Rejected until a sort key has
/// been selected.
pub(crate) fn toggle_sort(state: &mut StoreState) -> Result<SortOrder, StoreError> {
    if state.sort_by.is_none() {
        return Err(StoreError::NoSortSelected);
    }
    state.sort_order = state.sort_order.flipped();
    Ok(state.sort_order)
}

#[cfg(test)]
mod test {
    use super::*;

    fn lesson(subject: &str, location: &str, price: &str, seats: u32, features: Option<&str>) -> Lesson {
        Lesson {
            id: format!("{}-{}", subject, location),
            subject: subject.to_string(),
            location: location.to_string(),
            price: price.to_string(),
            seats,
            features: features.map(str::to_string),
            image: None,
        }
    }

    fn state_with(lessons: Vec<Lesson>) -> StoreState {
        let mut state = StoreState::new();
        state.set_lessons(lessons);
        state
    }

    #[test]
    fn empty_term_shows_everything() {
        let state = state_with(vec![
            lesson("Math", "Dubai", "AED 100", 5, None),
            lesson("Art", "Sharjah", "AED 80", 3, None),
        ]);
        assert_eq!(visible_lessons(&state).len(), 2);
    }

    #[test]
    fn filter_matches_all_text_fields_case_insensitively() {
        let mut state = state_with(vec![
            lesson("Math", "Dubai", "AED 100", 5, Some("Whiteboard")),
            lesson("Art", "Sharjah", "AED 80", 3, None),
            lesson("Chess", "Abu Dhabi", "AED 120", 1, Some("Boards provided")),
        ]);

        state.search_term = "MATH".to_string();
        assert_eq!(visible_lessons(&state).len(), 1);

        state.search_term = "sharjah".to_string();
        assert_eq!(visible_lessons(&state)[0].subject, "Art");

        state.search_term = "board".to_string();
        assert_eq!(visible_lessons(&state).len(), 2);

        // the raw price string is searchable too
        state.search_term = "aed 12".to_string();
        assert_eq!(visible_lessons(&state)[0].subject, "Chess");

        state.search_term = "swimming".to_string();
        assert!(visible_lessons(&state).is_empty());
    }

    #[test]
    fn price_sorts_numerically_not_lexically() {
        let mut state = state_with(vec![
            lesson("A", "X", "AED 100", 1, None),
            lesson("B", "Y", "AED 90", 1, None),
            lesson("C", "Z", "AED 1000", 1, None),
        ]);
        set_sort(&mut state, SortKey::Price);

        let subjects: Vec<&str> = visible_lessons(&state)
            .iter()
            .map(|l| l.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["B", "A", "C"]);
    }

    #[test]
    fn seats_sort_descending_after_toggle() {
        let mut state = state_with(vec![
            lesson("A", "X", "AED 10", 2, None),
            lesson("B", "Y", "AED 10", 7, None),
            lesson("C", "Z", "AED 10", 4, None),
        ]);
        set_sort(&mut state, SortKey::Seats);
        toggle_sort(&mut state).unwrap();

        let seats: Vec<u32> = visible_lessons(&state).iter().map(|l| l.seats).collect();
        assert_eq!(seats, vec![7, 4, 2]);
    }

    #[test]
    fn subject_sort_is_case_folded() {
        let mut state = state_with(vec![
            lesson("math", "X", "AED 10", 1, None),
            lesson("Art", "Y", "AED 10", 1, None),
            lesson("chess", "Z", "AED 10", 1, None),
        ]);
        set_sort(&mut state, SortKey::Subject);

        let subjects: Vec<&str> = visible_lessons(&state)
            .iter()
            .map(|l| l.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["Art", "chess", "math"]);
    }

    #[test]
    fn toggle_requires_a_sort_key() {
        let mut state = state_with(vec![]);
        assert!(matches!(
            toggle_sort(&mut state),
            Err(StoreError::NoSortSelected)
        ));

        set_sort(&mut state, SortKey::Price);
        assert!(matches!(toggle_sort(&mut state), Ok(SortOrder::Desc)));
        assert!(matches!(toggle_sort(&mut state), Ok(SortOrder::Asc)));
    }

    #[test]
    fn filtering_and_sorting_compose() {
        let mut state = state_with(vec![
            lesson("Math", "Dubai", "AED 100", 5, None),
            lesson("Math", "Sharjah", "AED 60", 2, None),
            lesson("Art", "Dubai", "AED 80", 9, None),
        ]);
        state.search_term = "math".to_string();
        set_sort(&mut state, SortKey::Price);

        let locations: Vec<&str> = visible_lessons(&state)
            .iter()
            .map(|l| l.location.as_str())
            .collect();
        assert_eq!(locations, vec!["Sharjah", "Dubai"]);
    }
}
