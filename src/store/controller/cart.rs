//! cart mutations with client-local seat accounting

use crate::store::controller::error::StoreError;
use crate::store::model::cart::CartItem;
use crate::store::state::StoreState;
use crate::store::util::price;

/// Add a lesson to the cart, taking one of its remaining seats and
/// opening the cart panel.
pub(crate) fn add_to_cart(state: &mut StoreState, lesson_id: &str) -> Result<(), StoreError> {
    let lesson = state
        .lesson_mut(lesson_id)
        .ok_or(StoreError::LessonNotFound)?;
    if lesson.seats == 0 {
        return Err(StoreError::SeatsExhausted);
    }

    let item = CartItem::from(&*lesson);
    lesson.seats -= 1;
    state.cart.push(item);
    state.show_cart = true;
    Ok(())
}

/// Remove the cart entry at `index`, giving its seat back when the
/// lesson is still in the catalog. The cart panel closes once the last
/// entry is gone.
pub(crate) fn remove_from_cart(state: &mut StoreState, index: usize) -> Result<CartItem, StoreError> {
    if index >= state.cart.len() {
        return Err(StoreError::NoSuchCartEntry);
    }

    let item = state.cart.remove(index);
    // a refetch may have dropped the lesson in the meantime, the seat
    // is then simply not restored
    if let Some(lesson) = state.lesson_mut(&item.lesson_id) {
        lesson.seats += 1;
    }
    if state.cart.is_empty() {
        state.show_cart = false;
    }
    Ok(item)
}

/// Show or hide the cart panel.
pub(crate) fn toggle_cart(state: &mut StoreState) {
    state.show_cart = !state.show_cart;
}

/// Cart total in currency units, summed over the numeric part of each
/// entry's price string.
pub(crate) fn total_price(state: &StoreState) -> u32 {
    state
        .cart
        .iter()
        .map(|item| price::numeric_value(&item.price))
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::model::lesson::Lesson;

    fn lesson(id: &str, price: &str, seats: u32) -> Lesson {
        Lesson {
            id: id.to_string(),
            subject: "Math".to_string(),
            location: "Dubai".to_string(),
            price: price.to_string(),
            seats,
            features: None,
            image: None,
        }
    }

    fn state_with(lessons: Vec<Lesson>) -> StoreState {
        let mut state = StoreState::new();
        state.set_lessons(lessons);
        state
    }

    #[test]
    fn add_takes_a_seat_and_opens_the_panel() {
        let mut state = state_with(vec![lesson("a", "AED 100", 2)]);

        add_to_cart(&mut state, "a").unwrap();

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].lesson_id, "a");
        assert_eq!(state.lessons[0].seats, 1);
        assert!(state.show_cart);
    }

    #[test]
    fn add_is_blocked_once_seats_run_out() {
        let mut state = state_with(vec![lesson("a", "AED 100", 1)]);

        add_to_cart(&mut state, "a").unwrap();
        assert!(matches!(
            add_to_cart(&mut state, "a"),
            Err(StoreError::SeatsExhausted)
        ));

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.lessons[0].seats, 0);
    }

    #[test]
    fn add_rejects_unknown_lessons() {
        let mut state = state_with(vec![]);
        assert!(matches!(
            add_to_cart(&mut state, "ghost"),
            Err(StoreError::LessonNotFound)
        ));
        assert!(!state.show_cart);
    }

    #[test]
    fn remove_restores_the_seat_and_closes_an_empty_panel() {
        let mut state = state_with(vec![lesson("a", "AED 100", 1)]);
        add_to_cart(&mut state, "a").unwrap();

        let removed = remove_from_cart(&mut state, 0).unwrap();

        assert_eq!(removed.lesson_id, "a");
        assert_eq!(state.lessons[0].seats, 1);
        assert!(state.cart.is_empty());
        assert!(!state.show_cart);
    }

    #[test]
    fn remove_keeps_the_panel_open_while_entries_remain() {
        let mut state = state_with(vec![lesson("a", "AED 100", 5)]);
        add_to_cart(&mut state, "a").unwrap();
        add_to_cart(&mut state, "a").unwrap();

        remove_from_cart(&mut state, 1).unwrap();

        assert_eq!(state.cart.len(), 1);
        assert!(state.show_cart);
        assert_eq!(state.lessons[0].seats, 4);
    }

    #[test]
    fn remove_survives_a_lesson_dropped_by_a_refetch() {
        let mut state = state_with(vec![lesson("a", "AED 100", 1)]);
        add_to_cart(&mut state, "a").unwrap();
        state.set_lessons(vec![]);

        assert!(remove_from_cart(&mut state, 0).is_ok());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn remove_rejects_bad_indexes() {
        let mut state = state_with(vec![]);
        assert!(matches!(
            remove_from_cart(&mut state, 0),
            Err(StoreError::NoSuchCartEntry)
        ));
    }

    #[test]
    fn total_sums_numeric_price_parts() {
        let mut state = state_with(vec![lesson("a", "AED 100", 5), lesson("b", "AED 45", 5)]);
        add_to_cart(&mut state, "a").unwrap();
        add_to_cart(&mut state, "a").unwrap();
        add_to_cart(&mut state, "b").unwrap();

        assert_eq!(total_price(&state), 245);
    }
}
