//! session state, the explicit translation of the page view-model

use crate::store::model::cart::CartItem;
use crate::store::model::customer::Customer;
use crate::store::model::lesson::{Lesson, SortKey, SortOrder};

/// Everything a browsing session holds in memory. Mutations go through
/// the controller functions; derived views (visible catalog, totals)
/// are recomputed on demand.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    /// lessons fetched from the backend, the authoritative copy is remote
    pub lessons: Vec<Lesson>,
    /// selected lessons pending checkout, one entry per seat taken
    pub cart: Vec<CartItem>,
    /// checkout form fields
    pub customer: Customer,

    // search & sorting
    pub search_term: String,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,

    // view flags
    pub show_cart: bool,
    pub show_checkout_form: bool,
    pub show_info_modal: bool,
    /// id of the lesson shown in the detail view
    pub selected_lesson: Option<String>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lessons(&mut self, lessons: Vec<Lesson>) {
        self.lessons = lessons;
    }

    pub fn lesson_mut(&mut self, id: &str) -> Option<&mut Lesson> {
        self.lessons.iter_mut().find(|lesson| lesson.id == id)
    }

    /// Clear the cart, the form and the view flags once an order went
    /// through. The lesson list itself is reconciled by a refetch.
    pub fn reset_after_checkout(&mut self) {
        self.cart.clear();
        self.customer = Customer::default();
        self.show_cart = false;
        self.show_checkout_form = false;
        self.show_info_modal = false;
        self.selected_lesson = None;
    }
}
