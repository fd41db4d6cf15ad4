//! Edit Target Type
//!
//! Represents what the dish form is editing.

use soundfood_core::DishKey;

/// Edit target type - a new dish or an existing one
#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    New,
    /// Existing dish, addressed by its current key
    Dish(DishKey),
}
