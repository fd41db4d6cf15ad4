//! Dish Reconciliation
//!
//! Pure list operations over a menu's working dish list. Every function
//! borrows the current list and returns a new one; callers store the result
//! as the new authoritative state.

use std::collections::BTreeMap;

use crate::dish::{Dish, Section};
use crate::identity::{Clock, DishId, DishIdentity, DishKey, TempId, TempIdGenerator};

/// Outcome of [`save_dish`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Rejected: the dish has no name
    NameRequired,
    /// Appended as a new entry
    DishSaved,
    /// Replaced an existing entry in place
    DishUpdated,
}

impl SaveStatus {
    /// Message key for the UI's translation layer
    pub fn message_key(&self) -> &'static str {
        match self {
            SaveStatus::NameRequired => "nameRequired",
            SaveStatus::DishSaved => "dishSaved",
            SaveStatus::DishUpdated => "dishUpdated",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SaveStatus::NameRequired)
    }
}

/// Insert or update `dish` under `key`.
///
/// A blank name leaves the list untouched and reports
/// [`SaveStatus::NameRequired`]. If several entries match `key`, the first is
/// replaced.
pub fn save_dish(key: &DishKey, dish: Dish, list: &[Dish]) -> (Vec<Dish>, SaveStatus) {
    if !dish.has_name() {
        log::debug!("rejecting dish save for {}: name required", key);
        return (list.to_vec(), SaveStatus::NameRequired);
    }

    match list.iter().position(|d| d.matches(key)) {
        Some(index) => {
            let mut next = list.to_vec();
            next[index] = dish;
            (next, SaveStatus::DishUpdated)
        }
        None => {
            let mut next = Vec::with_capacity(list.len() + 1);
            next.extend_from_slice(list);
            next.push(dish);
            (next, SaveStatus::DishSaved)
        }
    }
}

/// Replace every entry matching `key` with `element`. No-op when absent.
pub fn update_dish_list(list: &[Dish], key: &DishKey, element: &Dish) -> Vec<Dish> {
    list.iter()
        .map(|d| if d.matches(key) { element.clone() } else { d.clone() })
        .collect()
}

/// Remove entries matching `key`, keeping the order of the rest.
pub fn delete_list_dish(list: &[Dish], key: &DishKey) -> Vec<Dish> {
    list.iter().filter(|d| !d.matches(key)).cloned().collect()
}

/// Group dishes by course.
///
/// Empty sections are absent from the map. Iteration follows course order.
pub fn make_sections_list(dishes: &[Dish]) -> BTreeMap<Section, Vec<Dish>> {
    let mut sections: BTreeMap<Section, Vec<Dish>> = BTreeMap::new();
    for dish in dishes {
        sections.entry(dish.section).or_default().push(dish.clone());
    }
    sections
}

/// Move the dish matching `key` to `to_index`.
///
/// The index refers to the list without the moved dish and is clamped to its
/// end. No-op when absent.
pub fn reorder_dish(list: &[Dish], key: &DishKey, to_index: usize) -> Vec<Dish> {
    let mut next = list.to_vec();
    let Some(from) = next.iter().position(|d| d.matches(key)) else {
        return next;
    };
    let dish = next.remove(from);
    let to = to_index.min(next.len());
    next.insert(to, dish);
    next
}

/// Give a draft dish a temporary list key. Other identities pass through.
pub fn assign_temp_id<C: Clock>(mut dish: Dish, ids: &mut TempIdGenerator<C>) -> Dish {
    if dish.identity == DishIdentity::Draft {
        dish.identity = DishIdentity::Local(ids.next_id());
    }
    dish
}

/// Record the server id of the unsaved dish matching `key`, in place.
///
/// Retrying with an id that is already present in the list changes nothing,
/// so a re-submitted dish is never duplicated.
pub fn confirm_dish(list: &[Dish], key: &DishKey, server_id: DishId) -> Vec<Dish> {
    let mut next = list.to_vec();
    if next.iter().any(|d| d.saved_id() == Some(server_id)) {
        return next;
    }
    if let Some(dish) = next.iter_mut().find(|d| !d.is_saved() && d.matches(key)) {
        log::debug!("dish {} confirmed as {}", key, server_id);
        dish.identity = DishIdentity::Saved(server_id);
    }
    next
}

/// Carry an edit that started under a temporary key over to its server id.
///
/// `confirmed` pairs each temporary id with the server id it was confirmed
/// as. A dish opened as `Local(t)` and saved after `t` was confirmed is saved
/// as `Saved(id)`, replacing the confirmed entry instead of appending a copy.
pub fn rekey_confirmed(key: &DishKey, mut dish: Dish, confirmed: &[(TempId, DishId)]) -> (DishKey, Dish) {
    let DishKey::Local(temp) = key else {
        return (key.clone(), dish);
    };
    match confirmed.iter().find(|(t, _)| t == temp) {
        Some(&(_, id)) => {
            dish.identity = DishIdentity::Saved(id);
            (DishKey::Saved(id), dish)
        }
        None => (key.clone(), dish),
    }
}
