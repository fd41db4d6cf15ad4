//! Menu Entity
//!
//! A titled, ordered collection of dishes and the plan for submitting it.

use serde::{Deserialize, Serialize};

use crate::dish::Dish;
use crate::identity::{DishId, DishKey, MenuId};

/// Outcome of a menu-level action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    TitleRequired,
    MenuSaved,
    MenuSubmitted,
}

impl MenuStatus {
    pub fn message_key(&self) -> &'static str {
        match self {
            MenuStatus::TitleRequired => "titleRequired",
            MenuStatus::MenuSaved => "menuSaved",
            MenuStatus::MenuSubmitted => "menuSubmitted",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MenuStatus::TitleRequired)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Server id, once the menu has been created
    #[serde(default)]
    pub id: Option<MenuId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Order is user-controlled and resubmitted as-is
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// One server call needed to persist a dish
#[derive(Debug, Clone, PartialEq)]
pub enum DishOp {
    /// The dish has no server id yet. `key` addresses it when confirming.
    Create { key: DishKey, dish: Dish },
    Update { id: DishId, dish: Dish },
}

impl DishOp {
    pub fn dish(&self) -> &Dish {
        match self {
            DishOp::Create { dish, .. } | DishOp::Update { dish, .. } => dish,
        }
    }
}

/// Ordered list of dish operations for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPlan {
    pub menu_id: Option<MenuId>,
    pub ops: Vec<DishOp>,
}

impl SubmissionPlan {
    pub fn creates(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DishOp::Create { .. })).count()
    }

    pub fn updates(&self) -> usize {
        self.ops.len() - self.creates()
    }
}

/// Build the submission plan for `menu`, in dish order.
///
/// Saved dishes are updated, everything else is created. Running this again
/// after the created dishes have been confirmed yields only updates.
pub fn plan_submission(menu: &Menu) -> Result<SubmissionPlan, MenuStatus> {
    if !menu.has_title() {
        return Err(MenuStatus::TitleRequired);
    }

    let ops = menu
        .dishes
        .iter()
        .map(|dish| match dish.saved_id() {
            Some(id) => DishOp::Update { id, dish: dish.clone() },
            None => DishOp::Create { key: dish.key(), dish: dish.clone() },
        })
        .collect();

    Ok(SubmissionPlan { menu_id: menu.id, ops })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{DishIdentity, TempId};
    use crate::reconcile::confirm_dish;

    fn menu_with(names: &[&str]) -> Menu {
        let mut menu = Menu::new("Spring tasting");
        menu.dishes = names.iter().map(|n| Dish::new(*n)).collect();
        menu
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut menu = menu_with(&["A"]);
        menu.title = "   ".to_string();
        assert_eq!(plan_submission(&menu), Err(MenuStatus::TitleRequired));
        assert!(MenuStatus::TitleRequired.is_error());
    }

    #[test]
    fn test_plan_follows_dish_order() {
        let mut menu = menu_with(&["A", "B", "C"]);
        menu.dishes[1].identity = DishIdentity::Saved(DishId(5));
        menu.dishes[2].identity = DishIdentity::Local(TempId(77));

        let plan = plan_submission(&menu).unwrap();
        assert_eq!(plan.ops.len(), 3);
        assert_eq!(plan.creates(), 2);
        assert_eq!(plan.updates(), 1);
        assert!(matches!(&plan.ops[0], DishOp::Create { key: DishKey::Name(n), .. } if n == "A"));
        assert!(matches!(&plan.ops[1], DishOp::Update { id: DishId(5), .. }));
        assert!(matches!(&plan.ops[2], DishOp::Create { key: DishKey::Local(TempId(77)), .. }));
        let order: Vec<&str> = plan.ops.iter().map(|op| op.dish().name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_resubmission_updates_instead_of_creating() {
        let mut menu = menu_with(&["A", "B"]);
        let plan = plan_submission(&menu).unwrap();

        let mut next_id = 100;
        for op in &plan.ops {
            if let DishOp::Create { key, .. } = op {
                menu.dishes = confirm_dish(&menu.dishes, key, DishId(next_id));
                next_id += 1;
            }
        }

        let retry = plan_submission(&menu).unwrap();
        assert_eq!(retry.creates(), 0);
        assert_eq!(retry.updates(), 2);
        assert_eq!(menu.dishes.len(), 2);
    }

    #[test]
    fn test_menu_wire_format() {
        let mut menu = Menu::new("Autumn");
        menu.id = Some(MenuId(3));
        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["title"], "Autumn");
        assert!(value["dishes"].as_array().unwrap().is_empty());
    }
}
