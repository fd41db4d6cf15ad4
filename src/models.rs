//! Frontend Models
//!
//! Request and response shapes of the REST API. Editing state lives in the
//! `soundfood_core` types; these only cross the wire.

use serde::{Deserialize, Serialize};
use soundfood_core::{BasicTaste, Dish, DishId, MenuId, OtherTaste, Section, Vision};

/// Menu as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Dish as returned by the backend after create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: DishId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuPayload<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

/// Dish body for create/update. Disabled tastes are sent as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishPayload<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub section: Section,
    pub position: usize,
    pub basic_taste: &'a BasicTaste,
    pub other_taste: &'a OtherTaste,
    pub vision: &'a Vision,
    pub textures: &'a [String],
    pub emotions: &'a [String],
}

impl<'a> DishPayload<'a> {
    pub fn new(dish: &'a Dish, position: usize) -> Self {
        Self {
            name: dish.name.trim(),
            description: dish.description.as_deref().filter(|d| !d.trim().is_empty()),
            section: dish.section,
            position,
            basic_taste: &dish.basic_taste,
            other_taste: &dish.other_taste,
            vision: &dish.vision,
            textures: &dish.textures,
            emotions: &dish.emotions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundfood_core::TasteField;

    #[test]
    fn test_dish_payload_keeps_nulls() {
        let mut dish = Dish::new("  Carpaccio ").with_section(Section::Appetizer);
        dish.description = Some("   ".to_string());
        dish.set_taste_enabled(TasteField::Salty, true);
        dish.set_taste(TasteField::Salty, 2.5);

        let value = serde_json::to_value(DishPayload::new(&dish, 3)).unwrap();
        assert_eq!(value["name"], "Carpaccio");
        assert!(value["description"].is_null());
        assert_eq!(value["section"], "appetizer");
        assert_eq!(value["position"], 3);
        assert_eq!(value["basicTaste"]["salty"], 2.5);
        assert!(value["basicTaste"]["sweet"].is_null());
        assert!(value.get("identity").is_none());
    }

    #[test]
    fn test_records_parse() {
        let menu: MenuRecord = serde_json::from_str(r#"{"id":4,"title":"Winter"}"#).unwrap();
        assert_eq!(menu.id, MenuId(4));
        assert_eq!(menu.description, None);

        let dish: DishRecord = serde_json::from_str(r#"{"id":19,"name":"Polenta","section":"firstCourse"}"#).unwrap();
        assert_eq!(dish.id, DishId(19));
    }
}
