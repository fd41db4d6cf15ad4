//! Dish Entity
//!
//! A single menu item with taste, visual, texture and emotion attributes.

use serde::{Deserialize, Serialize};

use crate::identity::{DishId, DishIdentity, DishKey, TempId};

/// Course a dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Appetizer,
    FirstCourse,
    SecondCourse,
    Dessert,
    /// No course assigned
    #[default]
    None,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Appetizer,
        Section::FirstCourse,
        Section::SecondCourse,
        Section::Dessert,
        Section::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Appetizer => "appetizer",
            Section::FirstCourse => "firstCourse",
            Section::SecondCourse => "secondCourse",
            Section::Dessert => "dessert",
            Section::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "appetizer" => Section::Appetizer,
            "firstCourse" => Section::FirstCourse,
            "secondCourse" => Section::SecondCourse,
            "dessert" => Section::Dessert,
            _ => Section::None,
        }
    }
}

/// Intensity assigned when a taste toggle is switched on from `null`
pub const DEFAULT_INTENSITY: f64 = 0.0;

/// Every optional numeric taste attribute of a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TasteField {
    Sweet,
    Bitter,
    Sour,
    Salty,
    Umami,
    Piquant,
    Fat,
    Temperature,
}

impl TasteField {
    pub const BASIC: [TasteField; 5] = [
        TasteField::Sweet,
        TasteField::Bitter,
        TasteField::Sour,
        TasteField::Salty,
        TasteField::Umami,
    ];

    pub const OTHER: [TasteField; 3] = [TasteField::Piquant, TasteField::Fat, TasteField::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            TasteField::Sweet => "sweet",
            TasteField::Bitter => "bitter",
            TasteField::Sour => "sour",
            TasteField::Salty => "salty",
            TasteField::Umami => "umami",
            TasteField::Piquant => "piquant",
            TasteField::Fat => "fat",
            TasteField::Temperature => "temperature",
        }
    }
}

/// The five basic tastes. `None` means the toggle is off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicTaste {
    pub sweet: Option<f64>,
    pub bitter: Option<f64>,
    pub sour: Option<f64>,
    pub salty: Option<f64>,
    pub umami: Option<f64>,
}

/// Non-basic taste sensations. `None` means the toggle is off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherTaste {
    pub piquant: Option<f64>,
    pub fat: Option<f64>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vision {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub shapes: Vec<String>,
}

/// A dish as edited locally
///
/// Taste fields use `null` as the single source of truth for "disabled";
/// toggle state is always derived from it, never stored next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[serde(default)]
    pub identity: DishIdentity,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub section: Section,
    #[serde(default)]
    pub basic_taste: BasicTaste,
    #[serde(default)]
    pub other_taste: OtherTaste,
    #[serde(default)]
    pub vision: Vision,
    #[serde(default)]
    pub textures: Vec<String>,
    #[serde(default)]
    pub emotions: Vec<String>,
}

impl Dish {
    /// Create an unsaved dish with every attribute empty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            identity: DishIdentity::Draft,
            name: name.into(),
            description: None,
            section: Section::None,
            basic_taste: BasicTaste::default(),
            other_taste: OtherTaste::default(),
            vision: Vision::default(),
            textures: Vec::new(),
            emotions: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// True once the server has assigned an id
    pub fn is_saved(&self) -> bool {
        matches!(self.identity, DishIdentity::Saved(_))
    }

    pub fn saved_id(&self) -> Option<DishId> {
        match self.identity {
            DishIdentity::Saved(id) => Some(id),
            _ => None,
        }
    }

    pub fn temp_id(&self) -> Option<TempId> {
        match self.identity {
            DishIdentity::Local(temp) => Some(temp),
            _ => None,
        }
    }

    /// Whether the name is usable as a natural key
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The most specific key identifying this dish
    pub fn key(&self) -> DishKey {
        match self.identity {
            DishIdentity::Draft => DishKey::Name(self.name.clone()),
            DishIdentity::Local(temp) => DishKey::Local(temp),
            DishIdentity::Saved(id) => DishKey::Saved(id),
        }
    }

    /// Check whether `key` addresses this dish.
    ///
    /// Names only match unsaved dishes: once a dish has a server id it must be
    /// addressed by that id.
    pub fn matches(&self, key: &DishKey) -> bool {
        match key {
            DishKey::Name(name) => !self.is_saved() && self.name == *name,
            DishKey::Local(temp) => self.identity == DishIdentity::Local(*temp),
            DishKey::Saved(id) => self.identity == DishIdentity::Saved(*id),
        }
    }

    pub fn taste(&self, field: TasteField) -> Option<f64> {
        match field {
            TasteField::Sweet => self.basic_taste.sweet,
            TasteField::Bitter => self.basic_taste.bitter,
            TasteField::Sour => self.basic_taste.sour,
            TasteField::Salty => self.basic_taste.salty,
            TasteField::Umami => self.basic_taste.umami,
            TasteField::Piquant => self.other_taste.piquant,
            TasteField::Fat => self.other_taste.fat,
            TasteField::Temperature => self.other_taste.temperature,
        }
    }

    fn taste_slot(&mut self, field: TasteField) -> &mut Option<f64> {
        match field {
            TasteField::Sweet => &mut self.basic_taste.sweet,
            TasteField::Bitter => &mut self.basic_taste.bitter,
            TasteField::Sour => &mut self.basic_taste.sour,
            TasteField::Salty => &mut self.basic_taste.salty,
            TasteField::Umami => &mut self.basic_taste.umami,
            TasteField::Piquant => &mut self.other_taste.piquant,
            TasteField::Fat => &mut self.other_taste.fat,
            TasteField::Temperature => &mut self.other_taste.temperature,
        }
    }

    /// Toggle state reconstructed from null-ness
    pub fn is_taste_enabled(&self, field: TasteField) -> bool {
        self.taste(field).is_some()
    }

    /// Switch a taste toggle. Enabling keeps an existing value, or starts at
    /// [`DEFAULT_INTENSITY`]; disabling clears the value to `null`.
    pub fn set_taste_enabled(&mut self, field: TasteField, enabled: bool) {
        let slot = self.taste_slot(field);
        *slot = match (enabled, *slot) {
            (false, _) => None,
            (true, Some(value)) => Some(value),
            (true, None) => Some(DEFAULT_INTENSITY),
        };
    }

    /// Set an intensity. Has no effect while the toggle is off.
    pub fn set_taste(&mut self, field: TasteField, value: f64) {
        let slot = self.taste_slot(field);
        if slot.is_some() {
            *slot = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dish_is_draft() {
        let dish = Dish::new("Pasta");
        assert_eq!(dish.identity, DishIdentity::Draft);
        assert_eq!(dish.key(), DishKey::Name("Pasta".to_string()));
        assert!(!dish.is_saved());
        assert_eq!(dish.section, Section::None);
    }

    #[test]
    fn test_blank_name() {
        assert!(!Dish::new("   ").has_name());
        assert!(!Dish::new("").has_name());
        assert!(Dish::new(" Soup ").has_name());
    }

    #[test]
    fn test_name_key_ignores_saved_dishes() {
        let mut dish = Dish::new("Risotto");
        assert!(dish.matches(&DishKey::Name("Risotto".to_string())));

        dish.identity = DishIdentity::Saved(DishId(7));
        assert!(!dish.matches(&DishKey::Name("Risotto".to_string())));
        assert!(dish.matches(&DishKey::Saved(DishId(7))));
        assert!(!dish.matches(&DishKey::Saved(DishId(8))));
    }

    #[test]
    fn test_local_dish_matches_name_and_temp_id() {
        let mut dish = Dish::new("Tiramisu");
        dish.identity = DishIdentity::Local(TempId(1_700_000_000_000));
        assert!(dish.matches(&DishKey::Local(TempId(1_700_000_000_000))));
        assert!(dish.matches(&DishKey::Name("Tiramisu".to_string())));
        assert_eq!(dish.key(), DishKey::Local(TempId(1_700_000_000_000)));
    }

    #[test]
    fn test_taste_toggle() {
        let mut dish = Dish::new("Lemon tart");
        assert!(!dish.is_taste_enabled(TasteField::Sour));

        dish.set_taste(TasteField::Sour, 4.0);
        assert_eq!(dish.taste(TasteField::Sour), None);

        dish.set_taste_enabled(TasteField::Sour, true);
        assert_eq!(dish.taste(TasteField::Sour), Some(DEFAULT_INTENSITY));

        dish.set_taste(TasteField::Sour, 4.0);
        dish.set_taste_enabled(TasteField::Sour, true);
        assert_eq!(dish.taste(TasteField::Sour), Some(4.0));

        dish.set_taste_enabled(TasteField::Sour, false);
        assert_eq!(dish.taste(TasteField::Sour), None);
    }

    #[test]
    fn test_zero_intensity_survives_reload() {
        let mut dish = Dish::new("Gelato");
        dish.set_taste_enabled(TasteField::Temperature, true);
        dish.set_taste(TasteField::Temperature, 0.0);
        dish.set_taste_enabled(TasteField::Sweet, true);
        dish.set_taste(TasteField::Sweet, 8.5);

        let json = serde_json::to_string(&dish).unwrap();
        let reloaded: Dish = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded, dish);
        assert!(reloaded.is_taste_enabled(TasteField::Temperature));
        assert_eq!(reloaded.taste(TasteField::Temperature), Some(0.0));
        assert!(!reloaded.is_taste_enabled(TasteField::Bitter));
    }

    #[test]
    fn test_wire_format() {
        let mut dish = Dish::new("Bruschetta").with_section(Section::Appetizer);
        dish.basic_taste.salty = Some(3.0);
        let value = serde_json::to_value(&dish).unwrap();

        assert_eq!(value["section"], "appetizer");
        assert_eq!(value["basicTaste"]["salty"], 3.0);
        assert!(value["basicTaste"]["sweet"].is_null());
        assert!(value["otherTaste"]["piquant"].is_null());
    }

    #[test]
    fn test_section_strings() {
        for section in Section::ALL {
            assert_eq!(Section::from_str(section.as_str()), section);
        }
        assert_eq!(Section::from_str("brunch"), Section::None);
    }
}
