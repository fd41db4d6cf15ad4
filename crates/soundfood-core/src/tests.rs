//! Authoring Scenario Tests
//!
//! Walks the working dish list through a full authoring session: drafting,
//! editing, reordering, submitting, retrying and deleting.

use crate::*;

struct TickClock(i64);

impl Clock for TickClock {
    fn now_millis(&self) -> i64 {
        // same millisecond for every call
        self.0
    }
}

fn draft(name: &str, section: Section, ids: &mut TempIdGenerator<TickClock>) -> Dish {
    assign_temp_id(Dish::new(name).with_section(section), ids)
}

#[test]
fn test_authoring_session() {
    let mut ids = TempIdGenerator::with_clock(TickClock(1_700_000_000_000));
    let mut menu = Menu::new("Sound of the sea");

    // Three dishes created within the same millisecond
    for (name, section) in [
        ("Oysters", Section::Appetizer),
        ("Spaghetti alle vongole", Section::FirstCourse),
        ("Sorbet", Section::Dessert),
    ] {
        let dish = draft(name, section, &mut ids);
        let (next, status) = save_dish(&dish.key(), dish, &menu.dishes);
        assert_eq!(status, SaveStatus::DishSaved);
        menu.dishes = next;
    }
    let keys: Vec<DishKey> = menu.dishes.iter().map(Dish::key).collect();
    assert_eq!(keys.len(), 3);
    assert!(keys[0] != keys[1] && keys[1] != keys[2] && keys[0] != keys[2]);

    // Edit the pasta: enable umami and save under its temp id
    let mut pasta = menu.dishes[1].clone();
    pasta.set_taste_enabled(TasteField::Umami, true);
    pasta.set_taste(TasteField::Umami, 7.0);
    let (next, status) = save_dish(&keys[1], pasta, &menu.dishes);
    assert_eq!(status, SaveStatus::DishUpdated);
    menu.dishes = next;
    assert_eq!(menu.dishes[1].taste(TasteField::Umami), Some(7.0));

    // Drag the sorbet to the top
    menu.dishes = reorder_dish(&menu.dishes, &keys[2], 0);
    let order: Vec<&str> = menu.dishes.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(order, vec!["Sorbet", "Oysters", "Spaghetti alle vongole"]);

    // Submit: the server confirms the first two, then the connection drops
    let plan = plan_submission(&menu).unwrap();
    assert_eq!(plan.creates(), 3);
    for (op, server_id) in plan.ops.iter().zip([11, 12]) {
        if let DishOp::Create { key, .. } = op {
            menu.dishes = confirm_dish(&menu.dishes, key, DishId(server_id));
        }
    }

    // Retry only creates the missing one
    let retry = plan_submission(&menu).unwrap();
    assert_eq!(retry.creates(), 1);
    assert_eq!(retry.updates(), 2);
    for op in &retry.ops {
        if let DishOp::Create { key, .. } = op {
            menu.dishes = confirm_dish(&menu.dishes, key, DishId(13));
        }
    }
    // A late duplicate confirmation of an already-confirmed id changes nothing
    let before = menu.dishes.clone();
    menu.dishes = confirm_dish(&menu.dishes, &DishKey::name("Sorbet"), DishId(11));
    assert_eq!(menu.dishes, before);

    let ids: Vec<Option<DishId>> = menu.dishes.iter().map(Dish::saved_id).collect();
    assert_eq!(ids, vec![Some(DishId(11)), Some(DishId(12)), Some(DishId(13))]);

    // Grouped preview
    let sections = make_sections_list(&menu.dishes);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[&Section::Dessert][0].name, "Sorbet");

    // Delete the oysters by server id
    menu.dishes = delete_list_dish(&menu.dishes, &DishKey::Saved(DishId(12)));
    let order: Vec<&str> = menu.dishes.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(order, vec!["Sorbet", "Spaghetti alle vongole"]);
    assert_eq!(plan_submission(&menu).unwrap().creates(), 0);
}

#[test]
fn test_menu_json_reload_keeps_toggles() {
    let mut dish = Dish::new("Burrata").with_section(Section::Appetizer);
    dish.set_taste_enabled(TasteField::Fat, true);
    dish.set_taste(TasteField::Fat, 0.0);
    let mut menu = Menu::new("Puglia");
    menu.dishes.push(dish);

    let json = serde_json::to_string(&menu).unwrap();
    let reloaded: Menu = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, menu);
    let enabled: Vec<TasteField> = TasteField::BASIC
        .iter()
        .chain(TasteField::OTHER.iter())
        .copied()
        .filter(|f| reloaded.dishes[0].is_taste_enabled(*f))
        .collect();
    assert_eq!(enabled, vec![TasteField::Fat]);
}

#[test]
fn test_settings_and_session_share_a_store() {
    let store = MemoryStore::new();
    update_client_settings(ClientSettings::with_color_mode(ColorMode::Dark), &store).unwrap();
    save_session(&Session::new("tok", None), &store).unwrap();
    update_client_settings(ClientSettings::with_language(Language::It), &store).unwrap();
    clear_session(&store).unwrap();

    assert_eq!(
        load_client_settings(&store),
        ClientSettings {
            color_mode: Some(ColorMode::Dark),
            language: Some(Language::It),
        }
    );
    assert_eq!(load_session(&store), None);
}

#[test]
fn test_edit_saved_after_draft_submission_is_not_recreated() {
    let mut ids = TempIdGenerator::with_clock(TickClock(5));
    let mut menu = Menu::new("Trattoria");
    let pasta = draft("Pasta", Section::FirstCourse, &mut ids);
    let open_key = pasta.key();
    menu.dishes = save_dish(&open_key, pasta.clone(), &menu.dishes).0;

    // Draft submission confirms the pasta while its form is still open
    let mut confirmed = Vec::new();
    for op in plan_submission(&menu).unwrap().ops {
        if let DishOp::Create { key, .. } = op {
            menu.dishes = confirm_dish(&menu.dishes, &key, DishId(77));
            if let DishKey::Local(temp) = key {
                confirmed.push((temp, DishId(77)));
            }
        }
    }

    let mut edited = pasta;
    edited.set_taste_enabled(TasteField::Salty, true);
    let (key, edited) = rekey_confirmed(&open_key, edited, &confirmed);
    let (next, status) = save_dish(&key, edited, &menu.dishes);
    assert_eq!(status, SaveStatus::DishUpdated);
    menu.dishes = next;

    assert_eq!(menu.dishes.len(), 1);
    let plan = plan_submission(&menu).unwrap();
    assert_eq!(plan.creates(), 0);
    assert_eq!(plan.updates(), 1);
}
