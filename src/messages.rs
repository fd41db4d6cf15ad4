//! User-facing Messages
//!
//! Feedback strings keyed by the status keys the core reports.

use soundfood_core::{Language, Section};

pub fn message(key: &str, language: Language) -> &'static str {
    match (key, language) {
        ("nameRequired", Language::En) => "The dish needs a name",
        ("nameRequired", Language::It) => "Il piatto deve avere un nome",
        ("dishSaved", Language::En) => "Dish added",
        ("dishSaved", Language::It) => "Piatto aggiunto",
        ("dishUpdated", Language::En) => "Dish updated",
        ("dishUpdated", Language::It) => "Piatto aggiornato",
        ("dishDeleted", Language::En) => "Dish removed",
        ("dishDeleted", Language::It) => "Piatto rimosso",
        ("titleRequired", Language::En) => "The menu needs a title",
        ("titleRequired", Language::It) => "Il menu deve avere un titolo",
        ("menuSaved", Language::En) => "Draft saved",
        ("menuSaved", Language::It) => "Bozza salvata",
        ("menuSubmitted", Language::En) => "Menu submitted",
        ("menuSubmitted", Language::It) => "Menu inviato",
        ("loginFailed", Language::En) => "Wrong username or password",
        ("loginFailed", Language::It) => "Nome utente o password errati",
        ("requestFailed", Language::En) => "The server could not be reached, try again",
        ("requestFailed", Language::It) => "Server non raggiungibile, riprova",
        ("confirmDelete", Language::En) => "Delete?",
        ("confirmDelete", Language::It) => "Eliminare?",
        (_, Language::En) => "Something went wrong",
        (_, Language::It) => "Qualcosa è andato storto",
    }
}

pub fn section_label(section: Section, language: Language) -> &'static str {
    match (section, language) {
        (Section::Appetizer, Language::En) => "Appetizers",
        (Section::Appetizer, Language::It) => "Antipasti",
        (Section::FirstCourse, Language::En) => "First courses",
        (Section::FirstCourse, Language::It) => "Primi",
        (Section::SecondCourse, Language::En) => "Second courses",
        (Section::SecondCourse, Language::It) => "Secondi",
        (Section::Dessert, Language::En) => "Desserts",
        (Section::Dessert, Language::It) => "Dolci",
        (Section::None, Language::En) => "Other",
        (Section::None, Language::It) => "Altro",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundfood_core::SaveStatus;

    #[test]
    fn test_status_keys_have_messages() {
        for status in [SaveStatus::NameRequired, SaveStatus::DishSaved, SaveStatus::DishUpdated] {
            for language in Language::ALL {
                assert_ne!(message(status.message_key(), language), message("unknown", language));
            }
        }
    }

    #[test]
    fn test_ui_keys_have_messages() {
        for key in ["requestFailed", "confirmDelete", "dishDeleted", "loginFailed"] {
            for language in Language::ALL {
                assert_ne!(message(key, language), message("unknown", language), "{}", key);
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(message("serverExploded", Language::En), "Something went wrong");
    }
}
