use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl MenuItem {
    /// Names may repeat, so list rows are keyed by name and position.
    pub fn list_key(&self, index: usize) -> String {
        format!("{}-{}", self.name, index)
    }

    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn display_category(&self) -> String {
        capitalize(&self.category)
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salad() -> MenuItem {
        MenuItem {
            name: "Greek salad".into(),
            price: 12.5,
            description: "Crispy lettuce".into(),
            image: "greekSalad.jpg".into(),
            category: "starters".into(),
        }
    }

    #[test]
    fn list_key_disambiguates_duplicate_names() {
        let item = salad();
        assert_eq!(item.list_key(0), "Greek salad-0");
        assert_ne!(item.list_key(0), item.list_key(1));
    }

    #[test]
    fn display_helpers() {
        let item = salad();
        assert_eq!(item.display_price(), "$12.50");
        assert_eq!(item.display_category(), "Starters");
        assert_eq!(capitalize(""), "");
    }
}
