/// Dishes offered as quick picks, when the dataset has them.
pub const POPULAR_DISHES: [&str; 9] = [
    "Naan",
    "Chapati/Roti",
    "Masala dosa",
    "Idli",
    "Biryani",
    "Sambar",
    "Rajmah curry",
    "Aloo gobhi",
    "Hot tea (Garam Chai)",
];

pub fn popular_dishes(all_foods: &[String]) -> Vec<&'static str> {
    POPULAR_DISHES
        .into_iter()
        .filter(|dish| all_foods.iter().any(|food| food == dish))
        .collect()
}

/// Trimmed user input, or `None` when nothing is left.
pub fn normalize(input: &str) -> Option<&str> {
    Some(input.trim()).filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_keeps_order() {
        let foods: Vec<String> = ["Sambar", "Pizza", "Naan", "Idli"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(popular_dishes(&foods), ["Naan", "Idli", "Sambar"]);
    }

    #[test]
    fn test_popular_is_case_sensitive() {
        let foods = vec!["naan".to_string()];

        assert!(popular_dishes(&foods).is_empty());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Naan "), Some("Naan"));
        assert_eq!(normalize("Masala dosa"), Some("Masala dosa"));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }
}
