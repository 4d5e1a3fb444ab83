use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::Meal;

/// Lightweight search hit from the ingredient filter: id, name and picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename(deserialize = "idMeal"), default, deserialize_with = "trimmed_or_empty")]
    pub id: String,
    #[serde(rename(deserialize = "strMeal"), default, deserialize_with = "trimmed_or_empty")]
    pub name: String,
    #[serde(rename(deserialize = "strMealThumb"), default)]
    pub thumbnail_url: Option<String>,
}

impl MealSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url: None,
        }
    }
}

impl From<Meal> for MealSummary {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            thumbnail_url: meal.thumbnail_url,
        }
    }
}

impl fmt::Display for MealSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={})", self.name, self.id)
    }
}

fn trimmed_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_summary() {
        let summary: MealSummary = serde_json::from_str(
            r#"{"strMeal": "Brown Stew Chicken", "strMealThumb": "https://x/y.jpg", "idMeal": " 52940 "}"#,
        )
        .unwrap();

        assert_eq!(summary.id, "52940");
        assert_eq!(summary.name, "Brown Stew Chicken");
        assert_eq!(summary.thumbnail_url.as_deref(), Some("https://x/y.jpg"));
    }

    #[test]
    fn test_decode_summary_with_nulls() {
        let summary: MealSummary =
            serde_json::from_str(r#"{"idMeal": "1", "strMeal": null}"#).unwrap();
        assert_eq!(summary.name, "");
        assert!(summary.thumbnail_url.is_none());
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(
            MealSummary::new("52940", "Brown Stew Chicken").to_string(),
            "Brown Stew Chicken (id=52940)"
        );
    }

    #[test]
    fn test_summary_from_meal() {
        let summary = MealSummary::from(Meal::new("52772", "Teriyaki Chicken Casserole"));
        assert_eq!(summary.id, "52772");
        assert_eq!(summary.name, "Teriyaki Chicken Casserole");
    }
}
