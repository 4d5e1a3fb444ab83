use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::instructions::format_instructions;

/// The catalog spreads ingredients over numbered fields 1 through 20.
const INGREDIENT_SLOTS: usize = 20;

/// Full meal details as returned by lookup, search-by-name and random.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMeal")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub thumbnail_url: Option<String>,
    pub instructions: String,
    /// Ingredient name -> measure, in catalog order. Measures may be empty.
    pub ingredients: IndexMap<String, String>,
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            area: None,
            thumbnail_url: None,
            instructions: String::new(),
            ingredients: IndexMap::new(),
        }
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, measure: impl Into<String>) -> Self {
        self.ingredients.insert(name.into(), measure.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}

/// Wire shape of a meal: flat `str*` fields plus numbered ingredient slots.
#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: Option<String>,
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail_url: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let mut ingredients = IndexMap::new();
        for slot in 1..=INGREDIENT_SLOTS {
            let Some(ingredient) = text_field(&raw.rest, &format!("strIngredient{slot}")) else {
                continue;
            };
            let ingredient = ingredient.trim();
            if ingredient.is_empty() {
                continue;
            }
            let measure = text_field(&raw.rest, &format!("strMeasure{slot}"))
                .unwrap_or("")
                .trim();
            ingredients.insert(ingredient.to_string(), measure.to_string());
        }

        Meal {
            id: raw.id.unwrap_or_default().trim().to_string(),
            name: raw.name.unwrap_or_default().trim().to_string(),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            thumbnail_url: non_blank(raw.thumbnail_url),
            instructions: raw.instructions.unwrap_or_default(),
            ingredients,
        }
    }
}

fn text_field<'a>(fields: &'a HashMap<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(f, "Id: {}", self.id)?;

        if let Some(category) = &self.category {
            writeln!(f, "Category: {}", category)?;
        }
        if let Some(area) = &self.area {
            writeln!(f, "Area: {}", area)?;
        }
        if let Some(url) = &self.thumbnail_url {
            writeln!(f, "Thumbnail: {}", url)?;
        }

        writeln!(f, "\nIngredients:")?;
        if self.ingredients.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (ingredient, measure) in &self.ingredients {
            if measure.is_empty() {
                writeln!(f, "  - {}", ingredient)?;
            } else {
                writeln!(f, "  - {} : {}", ingredient, measure)?;
            }
        }

        let steps = format_instructions(&self.instructions);
        if !steps.is_empty() {
            writeln!(f, "\nInstructions:\n{}", steps)?;
        }

        Ok(())
    }
}
