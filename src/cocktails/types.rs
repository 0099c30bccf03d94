//! Wire types for `TheCocktailDB` responses.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure slots in a recipe record.
pub const MAX_INGREDIENTS: usize = 15;

/// One numbered ingredient/measure pair of a recipe record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IngredientSlot {
    /// Ingredient name (`strIngredient{n}`).
    pub ingredient: Option<String>,
    /// Measurement (`strMeasure{n}`).
    pub measure: Option<String>,
}

/// A single drink as returned by the search endpoint.
///
/// The API sends a flat object with numbered `strIngredient{n}` and
/// `strMeasure{n}` keys; they are folded into a fixed slot list here.
/// Non-string values count as absent.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct RecipeRecord {
    /// Drink name (`strDrink`).
    pub name: Option<String>,
    /// Preparation instructions (`strInstructions`).
    pub instructions: Option<String>,
    /// Ingredient slots 1 through 15, in order.
    pub ingredients: [IngredientSlot; MAX_INGREDIENTS],
}

impl From<Map<String, Value>> for RecipeRecord {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        let ingredients = std::array::from_fn(|i| {
            let n = i + 1;
            IngredientSlot {
                ingredient: take(&format!("strIngredient{n}")),
                measure: take(&format!("strMeasure{n}")),
            }
        });

        Self {
            name: take("strDrink"),
            instructions: take("strInstructions"),
            ingredients,
        }
    }
}

/// A drink listed by the ingredient filter endpoint (names only).
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct DrinkSummary {
    /// Drink name.
    #[serde(rename = "strDrink")]
    pub name: String,
}

/// Response of `search.php?s=<name>`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecipeResponse {
    /// Matching drinks; empty when the API reports none.
    #[serde(default, deserialize_with = "lenient_drinks")]
    pub drinks: Vec<RecipeRecord>,
}

/// Response of `filter.php?i=<ingredient>`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IngredientResponse {
    /// Matching drinks; empty when the API reports none.
    #[serde(default, deserialize_with = "lenient_drinks")]
    pub drinks: Vec<DrinkSummary>,
}

/// Accept `null` and the `"None Found"` string as an empty list.
fn lenient_drinks<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            serde_json::from_value(Value::Array(items)).map_err(serde::de::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}
