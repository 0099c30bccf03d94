//! Plain-text rendering of a recipe record.

use crate::cocktails::types::RecipeRecord;
use crate::error::{BartenderError, BartenderResult};

/// Render a recipe as a name line, a bulleted ingredient list and the instructions.
///
/// # Errors
/// Returns [`BartenderError::MissingField`] when the drink name or the
/// instructions are absent.
pub fn format_recipe(record: &RecipeRecord) -> BartenderResult<String> {
    let name = record
        .name
        .as_deref()
        .ok_or(BartenderError::MissingField("strDrink"))?;
    let lines = ingredient_lines(record);
    let instructions = record
        .instructions
        .as_deref()
        .ok_or(BartenderError::MissingField("strInstructions"))?;

    let mut out = String::with_capacity(name.len() + instructions.len() + lines.len() * 24 + 32);
    out.push_str(name);
    out.push_str("\nIngredients:\n- ");
    out.push_str(&lines.join("\n- "));
    out.push_str("\n\nInstructions:\n");
    out.push_str(instructions);

    Ok(out)
}

/// Ingredient lines in slot order, `"{measure} {ingredient}"` or the bare ingredient.
#[must_use]
pub fn ingredient_lines(record: &RecipeRecord) -> Vec<String> {
    record
        .ingredients
        .iter()
        .filter_map(|slot| {
            let ingredient = non_blank(slot.ingredient.as_deref())?;
            Some(match non_blank(slot.measure.as_deref()) {
                Some(measure) => format!("{measure} {ingredient}"),
                None => ingredient.to_string(),
            })
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
