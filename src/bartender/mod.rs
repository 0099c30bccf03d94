//! Drink question answering.
//!
//! Ties the pieces together for one question:
//! - ingredient questions list matching drink names
//! - drink questions are parsed, looked up, formatted and explained by the chat model

pub mod prompt;
pub mod query;

pub use prompt::compose_messages;
pub use query::QueryParser;

use std::sync::Arc;

use crate::cocktails::{CocktailDbClient, RecipeSource, format_recipe};
use crate::config::BartenderConfig;
use crate::error::BartenderResult;
use crate::llm::{ChatCompleter, OpenAiChatClient};

/// Outcome of a drink question.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Answer {
    /// The question was resolved; carries the reply text.
    Found(String),
    /// Nothing matched; carries a user-facing explanation.
    NotFound(String),
}

impl Answer {
    /// Reply text, whichever the outcome.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Found(text) | Self::NotFound(text) => text,
        }
    }
}

/// Answers drink questions from a recipe source and a chat model.
pub struct Bartender {
    parser: QueryParser,
    recipes: Arc<dyn RecipeSource>,
    chat: Arc<dyn ChatCompleter>,
}

impl Bartender {
    /// Create a bartender over the given recipe source and chat model.
    ///
    /// # Errors
    /// Returns an error if the query parser cannot be built.
    pub fn new(
        recipes: Arc<dyn RecipeSource>,
        chat: Arc<dyn ChatCompleter>,
    ) -> BartenderResult<Self> {
        Ok(Self {
            parser: QueryParser::new()?,
            recipes,
            chat,
        })
    }

    /// Create a bartender backed by `TheCocktailDB` and an `OpenAI`-compatible API.
    ///
    /// # Errors
    /// Returns an error if a client cannot be built.
    pub fn from_config(config: &BartenderConfig) -> BartenderResult<Self> {
        let recipes = CocktailDbClient::new(config.cocktaildb_base_url.as_str())?;
        let chat = OpenAiChatClient::new(
            &config.chat_base_url,
            config.api_key.as_str(),
            config.model.as_str(),
        )?;
        Self::new(Arc::new(recipes), Arc::new(chat))
    }

    /// Answer a question, by ingredient when one is given and non-empty.
    ///
    /// # Errors
    /// Returns an error if a lookup, the formatting or the chat call fails.
    pub async fn answer(&self, message: &str, ingredient: Option<&str>) -> BartenderResult<Answer> {
        match ingredient.filter(|i| !i.is_empty()) {
            Some(ingredient) => self.drinks_with_ingredient(ingredient).await,
            None => self.explain_drink(message).await,
        }
    }

    /// List the drinks that use an ingredient. Never calls the chat model.
    ///
    /// # Errors
    /// Returns an error if the lookup fails.
    pub async fn drinks_with_ingredient(&self, ingredient: &str) -> BartenderResult<Answer> {
        let ingredient = ingredient.to_lowercase();
        tracing::info!(%ingredient, "Ingredient search");

        let response = self.recipes.fetch_by_ingredient(&ingredient).await?;
        if response.drinks.is_empty() {
            return Ok(Answer::NotFound(format!(
                "Sorry, no drinks found with the ingredient '{ingredient}'."
            )));
        }

        let names: Vec<&str> = response.drinks.iter().map(|d| d.name.as_str()).collect();
        Ok(Answer::Found(format!(
            "Here are drinks that use {ingredient}: {}",
            names.join(", ")
        )))
    }

    /// Look up the drink named in `message` and have the chat model explain it.
    ///
    /// # Errors
    /// Returns an error if the lookup, the formatting or the chat call fails.
    pub async fn explain_drink(&self, message: &str) -> BartenderResult<Answer> {
        let search_term = self.parser.extract_search_term(message);
        tracing::info!(%search_term, "Drink search");

        let response = self.recipes.fetch_by_name(&search_term).await?;
        let Some(record) = response.drinks.first() else {
            return Ok(Answer::NotFound(format!(
                "Sorry, I couldn't find a drink for '{search_term}'."
            )));
        };

        let recipe = format_recipe(record)?;
        let reply = self.compose_and_send(message, &recipe).await?;
        Ok(Answer::Found(reply))
    }

    /// Send the fixed conversation for `user_message` and `formatted_recipe` to the chat model.
    ///
    /// # Errors
    /// Returns an error if the chat call fails.
    pub async fn compose_and_send(
        &self,
        user_message: &str,
        formatted_recipe: &str,
    ) -> BartenderResult<String> {
        let messages = compose_messages(user_message, formatted_recipe);
        self.chat.complete(&messages).await
    }
}


#[cfg(test)]
mod tests {
    use super::testing::fakes;
    use super::*;
    use crate::error::BartenderError;

    fn bartender(fail_chat: bool) -> (Bartender, testing::CallLog) {
        let (recipes, chat, log) = fakes(fail_chat);
        (Bartender::new(recipes, chat).unwrap(), log)
    }

    #[tokio::test]
    async fn test_drink_question_explained_after_lookup() {
        let (bartender, log) = bartender(false);
        let answer = bartender.answer("How do I make a Margarita?", None).await.unwrap();

        let Answer::Found(text) = answer else {
            panic!("expected a found answer");
        };
        assert!(text.starts_with("Sure! Here's a drink recipe you can use:"));
        assert!(text.contains("- 1 1/2 oz Tequila\n- Lime juice"));
        assert_eq!(*log.lock().unwrap(), ["name:a margarita", "chat:4"]);
    }

    #[tokio::test]
    async fn test_unknown_drink_not_found() {
        let (bartender, log) = bartender(false);
        let answer = bartender.answer("zzzznotadrink", None).await.unwrap();
        assert_eq!(
            answer,
            Answer::NotFound("Sorry, I couldn't find a drink for 'zzzznotadrink'.".to_string())
        );
        assert_eq!(*log.lock().unwrap(), ["name:zzzznotadrink"]);
    }

    #[tokio::test]
    async fn test_ingredient_lists_names_without_chat() {
        let (bartender, log) = bartender(false);
        let answer = bartender.answer("anything", Some("Vodka")).await.unwrap();
        assert_eq!(
            answer.text(),
            "Here are drinks that use vodka: Screwdriver, Black Russian"
        );
        assert_eq!(*log.lock().unwrap(), ["ingredient:vodka"]);
    }

    #[tokio::test]
    async fn test_unknown_ingredient_not_found() {
        let (bartender, _) = bartender(false);
        let answer = bartender.answer("", Some("zzzznotaningredient")).await.unwrap();
        assert_eq!(
            answer,
            Answer::NotFound(
                "Sorry, no drinks found with the ingredient 'zzzznotaningredient'.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_empty_ingredient_falls_back_to_name() {
        let (bartender, log) = bartender(false);
        let answer = bartender.answer("Margarita", Some("")).await.unwrap();
        assert!(matches!(answer, Answer::Found(_)));
        assert_eq!(log.lock().unwrap()[0], "name:margarita");
    }

    #[tokio::test]
    async fn test_failures_propagate() {
        let (bartender, log) = bartender(true);
        let chat_err = bartender.answer("margarita", None).await.unwrap_err();
        assert!(matches!(chat_err, BartenderError::ChatApiStatus(401)));

        let lookup_err = bartender.answer("outage", None).await.unwrap_err();
        assert!(matches!(lookup_err, BartenderError::RecipeApiStatus(502)));

        let format_err = bartender.answer("nameless", None).await.unwrap_err();
        assert!(matches!(format_err, BartenderError::MissingField("strDrink")));

        assert_eq!(
            *log.lock().unwrap(),
            ["name:margarita", "chat:4", "name:outage", "name:nameless"]
        );
    }
}
