// ABOUTME: Recipe creator view model: draft, per-field validation, and submission
// ABOUTME: Instructions come from the rich-text editor through its change callback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::api::forms::{RecipeForm, ThumbnailFile};
use crate::constants::limits::{EMPTY_EDITOR_HTML, RECIPE_NAME_MIN_CHARS};
use crate::constants::messages::validation;
use crate::editor::RichTextEditor;
use crate::errors::AppError;
use crate::models::{Ingredient, Recipe, Unit};
use crate::query::QueryClient;
use crate::routing::Route;
use tokio::sync::watch;

/// One editable ingredient row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientRow {
    /// Ingredient name
    pub name: String,
    /// Free-text quantity
    pub quantity: String,
    /// Unit, one of [`Unit::COMMON`] or free text
    pub unit: String,
}

impl IngredientRow {
    /// Filled row
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }
}

/// Form field carrying a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Recipe name
    Name,
    /// Ingredient name of a row
    IngredientName(usize),
    /// Quantity of a row
    Quantity(usize),
    /// Unit of a row
    Unit(usize),
    /// Instructions
    Instructions,
    /// Photo
    Thumbnail,
}

/// Validation messages by field, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(Field, &'static str)>,
}

impl FormErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push((field, message));
    }

    /// Message for `field`
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, message)| *message)
    }

    /// True when the draft is valid
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All messages in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().copied()
    }
}

/// Unsubmitted recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Recipe name
    pub name: String,
    /// Instructions HTML
    pub instructions: String,
    /// Ingredient rows; never empty
    ingredients: Vec<IngredientRow>,
    /// Photo
    pub thumbnail: Option<ThumbnailFile>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            instructions: String::new(),
            ingredients: vec![IngredientRow::default()],
            thumbnail: None,
        }
    }
}

impl RecipeDraft {
    /// Draft with a name and instructions and one empty ingredient row
    #[must_use]
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            ..Self::default()
        }
    }

    /// Ingredient rows
    #[must_use]
    pub fn ingredients(&self) -> &[IngredientRow] {
        &self.ingredients
    }

    /// Row `index` for editing
    pub fn ingredient_mut(&mut self, index: usize) -> Option<&mut IngredientRow> {
        self.ingredients.get_mut(index)
    }

    /// Append an empty row; returns its index
    pub fn add_ingredient(&mut self) -> usize {
        self.ingredients.push(IngredientRow::default());
        self.ingredients.len() - 1
    }

    /// Remove row `index`; the last remaining row stays
    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if self.ingredients.len() <= 1 || index >= self.ingredients.len() {
            return false;
        }
        self.ingredients.remove(index);
        true
    }

    /// Check every field; on success returns the form to submit
    ///
    /// # Errors
    ///
    /// Returns the messages of every failing field
    pub fn validate(&self) -> Result<RecipeForm, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(Field::Name, validation::NAME_REQUIRED);
        } else if self.name.chars().count() < RECIPE_NAME_MIN_CHARS {
            errors.push(Field::Name, validation::NAME_TOO_SHORT);
        }

        for (index, row) in self.ingredients.iter().enumerate() {
            if row.name.trim().is_empty() {
                errors.push(Field::IngredientName(index), validation::INGREDIENT_NAME_REQUIRED);
            }
            if row.quantity.trim().is_empty() {
                errors.push(Field::Quantity(index), validation::QUANTITY_REQUIRED);
            }
            if row.unit.trim().is_empty() {
                errors.push(Field::Unit(index), validation::UNIT_REQUIRED);
            }
        }

        let instructions = self.instructions.trim();
        if instructions.is_empty() || instructions == EMPTY_EDITOR_HTML {
            errors.push(Field::Instructions, validation::INSTRUCTIONS_REQUIRED);
        }

        if self.thumbnail.is_none() {
            errors.push(Field::Thumbnail, validation::THUMBNAIL_REQUIRED);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RecipeForm {
            name: self.name.clone(),
            instructions: self.instructions.clone(),
            ingredients: self
                .ingredients
                .iter()
                .map(|row| Ingredient {
                    name: row.name.trim().to_owned(),
                    quantity: row.quantity.trim().to_owned(),
                    unit: Unit::from(row.unit.trim()),
                })
                .collect(),
            thumbnail: self.thumbnail.clone(),
        })
    }
}

/// Result of pressing "Save"
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FormErrors),
    /// The service rejected the recipe; a notification has been raised
    Failed(AppError),
    /// Recipe stored; navigate to `redirect`
    Created {
        /// Stored recipe
        recipe: Recipe,
        /// Where to go next
        redirect: Route,
    },
}

/// Recipe creator page
pub struct RecipeCreatorView {
    client: QueryClient,
    draft: RecipeDraft,
    editor: RichTextEditor,
    instructions: watch::Receiver<String>,
    submitting: bool,
}

impl RecipeCreatorView {
    /// Empty creator page
    #[must_use]
    pub fn new(client: QueryClient) -> Self {
        let (sender, instructions) = watch::channel(String::new());
        let editor = RichTextEditor::new("", move |html| {
            sender.send_replace(html.to_owned());
        });
        Self {
            client,
            draft: RecipeDraft::default(),
            editor,
            instructions,
            submitting: false,
        }
    }

    /// Draft fields
    #[must_use]
    pub const fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Draft fields for editing
    pub fn draft_mut(&mut self) -> &mut RecipeDraft {
        &mut self.draft
    }

    /// Instructions editor
    pub fn editor(&mut self) -> &mut RichTextEditor {
        &mut self.editor
    }

    /// True while a submission is in flight
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and create the recipe
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.draft.instructions.clone_from(&self.instructions.borrow());
        let form = match self.draft.validate() {
            Ok(form) => form,
            Err(errors) => {
                tracing::debug!(failing_fields = errors.len(), "Recipe draft rejected");
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.submitting = true;
        let result = self.client.create_recipe(&form).await;
        self.submitting = false;
        match result {
            Ok(recipe) => SubmitOutcome::Created {
                recipe,
                redirect: Route::Home,
            },
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}

impl std::fmt::Debug for RecipeCreatorView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeCreatorView")
            .field("draft", &self.draft)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}
