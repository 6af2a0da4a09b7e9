// ABOUTME: Recipe create/update form and its multipart encoding
// ABOUTME: Ingredients travel as a JSON array string next to the thumbnail file part
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::api::form_fields;
use crate::errors::{AppError, AppResult};
use crate::models::Ingredient;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Uploaded recipe photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailFile {
    /// Original file name
    pub file_name: String,
    /// MIME type sent with the part
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ThumbnailFile {
    /// Wrap in-memory image bytes
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read an image from disk, guessing the MIME type from the extension
    ///
    /// # Errors
    ///
    /// Returns a validation error if the file cannot be read
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::validation(format!("Cannot read thumbnail {}: {e}", path.display()))
                .with_source(e)
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "thumbnail".to_owned(), |name| name.to_string_lossy().into_owned());
        let content_type = mime_for_extension(path.extension().and_then(|ext| ext.to_str()));
        Ok(Self::new(file_name, content_type, bytes))
    }
}

/// MIME type for common image extensions
#[must_use]
pub fn mime_for_extension(extension: Option<&str>) -> &'static str {
    match extension.map(str::to_ascii_lowercase).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Fields submitted when creating or updating a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    /// Title
    pub name: String,
    /// Instructions HTML from the editor
    pub instructions: String,
    /// Ordered ingredients
    pub ingredients: Vec<Ingredient>,
    /// Photo; required on create, optional on update
    pub thumbnail: Option<ThumbnailFile>,
}

impl RecipeForm {
    /// Ingredients as the JSON array string the service expects
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the ingredients cannot be encoded
    pub fn ingredients_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.ingredients)?)
    }

    /// Build the multipart body
    ///
    /// # Errors
    ///
    /// Returns an error if ingredients cannot be serialized or the thumbnail
    /// MIME type is rejected
    pub fn to_multipart(&self) -> AppResult<Form> {
        let mut form = Form::new()
            .text(form_fields::NAME, self.name.clone())
            .text(form_fields::INSTRUCTIONS, self.instructions.clone())
            .text(form_fields::INGREDIENTS, self.ingredients_json()?);

        if let Some(thumbnail) = &self.thumbnail {
            let part = Part::bytes(thumbnail.bytes.clone())
                .file_name(thumbnail.file_name.clone())
                .mime_str(&thumbnail.content_type)?;
            form = form.part(form_fields::THUMBNAIL_IMAGE, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    #[test]
    fn test_ingredients_encode_as_json_array() {
        let form = RecipeForm {
            name: "Pancakes".into(),
            instructions: "<p>Mix</p>".into(),
            ingredients: vec![Ingredient {
                name: "Flour".into(),
                quantity: "2".into(),
                unit: Unit::Cups,
            }],
            thumbnail: None,
        };
        assert_eq!(
            form.ingredients_json().unwrap(),
            r#"[{"name":"Flour","quantity":"2","unit":"cups"}]"#
        );
    }

    #[test]
    fn test_mime_guessing() {
        assert_eq!(mime_for_extension(Some("JPG")), "image/jpeg");
        assert_eq!(mime_for_extension(Some("png")), "image/png");
        assert_eq!(mime_for_extension(None), "application/octet-stream");
    }
}
