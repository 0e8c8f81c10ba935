//! Category Model

use super::validate::{invalid, is_valid_slug};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier, unique, charset `[a-z0-9-]+`
    pub slug: String,
    pub description: Option<String>,
    /// Parent category reference (optional, single level of nesting)
    pub parent_id: Option<i64>,
    pub is_active: bool,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryCreate {
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: String,
    #[validate(length(min = 2, max = 80, message = "Slug must be 2 to 80 characters"))]
    pub slug: String,
    #[validate(length(max = 300, message = "Description must be 300 characters or less"))]
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl CategoryCreate {
    /// Run every rule and collect all failures, not just the first.
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        if !is_valid_slug(&self.slug) {
            errors.add(
                "slug",
                invalid(
                    "slug_charset",
                    "Slug can only contain lowercase letters, numbers, and hyphens",
                ),
            );
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Update category payload
///
/// Partial update: absent fields keep their stored value. JSON `null` is the
/// same as an absent field, so `description` and `parent_id` cannot be
/// cleared here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryUpdate {
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 80, message = "Slug must be 2 to 80 characters"))]
    pub slug: Option<String>,
    #[validate(length(max = 300, message = "Description must be 300 characters or less"))]
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl CategoryUpdate {
    pub fn validate_payload(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        if let Some(slug) = &self.slug {
            if !is_valid_slug(slug) {
                errors.add(
                    "slug",
                    invalid(
                        "slug_charset",
                        "Slug can only contain lowercase letters, numbers, and hyphens",
                    ),
                );
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, slug: &str) -> CategoryCreate {
        CategoryCreate {
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            parent_id: None,
            is_active: None,
        }
    }

    #[test]
    fn test_valid_category_passes() {
        assert!(payload("Menswear", "mens-wear").validate_payload().is_ok());
    }

    #[test]
    fn test_bad_slug_charset_rejected() {
        let err = payload("Menswear", "Men's Wear").validate_payload().unwrap_err();
        assert!(err.field_errors().keys().any(|k| k == "slug"));
    }

    #[test]
    fn test_all_issues_collected() {
        // Short name AND bad slug should both be reported
        let err = payload("M", "Bad Slug!").validate_payload().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.keys().any(|k| k == "name"));
        assert!(fields.keys().any(|k| k == "slug"));
    }
}
