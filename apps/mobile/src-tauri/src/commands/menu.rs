//! # Menu Commands
//!
//! Tauri commands for browsing the catalog.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Browse Flow                                     │
//! │                                                                         │
//! │  User picks "Mains" and types "salmon"                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('get_menu', { category: 'Mains', query: 'salmon' })            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  category filter ("All"/absent passes     │                         │
//! │  │  everything), then case-insensitive       │                         │
//! │  │  match over name + description            │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<MenuItemDto> to frontend                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use verdant_core::catalog::{Category, ALL_CATEGORY};
use verdant_core::validation::validate_search_query;
use verdant_core::MenuItem;

/// Menu item DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples the internal domain model from the API contract
/// - Exposes the price as plain cents; the frontend formats it
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub description: String,
    pub image: String,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        MenuItemDto {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            price_cents: item.price.cents(),
            description: item.description.clone(),
            image: item.image.clone(),
        }
    }
}

fn matches_category(item: &MenuItem, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(c) if c == ALL_CATEGORY => true,
        Some(c) => item.category == c,
    }
}

fn matches_query(item: &MenuItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.name.to_lowercase().contains(&query) || item.description.to_lowercase().contains(&query)
}

/// Lists menu items, optionally filtered by category and search query.
///
/// ## Arguments
/// * `category` - Category label; absent or "All" passes everything
/// * `query` - Search term over name and description (case-insensitive)
///
/// ## Returns
/// Matching items in catalog order.
#[tauri::command]
pub fn get_menu(
    catalog: State<'_, CatalogState>,
    category: Option<String>,
    query: Option<String>,
) -> Result<Vec<MenuItemDto>, ApiError> {
    let query = validate_search_query(query.as_deref().unwrap_or(""))?;
    debug!(category = ?category, query = %query, "get_menu command");

    let items: Vec<MenuItemDto> = catalog
        .items()
        .iter()
        .filter(|i| matches_category(i, category.as_deref()))
        .filter(|i| matches_query(i, &query))
        .map(MenuItemDto::from)
        .collect();

    Ok(items)
}

/// Gets a single menu item by its catalog id.
///
/// ## Returns
/// The item if found, or ApiError::NotFound
#[tauri::command]
pub fn get_menu_item(
    catalog: State<'_, CatalogState>,
    id: String,
) -> Result<MenuItemDto, ApiError> {
    debug!(id = %id, "get_menu_item command");
    catalog
        .get(&id)
        .map(MenuItemDto::from)
        .ok_or_else(|| ApiError::not_found("Menu item", &id))
}

/// Lists the browsing categories for the home screen.
#[tauri::command]
pub fn get_categories(catalog: State<'_, CatalogState>) -> Vec<Category> {
    debug!("get_categories command");
    catalog.categories().to_vec()
}

/// Lists the "Popular This Week" items in display order.
#[tauri::command]
pub fn get_popular_items(catalog: State<'_, CatalogState>) -> Vec<MenuItemDto> {
    debug!("get_popular_items command");
    catalog.popular().into_iter().map(MenuItemDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogState {
        CatalogState::new().unwrap()
    }

    fn filter(catalog: &CatalogState, category: Option<&str>, query: &str) -> Vec<String> {
        catalog
            .items()
            .iter()
            .filter(|i| matches_category(i, category))
            .filter(|i| matches_query(i, query))
            .map(|i| i.name.clone())
            .collect()
    }

    #[test]
    fn test_all_category_passes_everything() {
        let c = catalog();
        assert_eq!(filter(&c, None, "").len(), 9);
        assert_eq!(filter(&c, Some("All"), "").len(), 9);
    }

    #[test]
    fn test_category_filter() {
        let c = catalog();
        let mains = filter(&c, Some("Mains"), "");
        assert_eq!(
            mains,
            vec!["Filet Mignon", "Grilled Salmon", "Mushroom Risotto"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let c = catalog();
        assert_eq!(filter(&c, None, "SALMON"), vec!["Grilled Salmon"]);
        // "romaine" only appears in the salad's description
        assert_eq!(filter(&c, None, "romaine"), vec!["Caesar Salad"]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let c = catalog();
        assert!(filter(&c, Some("Desserts"), "salmon").is_empty());
        assert_eq!(filter(&c, Some("Drinks"), "ipa"), vec!["Craft Beer"]);
    }
}
