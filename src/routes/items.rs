//! Form submission handlers
//!
//! Adds and deletes items. Every mutation ends in a redirect back to the
//! originating list's page; storage failures are logged and fall back to a
//! home redirect, never an error page.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;
use tracing::error;

use crate::state::AppState;
use crate::store::{normalize_name, ListStore, GENERAL_LIST, WORK_LIST};

/// POST / form payload
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    /// Text of the new item
    #[serde(rename = "newItem")]
    pub new_item: Option<String>,
    /// Name of the target list
    pub list: Option<String>,
}

/// POST /delete form payload
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    /// Id of the checked item
    pub checkbox: Option<String>,
    /// Name of the owning list
    #[serde(rename = "listName")]
    pub list_name: Option<String>,
}

/// Where a mutation on `list_name` lands afterwards: "General" and the work
/// list live on the home page, every other list has its own URL.
fn redirect_target(list_name: &str) -> String {
    let name = normalize_name(list_name);
    if name == GENERAL_LIST || name == WORK_LIST {
        "/".to_string()
    } else {
        format!("/{}", name)
    }
}

/// POST / - Add a trimmed item to the named list
pub async fn add_item(State(state): State<AppState>, Form(form): Form<AddItemForm>) -> Redirect {
    let (Some(new_item), Some(list)) = (form.new_item, form.list) else {
        return Redirect::to("/");
    };

    let text = new_item.trim();
    if text.is_empty() {
        return Redirect::to("/");
    }

    match state.store.add_item(&list, text).await {
        Ok(_) => Redirect::to(&redirect_target(&list)),
        Err(err) => {
            error!("Failed to add item to '{}': {}", list, err);
            Redirect::to("/")
        }
    }
}

/// POST /delete - Remove an item from the named list
pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> Redirect {
    let (Some(item_id), Some(list_name)) = (form.checkbox, form.list_name) else {
        return Redirect::to("/");
    };

    match state.store.delete_item(&list_name, &item_id).await {
        Ok(()) => Redirect::to(&redirect_target(&list_name)),
        Err(err) => {
            error!(
                "Failed to delete item {} from '{}': {}",
                item_id, list_name, err
            );
            Redirect::to("/")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::http::header::LOCATION;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()))
    }

    fn location(redirect: Redirect) -> String {
        let response = redirect.into_response();
        response.headers()[LOCATION].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_add_item_to_general_redirects_home() {
        let state = test_state();
        let form = AddItemForm {
            new_item: Some("Buy milk".to_string()),
            list: Some("General".to_string()),
        };

        let redirect = add_item(State(state.clone()), Form(form)).await;
        assert_eq!(location(redirect), "/");

        let items = state.store.list_items(GENERAL_LIST).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Buy milk");
    }

    #[tokio::test]
    async fn test_add_item_to_custom_list_redirects_to_its_page() {
        let state = test_state();
        let form = AddItemForm {
            new_item: Some("Pack bags".to_string()),
            // Form value arrives uncapitalized; redirect uses the normalized name
            list: Some("viajes".to_string()),
        };

        let redirect = add_item(State(state.clone()), Form(form)).await;
        assert_eq!(location(redirect), "/Viajes");

        let items = state.store.list_items("Viajes").await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_add_whitespace_item_is_noop() {
        let state = test_state();
        let form = AddItemForm {
            new_item: Some("   ".to_string()),
            list: Some("General".to_string()),
        };

        let redirect = add_item(State(state.clone()), Form(form)).await;
        assert_eq!(location(redirect), "/");
        assert!(state.store.list_items(GENERAL_LIST).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_item_missing_fields_redirects_home() {
        let state = test_state();
        let form = AddItemForm {
            new_item: Some("Buy milk".to_string()),
            list: None,
        };

        let redirect = add_item(State(state.clone()), Form(form)).await;
        assert_eq!(location(redirect), "/");
        assert!(state.store.list_items(GENERAL_LIST).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_item_trims_text() {
        let state = test_state();
        let form = AddItemForm {
            new_item: Some("  Buy milk  ".to_string()),
            list: Some("General".to_string()),
        };

        add_item(State(state.clone()), Form(form)).await;
        let items = state.store.list_items(GENERAL_LIST).await.unwrap();
        assert_eq!(items[0].name, "Buy milk");
    }

    #[tokio::test]
    async fn test_delete_item_redirects_to_owning_list() {
        let state = test_state();
        let item = state.store.add_item("Viajes", "Pack bags").await.unwrap();

        let form = DeleteItemForm {
            checkbox: Some(item.id.clone()),
            list_name: Some("Viajes".to_string()),
        };
        let redirect = delete_item(State(state.clone()), Form(form)).await;

        assert_eq!(location(redirect), "/Viajes");
        assert!(state.store.list_items("Viajes").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_item_still_redirects() {
        let state = test_state();
        state.store.add_item("Trabajo", "Send report").await.unwrap();

        let form = DeleteItemForm {
            checkbox: Some("no-such-id".to_string()),
            list_name: Some("Trabajo".to_string()),
        };
        let redirect = delete_item(State(state.clone()), Form(form)).await;

        // Work list lives on the home page
        assert_eq!(location(redirect), "/");
        assert_eq!(state.store.list_items("Trabajo").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_fields_redirects_home() {
        let state = test_state();
        let form = DeleteItemForm {
            checkbox: None,
            list_name: Some("Viajes".to_string()),
        };

        let redirect = delete_item(State(state), Form(form)).await;
        assert_eq!(location(redirect), "/");
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target("General"), "/");
        assert_eq!(redirect_target("Trabajo"), "/");
        assert_eq!(redirect_target("trabajo"), "/");
        assert_eq!(redirect_target("Viajes"), "/Viajes");
    }
}
