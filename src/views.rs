//! HTML views
//!
//! Askama templates for the application's pages. Each struct renders a
//! template from `templates/` and converts straight into a response.

use askama::Template;

use crate::store::Item;

/// Combined home page: the "General" list plus the work list
#[derive(Template)]
#[template(path = "list.html")]
pub struct HomeTemplate {
    /// Items of the "General" list
    pub general_items: Vec<Item>,
    /// Items of the work list
    pub work_items: Vec<Item>,
    /// Heading of the work section
    pub work_title: String,
}

/// A single named list
#[derive(Template)]
#[template(path = "custom_list.html")]
pub struct CustomListTemplate {
    /// Display title (the normalized list name)
    pub list_title: String,
    /// Items of the list
    pub items: Vec<Item>,
}

/// Static about page; doubles as the 404 body
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    /// Page heading
    pub page_title: String,
}
