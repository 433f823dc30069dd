//! Landing page and guestbook demo routes

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::views::{self, escape};
use crate::AppState;

/// Guestbook form payload for POST /add
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub name: String,
}

/// GET /
///
/// Lists guestbook names with a form to add more.
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let names = crate::db::guestbook::list_names(&state.db).await?;

    let items: Vec<String> = names.iter().map(|name| escape(name)).collect();
    let body = format!(
        r#"{}
<form method="post" action="/add">
    <input type="text" name="name" placeholder="Your name">
    <button type="submit">Add</button>
</form>
<p>{}</p>"#,
        views::list_section("Guestbook", &items),
        views::link("/another", "Another page"),
    );

    Ok(views::page("Welcome", &body))
}

/// GET /another
pub async fn another() -> Html<String> {
    views::page(
        "Another page",
        &format!("<p>Nothing to see here. {}</p>", views::link("/", "Go back")),
    )
}

/// POST /add
///
/// Inserts a guestbook row from the form and bounces back to the index.
pub async fn add_name(
    State(state): State<AppState>,
    Form(form): Form<AddForm>,
) -> ApiResult<Redirect> {
    crate::db::guestbook::add_name(&state.db, &form.name).await?;

    Ok(Redirect::to("/"))
}
