use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::pages::Page;
use crate::state::AppState;

fn render_page(state: &AppState, page: Page) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.render(page)?))
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Home)
}

/// GET /projects
pub async fn handle_projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Projects)
}

/// GET /architecture
pub async fn handle_architecture(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Architecture)
}

/// GET /playground
pub async fn handle_playground(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Playground)
}
