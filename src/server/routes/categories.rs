use std::collections::BTreeMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, get_category};
use crate::db::queries::questions::get_questions_for_category;
use crate::db::Question;
use crate::pagination::{page_count, paginate, QUESTIONS_PER_PAGE};
use crate::server::app::AppState;

use super::{categories_map, ApiError, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoryList> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryList {
        success: true,
        categories: categories_map(categories),
    }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    params: PageQuery,
) -> ApiResponse<CategoryQuestionList> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let category = get_category(&pool, id).await?;
    let questions = get_questions_for_category(&pool, category.id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    if params.page > page_count(questions.len(), QUESTIONS_PER_PAGE) {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryQuestionList {
        success: true,
        total_questions: questions.len(),
        questions: paginate(&questions, params.page, QUESTIONS_PER_PAGE).to_vec(),
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
