use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, get_category};
use crate::db::queries::questions::{self, get_all_questions};
use crate::db::Question;
use crate::pagination::{page_count, paginate, QUESTIONS_PER_PAGE};
use crate::server::app::AppState;

use super::{categories_map, ApiError, ApiResponse, PageQuery};

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    // the frontend is not consistent about sending numbers or strings here
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    count: usize,
    questions: Vec<Question>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    params: PageQuery,
) -> ApiResponse<QuestionList> {
    let questions = get_all_questions(&pool).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    if params.page > page_count(questions.len(), QUESTIONS_PER_PAGE) {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionList {
        success: true,
        total_questions: questions.len(),
        questions: paginate(&questions, params.page, QUESTIONS_PER_PAGE).to_vec(),
        categories: categories_map(categories),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResponse<Created> {
    let Json(new_question) = payload.map_err(|_| ApiError::Unprocessable)?;
    // an unknown category is a client error, not a constraint violation
    if get_category(&pool, new_question.category).await.is_err() {
        return Err(ApiError::Unprocessable);
    }
    questions::create_question(
        &pool,
        new_question.question.as_str(),
        new_question.answer.as_str(),
        new_question.category,
        new_question.difficulty,
    )
    .await?;
    Ok(Json(Created { success: true }))
}

// Deletion rides on POST because that is what the deployed frontend sends.
async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Deleted> {
    // a non-numeric id is a miss, same as an unknown one
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    questions::delete_question(&pool, id).await?;
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

// `count` is the full match count even when the page trims the list; a
// zero-match search is an empty success, not a 404.
async fn search_questions(
    State(pool): State<SqlitePool>,
    params: PageQuery,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<SearchResults> {
    let Json(body) = payload.map_err(|_| ApiError::Unprocessable)?;
    let term = body.search_term.ok_or(ApiError::NotFound)?;
    let questions = questions::search_questions(&pool, term.as_str()).await?;
    Ok(Json(SearchResults {
        success: true,
        count: questions.len(),
        questions: paginate(&questions, params.page, QUESTIONS_PER_PAGE).to_vec(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", post(delete_question))
        .with_state(state)
}
