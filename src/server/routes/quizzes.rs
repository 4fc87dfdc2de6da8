use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::categories::get_category;
use crate::db::queries::questions::get_all_questions;
use crate::db::Question;
use crate::quiz::{select_quiz_question, ALL_CATEGORIES};
use crate::server::app::AppState;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    // the frontend sends the id as a string
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<QuizQuestion> {
    let Json(body) = payload.map_err(|_| ApiError::Unprocessable)?;
    let category_id = body.quiz_category.and_then(|category| category.id);

    // an unknown category is a client error, distinct from an exhausted round
    let category_label = match category_id.filter(|id| *id != ALL_CATEGORIES) {
        Some(id) => get_category(&pool, id).await?.kind,
        None => "all".to_owned(),
    };

    let questions = get_all_questions(&pool).await?;
    let previous: HashSet<i64> = body.previous_questions.into_iter().collect();
    match select_quiz_question(category_id, &previous, &questions, &mut rand::thread_rng()) {
        Some(question) => {
            QUIZ_QUESTION_CNTR
                .with_label_values(&[category_label.as_str()])
                .inc();
            Ok(Json(QuizQuestion {
                success: true,
                question: Some(question.clone()),
            }))
        }
        None => Ok(Json(QuizQuestion {
            success: false,
            question: None,
        })),
    }
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
