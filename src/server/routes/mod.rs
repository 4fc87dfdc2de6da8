use std::collections::BTreeMap;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::db::Category;
use crate::server::deserializers::page_from_query;

mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

pub(crate) use crate::server::error::{ApiError, ApiResponse};

pub(crate) struct PageQuery {
    pub page: usize,
}

// Read straight off the query string: a mangled one must land on page 1,
// not on axum's plain-text rejection.
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(PageQuery {
            page: page_from_query(parts.uri.query()),
        })
    }
}

// serde_json renders the integer keys as the string keys the frontend
// expects
pub(crate) fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect()
}
