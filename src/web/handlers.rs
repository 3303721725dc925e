//! Request handlers.

use super::server::ServerContext;
use crate::error::CalcError;
use crate::models::AddressInput;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Form posted to `/result`.
#[derive(Debug, Deserialize)]
pub struct ResultForm {
    #[serde(default)]
    pub addr: String,
}

/// Body of a `400` answer.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub(super) async fn handle_index(State(ctx): State<Arc<ServerContext>>) -> Html<String> {
    Html(ctx.page().to_string())
}

fn bad_request(message: String) -> Response {
    let body = ErrorBody { error: message };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

pub(super) async fn handle_result(form: Result<Form<ResultForm>, FormRejection>) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            log::warn!("POST /result unreadable form: {rejection}");
            return bad_request(rejection.body_text());
        }
    };
    let addr = form.addr.trim();
    let outcome = if addr.is_empty() {
        Err(CalcError::MissingInput)
    } else {
        AddressInput::detect(addr).process()
    };

    match outcome {
        Ok(report) => {
            log::info!("POST /result {addr} ok");
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => {
            log::warn!("POST /result {addr:?} rejected: {e}");
            bad_request(e.to_string())
        }
    }
}
