use super::agent::is_browser;
use super::assets;
use crate::lexicon::types::Gender;
use crate::lookup::engine::Lookup;
use crate::lookup::html::escape_html;
use crate::quiz::engine::Quiz;

use axum::extract::Form;
use axum::http::header::{HOST, USER_AGENT};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Extension;
use serde::Deserialize;

/// Header telling the htmx page to fetch the next quiz word.
const HX_TRIGGER: &str = "HX-Trigger";

#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub s: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizForm {
    #[serde(default, rename = "randomNoun")]
    pub random_noun: String,
}

pub async fn handle_root(uri: Uri, headers: HeaderMap) -> Response {
    let user_agent = header_str(&headers, USER_AGENT.as_str());
    log_request(&uri, &headers);

    if is_browser(user_agent) {
        assets::index().into_response()
    } else {
        format!(
            "No input given. Try something like this:\n\t{}/stol\n",
            header_str(&headers, HOST.as_str())
        )
        .into_response()
    }
}

/// `/<word>` for any method.
///
/// Browsers submit the word through the `s` form field and get escaped HTML
/// back. Other clients put the word in the path and get plain text.
pub async fn handle_lookup(
    Extension(lookup): Extension<Lookup>,
    uri: Uri,
    headers: HeaderMap,
    form: Option<Form<LookupForm>>,
) -> Response {
    log_request(&uri, &headers);

    if is_browser(header_str(&headers, USER_AGENT.as_str())) {
        let query = form.map(|Form(form)| form.s).unwrap_or_default();
        tracing::debug!("s: [{}]", query);
        let message = lookup.lookup(&query).await;
        return Html(escape_html(&message)).into_response();
    }

    let query = path_word(&uri).to_lowercase();
    lookup.lookup(query.trim()).await.into_response()
}

/// The request path without its leading slash, percent-decoded.
///
/// Invalid UTF-8 is replaced rather than rejected, so a malformed word is an
/// ordinary miss.
fn path_word(uri: &Uri) -> String {
    let path = uri.path();
    let raw = path.strip_prefix('/').unwrap_or(path);
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

pub async fn handle_random(
    Extension(quiz): Extension<Quiz>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    log_request(&uri, &headers);

    match quiz.random_word().await {
        Ok(word) => word.into_response(),
        Err(e) => {
            tracing::error!("Failed to pick a quiz word: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_check_en(
    Extension(quiz): Extension<Quiz>,
    uri: Uri,
    headers: HeaderMap,
    form: Option<Form<QuizForm>>,
) -> Response {
    log_request(&uri, &headers);
    check_guess(&quiz, Gender::En, form).await
}

pub async fn handle_check_ett(
    Extension(quiz): Extension<Quiz>,
    uri: Uri,
    headers: HeaderMap,
    form: Option<Form<QuizForm>>,
) -> Response {
    log_request(&uri, &headers);
    check_guess(&quiz, Gender::Ett, form).await
}

async fn check_guess(quiz: &Quiz, guess: Gender, form: Option<Form<QuizForm>>) -> Response {
    let noun = form.map(|Form(form)| form.random_noun).unwrap_or_default();

    match quiz.check_guess(guess, &noun).await {
        Ok(fragment) => ([(HX_TRIGGER, "newRandom")], Html(fragment)).into_response(),
        Err(e) => {
            // Only a client that invented its own quiz word can get here.
            tracing::error!("Quiz check for '{}' failed: {}", noun, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(HX_TRIGGER, "newRandom")],
                "Internal error",
            )
                .into_response()
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn log_request(uri: &Uri, headers: &HeaderMap) {
    tracing::debug!(
        "path={} query={} host={} user_agent={}",
        uri.path(),
        uri.query().unwrap_or_default(),
        header_str(headers, HOST.as_str()),
        header_str(headers, USER_AGENT.as_str())
    );
}
