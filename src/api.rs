// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    Category, NewCategory, NewTransaction, Summary, Token, Transaction, TransactionPatch, User,
};
use crate::session::Session;
use crate::utils::http_client;

/// Closed error taxonomy for every backend call. Callers pattern-match on
/// the variant; nobody inspects status codes or response bodies downstream
/// of this module.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("not authenticated (HTTP 401)")]
    Unauthorized,
    #[error("{0}")]
    Validation(String),
    #[error("server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Map a non-2xx response to an `ApiError`. FastAPI puts human-readable
/// rejections in a JSON `detail` field.
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        400 | 404 | 409 | 422 => ApiError::Validation(detail_message(body)),
        _ => ApiError::Server {
            status,
            body: body.to_string(),
        },
    }
}

fn detail_message(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail").map(|d| match d.as_str() {
                Some(s) => s.to_string(),
                None => d.to_string(),
            })
        });
    match detail {
        Some(d) if !d.is_empty() => d,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => "request rejected".to_string(),
    }
}

/// Blocking client for the finance backend. Owns the current session; the
/// bearer token rides along on every request while authenticated.
pub struct ApiClient {
    base: String,
    http: reqwest::blocking::Client,
    session: Session,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, session: Session) -> Result<Self> {
        Ok(Self {
            base: base.into(),
            http: http_client()?,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> ApiResult<reqwest::blocking::Response> {
        let req = match &self.session {
            Session::Authenticated { token, .. } => req.bearer_auth(token),
            Session::Anonymous => req,
        };
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().unwrap_or_default();
            Err(error_from_response(status.as_u16(), &body))
        }
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> ApiResult<T> {
        Ok(self.send(req)?.json()?)
    }

    pub fn register(&self, email: &str, password: &str) -> ApiResult<User> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.fetch(self.http.post(self.url("/register")).json(&body))
    }

    // OAuth2 password flow: the login route wants a form body with
    // `username`/`password`, unlike every other JSON endpoint.
    pub fn login(&self, email: &str, password: &str) -> ApiResult<Token> {
        let form = [("username", email), ("password", password)];
        self.fetch(self.http.post(self.url("/login")).form(&form))
    }

    pub fn me(&self) -> ApiResult<User> {
        self.fetch(self.http.get(self.url("/users/me")))
    }

    pub fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.fetch(self.http.get(self.url("/categories/")))
    }

    pub fn create_category(&self, name: &str) -> ApiResult<Category> {
        let body = NewCategory {
            name: name.to_string(),
        };
        self.fetch(self.http.post(self.url("/categories/")).json(&body))
    }

    pub fn list_transactions(&self, skip: usize, limit: usize) -> ApiResult<Vec<Transaction>> {
        let req = self
            .http
            .get(self.url("/transactions/"))
            .query(&[("skip", skip), ("limit", limit)]);
        self.fetch(req)
    }

    pub fn create_transaction(&self, tx: &NewTransaction) -> ApiResult<Transaction> {
        self.fetch(self.http.post(self.url("/transactions/")).json(tx))
    }

    pub fn update_transaction(
        &self,
        id: i64,
        patch: &TransactionPatch,
    ) -> ApiResult<Transaction> {
        let url = self.url(&format!("/transactions/{}", id));
        self.fetch(self.http.put(url).json(patch))
    }

    pub fn delete_transaction(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/transactions/{}", id));
        self.send(self.http.delete(url))?;
        Ok(())
    }

    pub fn summary_total(&self) -> ApiResult<Summary> {
        self.fetch(self.http.get(self.url("/dashboard/summary_total")))
    }

    pub fn summary_by_date(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<Summary> {
        let req = self
            .http
            .get(self.url("/dashboard/summary_by_date"))
            .query(&[
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ]);
        self.fetch(req)
    }
}
