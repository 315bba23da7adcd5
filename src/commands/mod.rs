// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod transactions;

use anyhow::{anyhow, Result};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::config::{resolve_api_url, ConfigStore};
use crate::session::SessionStore;

/// Build an API client from the stored configuration and session.
pub fn client() -> Result<(ApiClient, SessionStore)> {
    let cfg = ConfigStore::open_default()?.load()?;
    let store = SessionStore::open_default()?;
    let session = store.load()?;
    let api = ApiClient::new(resolve_api_url(&cfg), session)?;
    Ok((api, store))
}

/// Like `client`, but refuses to proceed without a stored token.
pub fn authenticated_client() -> Result<(ApiClient, SessionStore)> {
    let (api, store) = client()?;
    if !api.session().is_authenticated() {
        return Err(anyhow!("Not logged in; run 'billfold login' first"));
    }
    Ok((api, store))
}

/// Unwrap an API result. A 401 tears down the stored session before the
/// error reaches the user, so the next invocation starts anonymous.
pub fn checked<T>(store: &SessionStore, result: ApiResult<T>) -> Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(ApiError::Unauthorized) => {
            store.clear()?;
            Err(anyhow!(
                "Session rejected by the server; run 'billfold login' again"
            ))
        }
        Err(e) => Err(e.into()),
    }
}
