// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};

use crate::api::ApiError;
use crate::models::Token;
use crate::session::{Session, SessionStore};

pub fn register(sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let (api, _store) = super::client()?;
    let user = api.register(email, password)?;
    println!(
        "Registered {} (id {}). Run 'billfold login' to sign in.",
        user.email, user.id
    );
    Ok(())
}

pub fn login(sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let (mut api, store) = super::client()?;

    // A 401 here means bad credentials, not a stale session.
    let Token { access_token, .. } = match api.login(email, password) {
        Ok(token) => token,
        Err(ApiError::Unauthorized) => return Err(anyhow!("Incorrect email or password")),
        Err(e) => return Err(e.into()),
    };
    api.set_session(Session::authenticated(access_token.clone(), email.clone()));

    // Confirms the token works and picks up the canonical account email.
    let user = super::checked(&store, api.me())?;
    api.set_session(Session::authenticated(access_token, user.email.clone()));
    store.save(api.session())?;

    println!("Logged in as {}", user.email);
    Ok(())
}

pub fn logout() -> Result<()> {
    let store = SessionStore::open_default()?;
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    let (api, store) = super::client()?;
    if !api.session().is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    let user = super::checked(&store, api.me())?;
    println!("{} (id {})", user.email, user.id);
    Ok(())
}
