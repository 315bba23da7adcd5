// Copyright (c) 2025 Billfold contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use billfold::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("register", sub)) => commands::auth::register(sub)?,
        Some(("login", sub)) => commands::auth::login(sub)?,
        Some(("logout", _)) => commands::auth::logout()?,
        Some(("whoami", _)) => commands::auth::whoami()?,
        Some(("dashboard", sub)) => commands::dashboard::handle(sub)?,
        Some(("tx", sub)) => commands::transactions::handle(sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("config", sub)) => commands::config::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
