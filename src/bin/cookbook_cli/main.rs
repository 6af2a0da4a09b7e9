// ABOUTME: Cookbook CLI - command-line front end for the recipe catalog service
// ABOUTME: Handles registration, session checks, recipe browsing/creation, and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create an account
//! cookbook-cli --email ada@example.com --username ada --password secret register --full-name "Ada Lovelace"
//!
//! # Search recipes (credentials can come from COOKBOOK_EMAIL / COOKBOOK_PASSWORD)
//! cookbook-cli recipes list --search pasta
//!
//! # Create a recipe
//! cookbook-cli recipes create --name Pancakes --instructions "Mix. Fry." \
//!     --ingredient flour:2:cups --ingredient milk:1:cup --thumbnail pancakes.jpg
//!
//! # Manage favorites
//! cookbook-cli favorites add 64f1c2
//! cookbook-cli favorites list
//! ```

mod commands;
mod helpers;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cookbook_client::api::ApiClient;
use cookbook_client::config::environment::{parse_api_url, ClientConfig};
use cookbook_client::logging::LoggingConfig;
use cookbook_client::query::QueryClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use commands::Session;

#[derive(Parser)]
#[command(
    name = "cookbook-cli",
    about = "Cookbook recipe catalog CLI",
    long_about = "Command-line front end for the cookbook recipe service: accounts, recipes, and favorites."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL override
    #[arg(long, global = true, env = "COOKBOOK_API_URL")]
    api_url: Option<String>,

    /// Account email
    #[arg(long, global = true, env = "COOKBOOK_EMAIL")]
    email: Option<String>,

    /// Account username
    #[arg(long, global = true, env = "COOKBOOK_USERNAME")]
    username: Option<String>,

    /// Account password
    #[arg(long, global = true, env = "COOKBOOK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create an account with the global email, username and password
    Register {
        /// Display name
        #[arg(long)]
        full_name: String,
    },

    /// Show the signed-in user
    Whoami,

    /// Recipe commands
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Favorite commands
    Favorites {
        #[command(subcommand)]
        action: FavoriteCommand,
    },

    /// End the session
    Logout,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// List recipes
    List {
        /// Server-side search term
        #[arg(long, default_value = "")]
        search: String,

        /// Only recipes written by the signed-in user
        #[arg(long)]
        mine: bool,
    },

    /// Show one recipe
    Show {
        /// Recipe ID
        id: String,
    },

    /// Create a recipe
    Create {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Instructions as HTML, or plain text with one paragraph per line
        #[arg(long)]
        instructions: String,

        /// Ingredient as name:quantity:unit (repeatable)
        #[arg(long = "ingredient", value_name = "NAME:QUANTITY:UNIT")]
        ingredients: Vec<String>,

        /// Recipe photo
        #[arg(long)]
        thumbnail: Option<PathBuf>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoriteCommand {
    /// List favorite recipes
    List,

    /// Add a recipe to the favorites
    Add {
        /// Recipe ID
        id: String,
    },

    /// Remove a recipe from the favorites
    Remove {
        /// Recipe ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(raw) = cli.api_url.as_deref() {
        config.api_url = parse_api_url(raw).context("Invalid --api-url")?;
    }
    debug!(api_url = %config.api_url, "Cookbook CLI starting");

    let api = ApiClient::new(&config)?;
    let client = QueryClient::from_config(Arc::new(api), &config);
    let mut session = Session::new(client, cli.email, cli.username, cli.password);

    let outcome = match cli.command {
        Command::Register { full_name } => commands::auth::register(&mut session, full_name).await,
        Command::Whoami => commands::auth::whoami(&mut session).await,
        Command::Logout => commands::auth::logout(&mut session).await,
        Command::Recipes { action } => match action {
            RecipeCommand::List { search, mine } => {
                commands::recipes::list(&mut session, &search, mine).await
            }
            RecipeCommand::Show { id } => commands::recipes::show(&mut session, id).await,
            RecipeCommand::Create {
                name,
                instructions,
                ingredients,
                thumbnail,
            } => {
                commands::recipes::create(&mut session, name, &instructions, &ingredients, thumbnail)
                    .await
            }
            RecipeCommand::Delete { id } => commands::recipes::delete(&mut session, id).await,
        },
        Command::Favorites { action } => match action {
            FavoriteCommand::List => commands::favorites::list(&mut session).await,
            FavoriteCommand::Add { id } => commands::favorites::add(&mut session, id).await,
            FavoriteCommand::Remove { id } => commands::favorites::remove(&mut session, id).await,
        },
    };

    session.flush_notifications();
    outcome
}
