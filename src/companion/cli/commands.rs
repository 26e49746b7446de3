//! # CLI Layer
//!
//! This module is **one possible UI client** for companion. The library does the
//! work; this layer only turns arguments into API calls and results into text.
//!
//! It is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Picks the storage backend
//! - Reads configuration from disk and the environment
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print output

use super::render::{
    print_messages, render_config, render_contact, render_contact_list, render_entity,
};
use super::setup::{Cli, Commands};
use companion::api::{CmdMessage, CompanionApi};
use companion::catalog::http::HttpCatalog;
use companion::catalog::ResourceKind;
use companion::config::CompanionConfig;
use companion::error::{CompanionError, Result};
use companion::model::ContactFields;
use companion::store::fs::FileStore;
use companion::store::memory::InMemoryStore;
use companion::store::ContactStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: CompanionApi<Box<dyn ContactStore>, HttpCatalog>,
    config: CompanionConfig,
    config_dir: Option<PathBuf>,
    data: Option<PathBuf>,
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { query }) => handle_list(&ctx, query.as_deref()),
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields.into()),
        Some(Commands::Favorite { id, value }) => handle_favorite(&mut ctx, &id, &value),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Profile { id }) => handle_profile(&ctx, &id).await,
        Some(Commands::Fetch { kind, id }) => handle_fetch(&ctx, kind, &id).await,
        Some(Commands::Config { save }) => handle_config(&ctx, save),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = ProjectDirs::from("com", "companion", "companion")
        .map(|dirs| dirs.config_dir().to_path_buf());
    let config = match &config_dir {
        Some(dir) => CompanionConfig::load(dir)?,
        None => CompanionConfig::default(),
    }
    .with_env_overrides()?;

    let catalog = HttpCatalog::new(&config.base_url, config.timeout())?;

    let (store, seed): (Box<dyn ContactStore>, bool) = match &cli.data {
        Some(path) => {
            let store = FileStore::new(path);
            let fresh = !store.exists();
            debug!("Using contacts file {} (fresh: {})", path.display(), fresh);
            (Box::new(store), fresh)
        }
        None => (Box::new(InMemoryStore::new()), true),
    };

    let mut api = CompanionApi::new(store, catalog, config.credentials());
    if seed {
        api.seed()?;
    }

    Ok(AppContext {
        api,
        config,
        config_dir,
        data: cli.data.clone(),
    })
}

fn handle_list(ctx: &AppContext, query: Option<&str>) -> Result<()> {
    let result = ctx.api.list_contacts(query)?;
    print!("{}", render_contact_list(&result.listed_contacts));
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.create_empty_contact()?;
    print_messages(&result.messages);
    if let Some(contact) = result.affected_contacts.first() {
        println!("Fill it in with: companion edit {} --first <NAME> ...", contact.id);
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_contact(id)?;
    for contact in &result.listed_contacts {
        print!("{}", render_contact(contact));
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: ContactFields) -> Result<()> {
    let result = ctx.api.update_contact(id, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorite(ctx: &mut AppContext, id: &str, value: &str) -> Result<()> {
    let result = ctx.api.set_favorite(id, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_contact(id)?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_profile(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.contact_profile(id).await?;
    if let Some(entity) = &result.entity {
        print!("{}", render_entity(entity, result.affected_contacts.first()));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_fetch(ctx: &AppContext, kind: ResourceKind, id: &str) -> Result<()> {
    let result = ctx.api.fetch_resource(kind, id).await?;
    if let Some(entity) = &result.entity {
        print!("{}", render_entity(entity, None));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, save: bool) -> Result<()> {
    let data = ctx.data.as_ref().map(|p| p.display().to_string());
    print!("{}", render_config(&ctx.config, data.as_deref()));

    if save {
        let dir = ctx.config_dir.as_ref().ok_or_else(|| {
            CompanionError::Config("No configuration directory on this platform".to_string())
        })?;
        ctx.config.save(dir)?;
        print_messages(&[CmdMessage::success(format!(
            "Saved {}",
            dir.join("config.json").display()
        ))]);
    }
    Ok(())
}
