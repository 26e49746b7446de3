//! Terminal rendering. Every function returns a `String` so output can be
//! tested without capturing stdout.

use chrono::{DateTime, Utc};
use colored::Colorize;
use companion::api::{CmdMessage, MessageLevel};
use companion::catalog::{RemoteEntity, ResourceKind};
use companion::config::CompanionConfig;
use companion::model::ContactRecord;
use std::fmt::Write;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 28;
const ID_WIDTH: usize = 18;
const FAVORITE_MARKER: &str = "★";
const NO_NAME: &str = "No Name";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// The sidebar list: super name (or "No Name"), a star for favorites, the id.
pub(super) fn render_contact_list(contacts: &[ContactRecord]) -> String {
    if contacts.is_empty() {
        return format!("{}\n", "No contacts".italic().dimmed());
    }

    let mut out = String::new();
    for contact in contacts {
        let name = contact
            .super_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| n.to_string());
        let mut label = name.clone().unwrap_or_else(|| NO_NAME.to_string());
        if contact.is_favorite() {
            label.push(' ');
            label.push_str(FAVORITE_MARKER);
        }
        let padding = NAME_WIDTH.saturating_sub(label.width());

        let styled = if name.is_some() {
            label.normal()
        } else {
            label.italic().dimmed()
        };
        let id = format!("{:<width$}", contact.id, width = ID_WIDTH);

        let _ = writeln!(
            out,
            "  {}{} {} {}",
            styled,
            " ".repeat(padding),
            id.dimmed(),
            format_time_ago(contact.created_at).dimmed()
        );
    }
    out
}

/// Local detail page for one contact.
pub(super) fn render_contact(contact: &ContactRecord) -> String {
    let mut out = String::new();
    let title = contact
        .full_name()
        .unwrap_or_else(|| NO_NAME.to_string());
    let star = if contact.is_favorite() {
        format!(" {}", FAVORITE_MARKER.yellow())
    } else {
        String::new()
    };
    let _ = writeln!(out, "{}{}", title.bold(), star);

    let fields = [
        ("Super name", contact.super_name.as_deref()),
        ("Avatar", contact.avatar.as_deref()),
        ("Profile", contact.url.as_deref()),
        ("Marvel id", contact.marvel_id.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "{:<12}{}", format!("{}:", label).dimmed(), value);
        }
    }
    let _ = writeln!(
        out,
        "{:<12}{} ({})",
        "Created:".dimmed(),
        contact.created_at.to_rfc3339(),
        format_time_ago(contact.created_at).trim()
    );
    let _ = writeln!(out, "{:<12}{}", "Id:".dimmed(), contact.id);

    if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(out, "\n{}", notes);
    }
    out
}

/// Catalog detail page. With a contact it is that contact's character page.
pub(super) fn render_entity(entity: &RemoteEntity, contact: Option<&ContactRecord>) -> String {
    let mut out = String::new();

    let title = if entity.title().is_empty() {
        NO_NAME.italic().to_string()
    } else {
        entity.title().bold().to_string()
    };
    let _ = writeln!(out, "{} {}", title, format!("({})", entity.kind()).dimmed());

    if let Some(contact) = contact {
        let _ = writeln!(
            out,
            "{}",
            format!("Contact: {}", contact.id).dimmed()
        );
    }

    match entity.description() {
        Some(description) => {
            let _ = writeln!(out, "\n{}", description);
        }
        None => {
            let _ = writeln!(out, "\n{}", "No Description".italic().dimmed());
        }
    }

    if let Some(image) = entity.image_url() {
        let _ = writeln!(out, "\n{} {}", "Image:".dimmed(), image);
    }

    for (kind, list) in entity.related() {
        let linked: Vec<(String, &str)> = list
            .items
            .iter()
            .filter_map(|item| item.resource_id().map(|id| (id, item.name.as_str())))
            .collect();
        if linked.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", section_heading(kind).bold());
        for (id, name) in linked {
            let reference = format!("{} {}", kind, id);
            let _ = writeln!(out, "  {:<18}{}", reference.cyan(), name);
        }
    }

    let urls = entity.urls();
    if !urls.is_empty() {
        let _ = writeln!(out, "\n{}", "External Links".bold());
        for url in urls {
            let _ = writeln!(out, "  {:<12}{}", url.label(), url.url.underline());
        }
    }
    out
}

pub(super) fn render_config(config: &CompanionConfig, data: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "base-url = {}", config.base_url);
    let _ = writeln!(out, "api-key  = {}", config.masked_api_key());
    let _ = writeln!(out, "hash     = {}", if config.hash.is_empty() { "" } else { "(set)" });
    let _ = writeln!(out, "ts       = {}", config.ts);
    let _ = writeln!(
        out,
        "timeout  = {}",
        config
            .timeout_seconds
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string())
    );
    let _ = writeln!(out, "data     = {}", data.unwrap_or("(in memory)"));
    out
}

fn section_heading(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Character => "Characters",
        ResourceKind::Comic => "Comics",
        ResourceKind::Series => "Series",
        ResourceKind::Story => "Stories",
        ResourceKind::Event => "Events",
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
