use clap::{Args, Parser, Subcommand};
use companion::catalog::ResourceKind;
use companion::model::ContactFields;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "companion", bin_name = "companion", version)]
#[command(about = "Contacts companion for the comics catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep contacts in this JSON file instead of in memory
    #[arg(long, global = true, env = "COMPANION_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Fuzzy search over first, last and super names
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Create an empty contact
    #[command(alias = "n")]
    New,

    /// Show a contact's local details
    #[command(alias = "v")]
    View { id: String },

    /// Change some of a contact's fields
    #[command(alias = "e")]
    Edit {
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Star or unstar a contact ("true" stars, anything else unstars)
    #[command(alias = "fav")]
    Favorite { id: String, value: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { id: String },

    /// Show the catalog character behind a contact
    #[command(alias = "p")]
    Profile { id: String },

    /// Show a catalog entity (character, comic, series, story, event)
    #[command(alias = "f")]
    Fetch { kind: ResourceKind, id: String },

    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// First name
    #[arg(long)]
    pub first: Option<String>,

    /// Last name
    #[arg(long)]
    pub last: Option<String>,

    /// Super hero name
    #[arg(long = "super-name")]
    pub super_name: Option<String>,

    /// Avatar URL
    #[arg(long)]
    pub avatar: Option<String>,

    /// External profile link
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Catalog character id
    #[arg(long = "marvel-id")]
    pub marvel_id: Option<String>,
}

impl From<FieldArgs> for ContactFields {
    fn from(args: FieldArgs) -> Self {
        ContactFields {
            first: args.first,
            last: args.last,
            super_name: args.super_name,
            avatar: args.avatar,
            url: args.url,
            notes: args.notes,
            favorite: None,
            marvel_id: args.marvel_id,
        }
    }
}
