//! strapi-mesh: Strapi content picker for the command line
//!
//! Edits the same host values the mesh UI edits (connection, allowed content
//! types, selected document) and keeps them in a TOML settings file.
//!
//! Usage:
//!   strapi-mesh connect --url https://cms.example.com --token <TOKEN>
//!   strapi-mesh allow flat "heroes,articles" --display-field title
//!   strapi-mesh collections
//!   strapi-mesh entries heroes
//!   strapi-mesh select heroes <DOCUMENT_ID>

mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strapi_mesh_config::{
    ConnectionEditor, ConnectionPatch, DataTypeEditor, HostStore, LocalStore, Settings,
};
use strapi_mesh_gateway::{DataResource, EntryFetcher, HttpDataResource, HttpResourceConfig};
use strapi_mesh_picker::{PickerPhase, PickerSession, PickerView};
use strapi_mesh_types::{ContentTypeConfig, SelectionResult};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "strapi-mesh")]
#[command(about = "Browse and select Strapi documents for a mesh data source")]
struct Args {
    /// Path to the settings file
    #[arg(short, long, default_value = strapi_mesh_config::DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the stored settings
    Show,

    /// Set the API URL and token
    Connect {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        token: Option<String>,
        /// Request draft content through the unpublished variant
        #[arg(long)]
        drafts: Option<bool>,
    },

    /// Edit the allowed content types
    Allow {
        #[command(subcommand)]
        action: AllowAction,
    },

    /// List the collections the picker offers
    Collections,

    /// List the entries of a collection
    Entries {
        /// Plural name of the collection
        collection: String,
    },

    /// Select an entry and store it as the current value
    Select {
        collection: String,
        document_id: String,
    },

    /// Fetch the currently selected document
    Current,
}

#[derive(Subcommand, Debug)]
enum AllowAction {
    /// Print the allow-list
    Show,

    /// Comma-separated collection keys sharing one display/image field
    Flat {
        keys: String,
        #[arg(long)]
        display_field: Option<String>,
        #[arg(long)]
        image_field: Option<String>,
    },

    /// Append a per-collection record
    Add {
        #[arg(long)]
        plural: String,
        #[arg(long, default_value = "")]
        single: String,
        /// Friendly name shown in the picker
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        uid: Option<String>,
        #[arg(long)]
        display_field: Option<String>,
        #[arg(long)]
        image_field: Option<String>,
    },

    /// Remove the per-collection record at INDEX
    Remove { index: usize },

    /// Replace the allow-list with a JSON-encoded [{"single","plural"}] list
    Import { encoded: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let mut settings = Settings::load_from(&args.settings)
        .with_context(|| format!("failed to load settings from {}", args.settings.display()))?;

    match args.command {
        Command::Show => print!("{}", render::settings(&settings)),
        Command::Connect { url, token, drafts } => {
            let editor = ConnectionEditor::new(LocalStore::new(settings.data_source.clone()));
            editor.mount();
            editor.update(ConnectionPatch {
                api_url: url,
                api_token: token,
            });
            settings.data_source = editor.value();
            if let Some(drafts) = drafts {
                settings.unpublished = drafts;
            }
            save(&settings, &args.settings)?;
            print!("{}", render::settings(&settings));
        }
        Command::Allow { action } => {
            allow(&mut settings, action)?;
            save(&settings, &args.settings)?;
        }
        Command::Collections => {
            let session = session(&settings, LocalStore::new(settings.selection.clone()))?;
            let view = mounted(&session).await?;
            print!("{}", render::collections(&view));
        }
        Command::Entries { collection } => {
            let session = session(&settings, LocalStore::new(settings.selection.clone()))?;
            mounted(&session).await?;
            session.open_collection_named(&collection).await?;
            let view = ready(&session).await?;
            print!("{}", render::rows(&view));
            if let Some(admin) = &view.admin_url {
                println!("\nAdmin: {admin}");
            }
        }
        Command::Select {
            collection,
            document_id,
        } => {
            let store = Arc::new(LocalStore::new(settings.selection.clone()));
            let session = session(&settings, Arc::clone(&store))?;
            mounted(&session).await?;
            session.open_collection_named(&collection).await?;
            ready(&session).await?;
            let selection = session.choose_entry(&document_id).await?;

            settings.selection = store.get();
            save(&settings, &args.settings)?;
            println!(
                "Selected {} from {}",
                selection.id,
                selection.content_type_plural_name.as_deref().unwrap_or_default()
            );
        }
        Command::Current => {
            let Some(SelectionResult {
                id,
                content_type_plural_name: Some(plural),
            }) = settings.selection.clone()
            else {
                bail!("no document selected");
            };
            let fetcher = EntryFetcher::new(resource(&settings)?, &settings.connection().api_token);
            let entry = fetcher
                .fetch_entry(&plural, &id)
                .await
                .with_context(|| format!("failed to fetch {plural}/{id}"))?;
            println!("{}", render::entry(&entry)?);
        }
    }

    Ok(())
}

fn allow(settings: &mut Settings, action: AllowAction) -> Result<()> {
    let editor = DataTypeEditor::new(LocalStore::new(settings.data_type.clone()));

    match action {
        AllowAction::Show => {}
        AllowAction::Flat {
            keys,
            display_field,
            image_field,
        } => {
            editor.set_allowed_content_types(&keys)?;
            if let Some(field) = display_field {
                editor.set_display_field(&field)?;
            }
            if let Some(field) = image_field {
                editor.set_image_field(&field)?;
            }
        }
        AllowAction::Add {
            plural,
            single,
            name,
            uid,
            display_field,
            image_field,
        } => {
            let mut config = ContentTypeConfig::new(name, single, plural);
            config.uid = uid;
            config.display_field = display_field;
            config.image_field = image_field;
            editor.add_content_type(config)?;
        }
        AllowAction::Remove { index } => editor.remove_content_type(index)?,
        AllowAction::Import { encoded } => editor
            .import_encoded(&encoded)
            .context("encoded content type list was not imported")?,
    }

    settings.data_type = editor.value();
    print!("{}", render::allow_list(&settings.data_type.custom));
    Ok(())
}

fn resource(settings: &Settings) -> Result<Arc<dyn DataResource>> {
    let config = HttpResourceConfig::from_data_source(&settings.data_source, settings.unpublished);
    debug!(
        "Using base URL {} with {} extra parameter(s)",
        config.base_url,
        config.parameters.len()
    );
    let resource = HttpDataResource::new(config).context("no connection configured")?;
    Ok(Arc::new(resource))
}

fn session<S: HostStore<Option<SelectionResult>>>(
    settings: &Settings,
    selection: S,
) -> Result<PickerSession<S>> {
    Ok(PickerSession::new(
        resource(settings)?,
        settings.connection().clone(),
        settings.data_type.custom.clone(),
        selection,
    ))
}

/// Mounts the picker and fails on anything but a usable collection list.
async fn mounted<S: HostStore<Option<SelectionResult>>>(
    session: &PickerSession<S>,
) -> Result<PickerView> {
    session.mount().await?;
    let view = session.snapshot().await;
    if view.phase == PickerPhase::NoConnection {
        bail!("no connection configured, run `strapi-mesh connect`");
    }
    if let Some(message) = view.phase.error_message() {
        bail!("{message}");
    }
    Ok(view)
}

async fn ready<S: HostStore<Option<SelectionResult>>>(
    session: &PickerSession<S>,
) -> Result<PickerView> {
    let view = session.snapshot().await;
    if let Some(message) = view.phase.error_message() {
        bail!("{message}");
    }
    Ok(view)
}

fn save(settings: &Settings, path: &Path) -> Result<()> {
    settings
        .save_to(path)
        .with_context(|| format!("failed to save settings to {}", path.display()))?;
    info!("Settings written to {}", path.display());
    Ok(())
}
