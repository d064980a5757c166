//! Configuration editors for the Strapi mesh integration.
//!
//! Host state is modelled by [`HostStore`]. Both editors reduce every edit to
//! a pure function over the current value followed by a single host write:
//!
//! - [`ConnectionEditor`] maintains the [`DataSourceValue`] (API URL, token,
//!   request base URL and the draft-content variant).
//! - [`DataTypeEditor`] maintains the [`DataTypeValue`] (the allow-list plus
//!   the request path template).
//!
//! [`Settings`] persists both values, and the last selection, as TOML.
//!
//! [`DataSourceValue`]: strapi_mesh_types::DataSourceValue

mod allow_list;
mod connection;
mod data_type;
mod error;
mod host;
mod settings;

pub use allow_list::{
    add_collection, decode_encoded, migrate_custom, parse_keys, remove_collection,
    set_display_field, set_flat_keys, set_image_field, update_collection,
};
pub use connection::{ConnectionEditor, ConnectionPatch, data_source_value, update_config};
pub use data_type::{DataTypeEditor, DataTypeValue, ID_VARIABLE, PATH_TEMPLATE, VariableDefinition};
pub use error::{ConfigError, ConfigResult};
pub use host::{HostStore, LocalStore};
pub use settings::{DEFAULT_SETTINGS_FILE, Settings};
