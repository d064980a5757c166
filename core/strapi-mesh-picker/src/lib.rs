//! Document picker for the Strapi mesh integration.
//!
//! [`DocumentPicker`] is the pure state machine, [`PickerSession`] runs it
//! against a [`DataResource`](strapi_mesh_gateway::DataResource) and a host
//! store, and [`PickerView`] is what gets rendered.

mod error;
mod session;
mod state;
mod view;

pub use error::{PickerError, PickerResult};
pub use session::PickerSession;
pub use state::{DocumentPicker, FetchTicket, PickerPhase};
pub use view::{EntryRow, PickerView};
