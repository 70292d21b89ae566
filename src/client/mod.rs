//! Client side of the upload/search flow
//!
//! [`api`] talks to the server. [`upload`] and [`search`] hold the interaction
//! state; they never touch the network themselves, so the terminal front end
//! (or a test) decides when requests are sent and feeds the results back.

pub mod api;
pub mod notify;
pub mod search;
pub mod upload;

pub use api::{ApiClient, ClientError};
pub use notify::{Notifications, Toast, ToastKind};
pub use search::{SearchFlow, SearchTicket};
pub use upload::{AppStatus, UploadFlow};
