pub mod api;
pub mod interactive;
pub mod logging;
pub mod output;
pub mod settings;

pub use api::{ApiClient, ApiConfig, ApiError, Client, NewClient, Program};
pub use interactive::InteractiveRegistry;
pub use settings::{Settings, SettingsManager};
