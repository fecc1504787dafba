pub mod relay_service;

pub use relay_service::{RelayCommand, RelayMode, RelayService, RelaySnapshot};
