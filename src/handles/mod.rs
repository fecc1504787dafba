pub mod health_handle;
pub mod reading_handle;
pub mod relay_handle;

pub use health_handle::*;
pub use reading_handle::*;
pub use relay_handle::*;
