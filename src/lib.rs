//! In-memory key/value property store with typed accessors and an INI loader
//!
//! ```no_run
//! use propstore::{load_ini, IniOptions};
//!
//! let props = load_ini(&IniOptions::new("app.ini").concat_section_name(true))?;
//! let port = props.uint("server.port", 8080)?;
//! # Ok::<(), propstore::PropertiesError>(())
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the store and its error type for easier access
pub use error::{PropertiesError, Result};
pub use models::{Properties, PropertyValue};

// Re-export loader entry points
pub use loader::{load_ini, load_ini_str, IniOptions, Load, LoaderOptions};
