pub mod ini;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Properties;

pub use ini::{load_ini, load_ini_str, IniOptions};

/// A source that can produce a property store
pub trait Load {
    fn load(&self) -> Result<Properties>;
}

/// Loader selection, tagged by kind so it can be read from a host config file
///
/// ```json
/// { "kind": "ini", "filename": "app.ini", "concat_section_name": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoaderOptions {
    Ini(IniOptions),
}

impl Load for LoaderOptions {
    fn load(&self) -> Result<Properties> {
        match self {
            LoaderOptions::Ini(options) => options.load(),
        }
    }
}

impl From<IniOptions> for LoaderOptions {
    fn from(options: IniOptions) -> Self {
        LoaderOptions::Ini(options)
    }
}
