pub mod properties;
pub mod property_value;

pub use properties::Properties;
pub use property_value::PropertyValue;
