pub mod def;
pub mod flags;
pub mod schema;
pub mod settings;
pub mod value;

pub use def::ParamDef;
pub use flags::ParamFlags;
pub use schema::{ParameterSchema, SceneParameterSchema};
pub use settings::{Settings, SettingsProxy};
pub use value::{ParamType, ParamValue};
