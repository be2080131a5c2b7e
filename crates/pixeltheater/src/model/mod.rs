pub mod definition;
pub mod face;
pub mod led_group;
pub mod point;
pub mod runtime;

pub use definition::{EdgeData, FaceData, FaceTypeData, HardwareData, LedGroupData, ModelDefinition, NeighborData, NeighborEntryData, PointData, VertexData};
pub use face::{Edge, Face, FaceType};
pub use led_group::LedGroupView;
pub use point::{Neighbor, Point};
pub use runtime::{DataIntegrityValidation, GeometricValidation, Model, ModelValidation};
