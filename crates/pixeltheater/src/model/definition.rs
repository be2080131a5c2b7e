//! Compile-time model data: the shape a concrete sculpture's geometry module
//! fills in and hands to [`crate::model::Model`].

use super::face::FaceType;

#[derive(Debug, Clone, Copy)]
pub struct PointData {
    pub id: u16,
    pub face_id: u8,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct FaceTypeData {
    pub type_id: u8,
    pub face_type: FaceType,
    pub num_leds: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct VertexData {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct FaceData {
    /// Logical id: original / physical-wiring order. Determines LED offset.
    pub id: u8,
    /// Geometric id: position in the geometric layout, addressed by scenes.
    pub geometric_id: u8,
    pub type_id: u8,
    pub rotation: u8,
    pub vertices: &'static [VertexData],
}

#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    pub face_id: u8,
    pub edge_index: u8,
    pub start_vertex: VertexData,
    pub end_vertex: VertexData,
    /// `None` marks an open boundary edge.
    pub connected_face_id: Option<u8>,
}

#[derive(Debug, Clone, Copy)]
pub struct LedGroupData {
    pub face_type: FaceType,
    pub name: &'static str,
    pub led_indices: &'static [u8],
}

#[derive(Debug, Clone, Copy)]
pub struct NeighborEntryData {
    pub point_id: u16,
    pub distance: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct NeighborData {
    pub point_id: u16,
    pub neighbors: &'static [NeighborEntryData],
}

#[derive(Debug, Clone, Copy)]
pub struct HardwareData {
    pub led_type: &'static str,
    pub color_order: &'static str,
    pub led_diameter_mm: f32,
    pub led_spacing_mm: f32,
    pub max_current_per_led_ma: u16,
    pub avg_current_per_led_ma: u16,
}

/// Frozen geometry for one sculpture. Implementors are expected to be a
/// zero-sized type whose methods return references into `'static` arrays
/// baked in as constants — no heap allocation for the source data itself.
pub trait ModelDefinition {
    const LED_COUNT: usize;
    const FACE_COUNT: usize;
    const SPHERE_RADIUS: f32;

    fn points() -> &'static [PointData];
    fn faces() -> &'static [FaceData];
    fn face_types() -> &'static [FaceTypeData];
    fn edges() -> &'static [EdgeData];
    fn led_groups() -> &'static [LedGroupData];
    fn neighbors() -> &'static [NeighborData];
    fn hardware() -> &'static HardwareData;
}
