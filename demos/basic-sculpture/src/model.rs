//! A two-panel hinged sculpture: two square faces sharing one edge, 4 LEDs each.

use pixeltheater::model::{EdgeData, FaceData, FaceType, FaceTypeData, HardwareData, LedGroupData, NeighborData, NeighborEntryData, PointData, VertexData};
use pixeltheater::ModelDefinition;

pub struct TwoPanelModel;

static VERTS_A: [VertexData; 4] = [
    VertexData { x: 0.0, y: 0.0, z: 0.0 },
    VertexData { x: 1.0, y: 0.0, z: 0.0 },
    VertexData { x: 1.0, y: 1.0, z: 0.0 },
    VertexData { x: 0.0, y: 1.0, z: 0.0 },
];

static VERTS_B: [VertexData; 4] = [
    VertexData { x: 1.0, y: 0.0, z: 0.0 },
    VertexData { x: 2.0, y: 0.0, z: 0.0 },
    VertexData { x: 2.0, y: 1.0, z: 0.0 },
    VertexData { x: 1.0, y: 1.0, z: 0.0 },
];

static POINTS: [PointData; 8] = [
    PointData { id: 0, face_id: 0, x: 0.0, y: 0.0, z: 0.0 },
    PointData { id: 1, face_id: 0, x: 1.0, y: 0.0, z: 0.0 },
    PointData { id: 2, face_id: 0, x: 1.0, y: 1.0, z: 0.0 },
    PointData { id: 3, face_id: 0, x: 0.0, y: 1.0, z: 0.0 },
    PointData { id: 4, face_id: 1, x: 1.0, y: 0.0, z: 0.0 },
    PointData { id: 5, face_id: 1, x: 2.0, y: 0.0, z: 0.0 },
    PointData { id: 6, face_id: 1, x: 2.0, y: 1.0, z: 0.0 },
    PointData { id: 7, face_id: 1, x: 1.0, y: 1.0, z: 0.0 },
];

static FACE_TYPES: [FaceTypeData; 1] = [FaceTypeData {
    type_id: 0,
    face_type: FaceType::Square,
    num_leds: 4,
}];

static FACES: [FaceData; 2] = [
    FaceData { id: 0, geometric_id: 0, type_id: 0, rotation: 0, vertices: &VERTS_A },
    FaceData { id: 1, geometric_id: 1, type_id: 0, rotation: 0, vertices: &VERTS_B },
];

static EDGES: [EdgeData; 2] = [
    EdgeData {
        face_id: 0,
        edge_index: 1,
        start_vertex: VertexData { x: 1.0, y: 0.0, z: 0.0 },
        end_vertex: VertexData { x: 1.0, y: 1.0, z: 0.0 },
        connected_face_id: Some(1),
    },
    EdgeData {
        face_id: 1,
        edge_index: 3,
        start_vertex: VertexData { x: 1.0, y: 1.0, z: 0.0 },
        end_vertex: VertexData { x: 1.0, y: 0.0, z: 0.0 },
        connected_face_id: Some(0),
    },
];

static GROUPS: [LedGroupData; 1] = [LedGroupData {
    face_type: FaceType::Square,
    name: "all",
    led_indices: &[0, 1, 2, 3],
}];

static NEIGHBORS_1: [NeighborEntryData; 1] = [NeighborEntryData { point_id: 4, distance: 0.0 }];
static NEIGHBORS_2: [NeighborEntryData; 1] = [NeighborEntryData { point_id: 7, distance: 0.0 }];
static NEIGHBORS_4: [NeighborEntryData; 1] = [NeighborEntryData { point_id: 1, distance: 0.0 }];
static NEIGHBORS_7: [NeighborEntryData; 1] = [NeighborEntryData { point_id: 2, distance: 0.0 }];

static NEIGHBORS: [NeighborData; 4] = [
    NeighborData { point_id: 1, neighbors: &NEIGHBORS_1 },
    NeighborData { point_id: 2, neighbors: &NEIGHBORS_2 },
    NeighborData { point_id: 4, neighbors: &NEIGHBORS_4 },
    NeighborData { point_id: 7, neighbors: &NEIGHBORS_7 },
];

static HARDWARE: HardwareData = HardwareData {
    led_type: "WS2812B",
    color_order: "GRB",
    led_diameter_mm: 5.0,
    led_spacing_mm: 10.0,
    max_current_per_led_ma: 60,
    avg_current_per_led_ma: 20,
};

impl ModelDefinition for TwoPanelModel {
    const LED_COUNT: usize = 8;
    const FACE_COUNT: usize = 2;
    const SPHERE_RADIUS: f32 = 0.0;

    fn points() -> &'static [PointData] {
        &POINTS
    }
    fn faces() -> &'static [FaceData] {
        &FACES
    }
    fn face_types() -> &'static [FaceTypeData] {
        &FACE_TYPES
    }
    fn edges() -> &'static [EdgeData] {
        &EDGES
    }
    fn led_groups() -> &'static [LedGroupData] {
        &GROUPS
    }
    fn neighbors() -> &'static [NeighborData] {
        &NEIGHBORS
    }
    fn hardware() -> &'static HardwareData {
        &HARDWARE
    }
}
