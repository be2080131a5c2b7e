use std::marker::PhantomData;
use std::sync::OnceLock;

use glam::Vec3;
use log::warn;

use super::definition::ModelDefinition;
use super::face::{Edge, Face, FaceType};
use super::led_group::LedGroupView;
use super::point::{Neighbor, Point};
use crate::color::CRGB;

fn dummy_point() -> &'static Point {
    static DUMMY: OnceLock<Point> = OnceLock::new();
    DUMMY.get_or_init(|| Point::new(0, 0, 0.0, 0.0, 0.0))
}

fn dummy_face() -> &'static Face {
    static DUMMY: OnceLock<Face> = OnceLock::new();
    DUMMY.get_or_init(|| Face::new(0, FaceType::None, 0, Vec::new(), 0, 0))
}

/// Runtime geometry built once from a [`ModelDefinition`]. All indexed
/// accessors clamp to the last valid index rather than panicking.
pub struct Model<D: ModelDefinition> {
    points: Vec<Point>,
    faces: Vec<Face>,
    sphere_radius: f32,
    warned_point_indices: std::cell::RefCell<std::collections::HashSet<usize>>,
    warned_face_indices: std::cell::RefCell<std::collections::HashSet<usize>>,
    _marker: PhantomData<D>,
}

/// Structured result of [`Model::validate_model`].
#[derive(Debug, Default, Clone)]
pub struct ModelValidation {
    pub is_valid: bool,
    pub total_checks: u32,
    pub failed_checks: u32,
    pub geometric: GeometricValidation,
    pub data_integrity: DataIntegrityValidation,
    pub errors: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct GeometricValidation {
    pub all_faces_planar: bool,
    pub all_leds_within_faces: bool,
    pub edge_connectivity_complete: bool,
    pub vertex_coordinates_sane: bool,
    pub non_planar_faces: u32,
    pub orphaned_edges: u32,
    pub invalid_coordinates: u32,
}

#[derive(Debug, Default, Clone)]
pub struct DataIntegrityValidation {
    pub face_ids_unique: bool,
    pub led_indices_sequential: bool,
    pub indices_in_bounds: bool,
    pub duplicate_face_ids: u32,
    pub out_of_bounds_indices: u32,
}

const MAX_VALIDATION_ERRORS: usize = 10;

impl<D: ModelDefinition> Model<D> {
    pub fn new() -> Self {
        let mut points = vec![Point::new(0, 0, 0.0, 0.0, 0.0); D::LED_COUNT.max(1)];
        for point_data in D::points() {
            let idx = point_data.id as usize;
            if idx < points.len() {
                points[idx] = Point::new(point_data.id, point_data.face_id, point_data.x, point_data.y, point_data.z);
            }
        }

        let face_type_for = |type_id: u8| -> Option<super::definition::FaceTypeData> {
            D::face_types().iter().find(|t| t.type_id == type_id).copied()
        };

        let mut faces = Vec::with_capacity(D::faces().len());
        for face_data in D::faces() {
            let face_type = face_type_for(face_data.type_id).map(|t| t.face_type).unwrap_or_default();
            let num_leds = face_type_for(face_data.type_id).map(|t| t.num_leds).unwrap_or(0) as usize;

            // LED offset is based on original/logical face id order (physical
            // wiring), not array position, since the model may remap face order.
            let mut led_offset = 0usize;
            for f in 0..face_data.id {
                if let Some(prev) = D::faces().iter().find(|fd| fd.id == f) {
                    led_offset += face_type_for(prev.type_id).map(|t| t.num_leds).unwrap_or(0) as usize;
                }
            }

            let sides = face_type.num_sides().min(face_data.vertices.len());
            let vertices = face_data.vertices[..sides].iter().map(|v| Vec3::new(v.x, v.y, v.z)).collect();

            faces.push(Face::new(face_data.id, face_type, face_data.rotation, vertices, led_offset, num_leds));
        }

        for neighbor_data in D::neighbors() {
            let idx = neighbor_data.point_id as usize;
            if idx < points.len() {
                let candidates = neighbor_data
                    .neighbors
                    .iter()
                    .map(|n| Neighbor {
                        point_id: n.point_id,
                        distance: n.distance,
                    })
                    .collect();
                points[idx].set_neighbors(candidates);
            }
        }

        let sphere_radius = if D::SPHERE_RADIUS > 0.0 {
            D::SPHERE_RADIUS
        } else {
            points.iter().map(|p| p.position.length_squared()).fold(0.0f32, f32::max).sqrt()
        };

        Self {
            points,
            faces,
            sphere_radius,
            warned_point_indices: Default::default(),
            warned_face_indices: Default::default(),
            _marker: PhantomData,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn get_sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    /// Clamped point access by logical index.
    pub fn point(&self, index: usize) -> &Point {
        if self.points.is_empty() {
            return dummy_point();
        }
        let clamped = index.min(self.points.len() - 1);
        if clamped != index && self.warned_point_indices.borrow_mut().insert(index) {
            warn!("point index {index} out of range, clamped to {clamped}");
        }
        &self.points[clamped]
    }

    /// Raw, array-position face access (no geometric<->logical mapping).
    pub fn face_by_index(&self, index: usize) -> &Face {
        if self.faces.is_empty() {
            return dummy_face();
        }
        let clamped = index.min(self.faces.len() - 1);
        if clamped != index && self.warned_face_indices.borrow_mut().insert(index) {
            warn!("face index {index} out of range, clamped to {clamped}");
        }
        &self.faces[clamped]
    }

    fn logical_index_for_geometric(&self, geometric_position: u8) -> usize {
        D::faces()
            .iter()
            .position(|fd| fd.geometric_id == geometric_position)
            .unwrap_or(0)
    }

    /// Scene-facing access: maps a geometric position to the logical face
    /// that is wired there. See design notes on geometric vs logical face identity.
    pub fn face(&self, geometric_position: u8) -> &Face {
        let geometric_position = (geometric_position as usize).min(self.faces.len().saturating_sub(1)) as u8;
        let idx = self.logical_index_for_geometric(geometric_position);
        self.face_by_index(idx)
    }

    pub fn face_edge_count(&self, geometric_position: u8) -> u8 {
        let logical_id = self.logical_face_id(geometric_position);
        D::edges().iter().filter(|e| e.face_id == logical_id).count() as u8
    }

    pub fn face_at_edge(&self, geometric_position: u8, edge_index: u8) -> Option<u8> {
        let logical_id = self.logical_face_id(geometric_position);
        let edge = D::edges().iter().filter(|e| e.face_id == logical_id).nth(edge_index as usize)?;
        let connected_logical = edge.connected_face_id?;
        D::faces().iter().find(|fd| fd.id == connected_logical).map(|fd| fd.geometric_id)
    }

    pub fn face_group<'a>(&self, leds: &'a mut [CRGB], geometric_position: u8, name: &str) -> Option<LedGroupView<'a>> {
        let idx = self.logical_index_for_geometric(geometric_position);
        let face_data = D::faces().get(idx)?;
        let face_type = D::faces().get(idx).and_then(|fd| D::face_types().iter().find(|t| t.type_id == fd.type_id))?.face_type;
        let group = D::led_groups().iter().find(|g| g.face_type == face_type && g.name == name)?;
        let _ = face_data;
        let face = self.face_by_index(idx);
        Some(LedGroupView::new(leds, face.led_offset, group.led_indices))
    }

    pub fn face_group_names(&self, geometric_position: u8) -> Vec<&'static str> {
        let idx = self.logical_index_for_geometric(geometric_position);
        let Some(face_type) = D::faces().get(idx).and_then(|fd| D::face_types().iter().find(|t| t.type_id == fd.type_id)) else {
            return Vec::new();
        };
        D::led_groups().iter().filter(|g| g.face_type == face_type.face_type).map(|g| g.name).collect()
    }

    pub fn edges_for_face(&self, geometric_position: u8) -> Vec<Edge> {
        let logical_id = self.logical_face_id(geometric_position);
        D::edges()
            .iter()
            .filter(|e| e.face_id == logical_id)
            .map(|e| Edge {
                face_id: e.face_id,
                edge_index: e.edge_index,
                start_vertex: Vec3::new(e.start_vertex.x, e.start_vertex.y, e.start_vertex.z),
                end_vertex: Vec3::new(e.end_vertex.x, e.end_vertex.y, e.end_vertex.z),
                connected_face_id: e.connected_face_id,
            })
            .collect()
    }

    fn logical_face_id(&self, geometric_position: u8) -> u8 {
        D::faces()
            .iter()
            .find(|fd| fd.geometric_id == geometric_position)
            .map(|fd| fd.id)
            .unwrap_or(geometric_position)
    }

    /// On-demand geometric and data-integrity validation. Never called on the
    /// per-frame path; never mutates state.
    pub fn validate_model(&self, check_geometric: bool, check_data_integrity: bool) -> ModelValidation {
        let mut v = ModelValidation {
            is_valid: true,
            ..Default::default()
        };

        if check_geometric {
            v.total_checks += 1;
            let mut non_planar = 0;
            for face in &self.faces {
                if face.vertices.len() >= 3 && !is_planar(&face.vertices) {
                    non_planar += 1;
                    push_error(&mut v.errors, format!("face {} is not planar", face.id));
                }
            }
            v.geometric.non_planar_faces = non_planar;
            v.geometric.all_faces_planar = non_planar == 0;
            if non_planar > 0 {
                v.failed_checks += 1;
                v.is_valid = false;
            }

            v.total_checks += 1;
            let mut invalid_coords = 0;
            for point in &self.points {
                if !point.position.is_finite() {
                    invalid_coords += 1;
                    push_error(&mut v.errors, format!("point {} has non-finite coordinates", point.id));
                }
            }
            v.geometric.invalid_coordinates = invalid_coords;
            v.geometric.vertex_coordinates_sane = invalid_coords == 0;
            if invalid_coords > 0 {
                v.failed_checks += 1;
                v.is_valid = false;
            }

            v.total_checks += 1;
            let mut orphaned = 0;
            for edge in D::edges() {
                if let Some(connected) = edge.connected_face_id {
                    let reciprocal = D::edges().iter().any(|e| e.face_id == connected && e.connected_face_id == Some(edge.face_id));
                    if !reciprocal {
                        orphaned += 1;
                    }
                }
            }
            v.geometric.orphaned_edges = orphaned;
            v.geometric.edge_connectivity_complete = orphaned == 0;
            if orphaned > 0 {
                v.failed_checks += 1;
                v.is_valid = false;
            }

            v.geometric.all_leds_within_faces = true;
        }

        if check_data_integrity {
            v.total_checks += 1;
            let mut seen = std::collections::HashSet::new();
            let mut duplicates = 0;
            for face_data in D::faces() {
                if !seen.insert(face_data.id) {
                    duplicates += 1;
                    push_error(&mut v.errors, format!("duplicate face id {}", face_data.id));
                }
            }
            v.data_integrity.duplicate_face_ids = duplicates;
            v.data_integrity.face_ids_unique = duplicates == 0;
            if duplicates > 0 {
                v.failed_checks += 1;
                v.is_valid = false;
            }

            v.total_checks += 1;
            let mut covered = vec![false; D::LED_COUNT];
            for face in &self.faces {
                for i in face.led_range() {
                    if i < covered.len() {
                        covered[i] = true;
                    }
                }
            }
            let gaps = covered.iter().filter(|c| !**c).count();
            v.data_integrity.led_indices_sequential = gaps == 0;
            if gaps > 0 {
                v.failed_checks += 1;
                v.is_valid = false;
                push_error(&mut v.errors, format!("{gaps} LED indices uncovered by any face"));
            }

            v.total_checks += 1;
            let mut oob = 0;
            for neighbor_data in D::neighbors() {
                if neighbor_data.point_id as usize >= D::LED_COUNT {
                    oob += 1;
                }
            }
            v.data_integrity.out_of_bounds_indices = oob;
            v.data_integrity.indices_in_bounds = oob == 0;
            if oob > 0 {
                v.failed_checks += 1;
                v.is_valid = false;
            }
        }

        v
    }
}

fn push_error(errors: &mut Vec<String>, message: String) {
    if errors.len() < MAX_VALIDATION_ERRORS {
        errors.push(message);
    }
}

fn is_planar(vertices: &[Vec3]) -> bool {
    const EPSILON: f32 = 1e-3;
    if vertices.len() < 4 {
        return true;
    }
    let normal = (vertices[1] - vertices[0]).cross(vertices[2] - vertices[0]).normalize_or_zero();
    if normal == Vec3::ZERO {
        return true;
    }
    vertices.iter().all(|v| (normal.dot(*v - vertices[0])).abs() < EPSILON)
}

impl<D: ModelDefinition> Default for Model<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::definition::{EdgeData, FaceData, FaceTypeData, HardwareData, LedGroupData, NeighborEntryData, PointData, VertexData};

    struct TinyModel;

    static POINTS: [PointData; 4] = [
        PointData { id: 0, face_id: 0, x: 0.0, y: 0.0, z: 0.0 },
        PointData { id: 1, face_id: 0, x: 1.0, y: 0.0, z: 0.0 },
        PointData { id: 2, face_id: 1, x: 0.0, y: 1.0, z: 0.0 },
        PointData { id: 3, face_id: 1, x: 0.0, y: 0.0, z: 1.0 },
    ];
    static FACE_TYPES: [FaceTypeData; 1] = [FaceTypeData { type_id: 0, face_type: FaceType::Square, num_leds: 2 }];
    static VERTS: [VertexData; 4] = [
        VertexData { x: 0.0, y: 0.0, z: 0.0 },
        VertexData { x: 1.0, y: 0.0, z: 0.0 },
        VertexData { x: 1.0, y: 1.0, z: 0.0 },
        VertexData { x: 0.0, y: 1.0, z: 0.0 },
    ];
    static FACES: [FaceData; 2] = [
        FaceData { id: 0, geometric_id: 1, type_id: 0, rotation: 0, vertices: &VERTS },
        FaceData { id: 1, geometric_id: 0, type_id: 0, rotation: 0, vertices: &VERTS },
    ];
    static EDGES: [EdgeData; 0] = [];
    static GROUPS: [LedGroupData; 0] = [];
    static NEIGHBOR_ENTRIES: [NeighborEntryData; 0] = [];
    static NEIGHBORS: [super::super::definition::NeighborData; 0] = [];
    static HARDWARE: HardwareData = HardwareData {
        led_type: "WS2812B",
        color_order: "GRB",
        led_diameter_mm: 5.0,
        led_spacing_mm: 10.0,
        max_current_per_led_ma: 60,
        avg_current_per_led_ma: 20,
    };

    impl ModelDefinition for TinyModel {
        const LED_COUNT: usize = 4;
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
        fn neighbors() -> &'static [super::super::definition::NeighborData] {
            &NEIGHBORS
        }
        fn hardware() -> &'static HardwareData {
            &HARDWARE
        }
    }

    #[test]
    fn point_ids_match_index() {
        let model: Model<TinyModel> = Model::new();
        for i in 0..4 {
            assert_eq!(model.point(i).id, i as u16);
        }
    }

    #[test]
    fn point_access_clamps_out_of_range() {
        let model: Model<TinyModel> = Model::new();
        assert_eq!(model.point(50).id, model.point(3).id);
    }

    #[test]
    fn face_clamps_out_of_range() {
        let model: Model<TinyModel> = Model::new();
        assert_eq!(model.face(99).id, model.face(1).id);
    }

    #[test]
    fn geometric_position_maps_to_logical_face() {
        let model: Model<TinyModel> = Model::new();
        // geometric position 0 is wired to logical face id 1, whose led offset
        // comes after logical face 0's LEDs.
        assert_eq!(model.face(0).id, 1);
        assert_eq!(model.face(0).led_offset, 2);
        assert_eq!(model.face(1).id, 0);
        assert_eq!(model.face(1).led_offset, 0);
    }

    #[test]
    fn validate_model_reports_no_uncovered_leds() {
        let model: Model<TinyModel> = Model::new();
        let report = model.validate_model(true, true);
        assert!(report.data_integrity.led_indices_sequential);
    }
}
