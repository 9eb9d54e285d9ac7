//! The car-wash diorama: every solid part of the installation at fixed
//! world coordinates, plus the dashed water-flow paths and part metadata.
//!
//! Measurements are meters. The canopy is `CANOPY_LENGTH` x `CANOPY_WIDTH`
//! at `CANOPY_HEIGHT`; the harvesting chain runs along its front-right
//! edge: roof -> main gutter -> downspout -> ground pipe -> filter ->
//! pump -> underground tank. The tank sits below grade (`y = -0.8`) with
//! its manhole cover flush with the ground.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use super::flow::FlowLine;
use super::mesh::{hex_color, lay_along_x, MeshBuffer};

/// Canopy length along X, meters.
pub const CANOPY_LENGTH: f32 = 12.0;
/// Canopy width along Z, meters.
pub const CANOPY_WIDTH: f32 = 8.0;
/// Canopy roof height, meters.
pub const CANOPY_HEIGHT: f32 = 3.2;

/// Which display group a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartGroup {
    /// Harvesting structure: canopy, gutters, filter, pump, tank.
    Structure,
    /// Wash-bay equipment: lanes, drain, washer, car, arch.
    Wash,
}

/// Inspection metadata for a named part of the installation.
#[derive(Debug, Clone)]
pub struct PartInfo {
    /// Short display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Representative world-space anchor point.
    pub anchor: Vec3,
    /// Display group.
    pub group: PartGroup,
}

/// The complete static scene: meshes, flow lines, grid, and part metadata.
#[derive(Debug, Clone)]
pub struct Diorama {
    /// Ground plane.
    pub ground: MeshBuffer,
    /// Harvesting structure geometry.
    pub structure: MeshBuffer,
    /// Wash-bay geometry.
    pub wash: MeshBuffer,
    /// Dashed water-flow polylines.
    pub flow_lines: Vec<FlowLine>,
    /// Helper grid segments at grade level.
    pub grid: Vec<[Vec3; 2]>,
    /// Named parts for inspection.
    pub parts: Vec<PartInfo>,
}

const PILLAR: u32 = 0x8a93a6;
const ROOF: u32 = 0xff8a3d;
const GUTTER: u32 = 0x9aa7b8;
const GROUND: u32 = 0x161a22;
const GRID: u32 = 0x2a2f3a;

/// Lateral position of the harvesting chain (front-right of the canopy).
const CHAIN_Z: f32 = CANOPY_WIDTH / 2.0 + 0.35;
/// Downspout / main-gutter X position (right edge of the canopy).
const EDGE_X: f32 = CANOPY_LENGTH / 2.0 + 0.35;

fn at(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

impl Diorama {
    /// Build the full diorama.
    #[must_use]
    pub fn build() -> Self {
        let mut parts = Vec::new();

        let mut ground = MeshBuffer::new();
        ground.push_plane(Mat4::IDENTITY, 20.0, 16.0, hex_color(GROUND));

        let structure = build_structure(&mut parts);
        let wash = build_wash(&mut parts);

        Self {
            ground,
            structure,
            wash,
            flow_lines: build_flow_lines(),
            grid: build_grid(40.0, 40),
            parts,
        }
    }

    /// Parts belonging to the given group.
    #[must_use]
    pub fn parts_in(&self, group: PartGroup) -> Vec<&PartInfo> {
        self.parts.iter().filter(|p| p.group == group).collect()
    }
}

fn build_structure(parts: &mut Vec<PartInfo>) -> MeshBuffer {
    let mut mesh = MeshBuffer::new();
    let gutter = hex_color(GUTTER);

    // Six pillars, three per long side
    for x in [-CANOPY_LENGTH / 2.0, 0.0, CANOPY_LENGTH / 2.0] {
        for z in [-CANOPY_WIDTH / 2.0, CANOPY_WIDTH / 2.0] {
            mesh.push_cylinder(
                at(x, CANOPY_HEIGHT / 2.0, z),
                0.10,
                CANOPY_HEIGHT,
                24,
                hex_color(PILLAR),
            );
            parts.push(PartInfo {
                name: "Pillar",
                description: "Canopy support column",
                anchor: Vec3::new(x, CANOPY_HEIGHT / 2.0, z),
                group: PartGroup::Structure,
            });
        }
    }

    // Collecting roof
    mesh.push_box(
        at(0.0, CANOPY_HEIGHT + 0.1, 0.0),
        Vec3::new(CANOPY_LENGTH + 0.5, 0.15, CANOPY_WIDTH + 0.5),
        hex_color(ROOF),
    );
    parts.push(PartInfo {
        name: "Roof",
        description: "Rain-collecting canopy surface",
        anchor: Vec3::new(0.0, CANOPY_HEIGHT + 0.1, 0.0),
        group: PartGroup::Structure,
    });

    // Main gutter along the right eave, front gutter feeding the downspout
    mesh.push_box(
        at(EDGE_X, CANOPY_HEIGHT + 0.02, 0.0),
        Vec3::new(0.15, 0.12, CANOPY_WIDTH + 0.5),
        gutter,
    );
    parts.push(PartInfo {
        name: "Main gutter",
        description: "Longitudinal eave gutter, right edge",
        anchor: Vec3::new(EDGE_X, CANOPY_HEIGHT + 0.02, 0.0),
        group: PartGroup::Structure,
    });
    mesh.push_box(
        at(CANOPY_LENGTH / 2.0 - 1.0, CANOPY_HEIGHT, CHAIN_Z),
        Vec3::new(4.0, 0.12, 0.15),
        gutter,
    );
    parts.push(PartInfo {
        name: "Front gutter",
        description: "Front edge run toward the downspout",
        anchor: Vec3::new(CANOPY_LENGTH / 2.0 - 1.0, CANOPY_HEIGHT, CHAIN_Z),
        group: PartGroup::Structure,
    });

    // Downspout at the front-right corner, roof to grade
    mesh.push_cylinder(
        at(EDGE_X, (CANOPY_HEIGHT + 0.2) / 2.0, CHAIN_Z),
        0.08,
        CANOPY_HEIGHT + 0.2,
        24,
        gutter,
    );
    parts.push(PartInfo {
        name: "Downspout",
        description: "Vertical conductor, roof to grade",
        anchor: Vec3::new(EDGE_X, (CANOPY_HEIGHT + 0.2) / 2.0, CHAIN_Z),
        group: PartGroup::Structure,
    });

    // Ground pipe from the downspout to the filter box
    mesh.push_cylinder(
        lay_along_x(Vec3::new(EDGE_X - 1.1, 0.1, CHAIN_Z)),
        0.07,
        2.2,
        24,
        gutter,
    );
    parts.push(PartInfo {
        name: "Inlet pipe",
        description: "Grade-level run to the filter box",
        anchor: Vec3::new(EDGE_X - 1.1, 0.1, CHAIN_Z),
        group: PartGroup::Structure,
    });

    // Filter box and pump
    mesh.push_box(
        at(CANOPY_LENGTH / 2.0 - 1.7, 0.35, CHAIN_Z),
        Vec3::new(0.8, 0.6, 0.6),
        hex_color(0xffd54f),
    );
    parts.push(PartInfo {
        name: "Filter",
        description: "Sand/charcoal first-stage treatment",
        anchor: Vec3::new(CANOPY_LENGTH / 2.0 - 1.7, 0.35, CHAIN_Z),
        group: PartGroup::Structure,
    });
    mesh.push_box(
        at(CANOPY_LENGTH / 2.0 - 2.7, 0.28, CHAIN_Z),
        Vec3::new(0.6, 0.45, 0.45),
        hex_color(0xd32f2f),
    );
    parts.push(PartInfo {
        name: "Pump",
        description: "Feeds filtered water to the tank",
        anchor: Vec3::new(CANOPY_LENGTH / 2.0 - 2.7, 0.28, CHAIN_Z),
        group: PartGroup::Structure,
    });

    // Underground tank, top flush with grade, manhole above it
    let tank_x = CANOPY_LENGTH / 2.0 - 4.4;
    mesh.push_cylinder(
        at(tank_x, -0.8, CHAIN_Z),
        1.1,
        1.6,
        36,
        hex_color(0x1976d2),
    );
    parts.push(PartInfo {
        name: "Underground tank",
        description: "Buried ~2000 L reservoir",
        anchor: Vec3::new(tank_x, -0.8, CHAIN_Z),
        group: PartGroup::Structure,
    });
    mesh.push_cylinder(
        at(tank_x, 0.03, CHAIN_Z),
        0.35,
        0.06,
        32,
        hex_color(0x424242),
    );
    parts.push(PartInfo {
        name: "Manhole cover",
        description: "Tank inspection access",
        anchor: Vec3::new(tank_x, 0.03, CHAIN_Z),
        group: PartGroup::Structure,
    });

    // Pump-to-tank pipe: short horizontal run, then a drop below grade
    mesh.push_cylinder(
        lay_along_x(Vec3::new(CANOPY_LENGTH / 2.0 - 3.2, 0.32, CHAIN_Z)),
        0.06,
        1.0,
        24,
        gutter,
    );
    mesh.push_cylinder(
        at(CANOPY_LENGTH / 2.0 - 3.7, -0.25, CHAIN_Z),
        0.06,
        0.5,
        24,
        gutter,
    );
    parts.push(PartInfo {
        name: "Tank pipe",
        description: "Pump outlet dropping to the buried tank",
        anchor: Vec3::new(CANOPY_LENGTH / 2.0 - 3.45, 0.0, CHAIN_Z),
        group: PartGroup::Structure,
    });

    mesh
}

fn build_wash(parts: &mut Vec<PartInfo>) -> MeshBuffer {
    let mut mesh = MeshBuffer::new();
    let mut add = |parts: &mut Vec<PartInfo>,
                   name: &'static str,
                   description: &'static str,
                   anchor: Vec3| {
        parts.push(PartInfo {
            name,
            description,
            anchor,
            group: PartGroup::Wash,
        });
    };

    // Four lane stripes marking the wash bays
    for (x, z) in [(-3.0, -2.0), (-3.0, 2.0), (3.0, -2.0), (3.0, 2.0)] {
        mesh.push_box(
            at(x, 0.011, z),
            Vec3::new(0.08, 0.02, 6.0),
            hex_color(0xffd54f),
        );
        add(parts, "Lane stripe", "Wash-bay marking", Vec3::new(x, 0.0, z));
    }

    // Central drain channel with grating bars
    mesh.push_box(
        at(0.0, 0.026, 0.0),
        Vec3::new(CANOPY_LENGTH - 2.0, 0.05, 0.35),
        hex_color(0x757575),
    );
    add(parts, "Drain channel", "Central runoff gutter", Vec3::ZERO);
    let mut i = -18;
    while i <= 18 {
        mesh.push_box(
            at(i as f32 * 0.45, 0.056, 0.0),
            Vec3::new(0.02, 0.06, 0.34),
            hex_color(0x9e9e9e),
        );
        i += 2;
    }

    // Pressure washer with hose coil and wand
    mesh.push_box(
        at(-5.2, 0.31, -3.2),
        Vec3::new(0.7, 0.6, 0.5),
        hex_color(0x1565c0),
    );
    add(
        parts,
        "Pressure washer",
        "Back-left corner",
        Vec3::new(-5.2, 0.31, -3.2),
    );
    mesh.push_torus(
        at(-5.2, 0.55, -3.2) * Mat4::from_rotation_x(PI / 2.0),
        0.25,
        0.06,
        12,
        48,
        TAU,
        hex_color(0x111111),
    );
    add(parts, "Hose coil", "Coiled hose", Vec3::new(-5.2, 0.55, -3.2));
    mesh.push_cylinder(
        at(-4.5, 0.6, -2.7) * Mat4::from_rotation_z(PI / 5.0),
        0.015,
        1.1,
        16,
        hex_color(0x212121),
    );
    add(parts, "Wand", "Spray lance", Vec3::new(-4.5, 0.6, -2.7));

    // Parked car: body, cabin, four wheels
    let car = Vec3::new(3.0, 0.0, 0.5);
    mesh.push_box(
        at(car.x, 0.45, car.z),
        Vec3::new(2.8, 0.7, 1.4),
        hex_color(0x616161),
    );
    mesh.push_box(
        at(car.x, 0.95, car.z),
        Vec3::new(1.6, 0.5, 1.2),
        hex_color(0x757575),
    );
    for (dx, dz) in [(-1.2, -0.6), (1.2, -0.6), (-1.2, 0.6), (1.2, 0.6)] {
        mesh.push_cylinder(
            lay_along_x(Vec3::new(car.x + dx, 0.35, car.z + dz)),
            0.35,
            0.3,
            20,
            hex_color(0x111111),
        );
    }
    add(parts, "Car", "Vehicle in the wash bay", car);

    // Wash arch over the left lane: half torus spanning the bay
    mesh.push_torus(
        at(-3.0, 1.4, 0.0) * Mat4::from_rotation_y(PI / 2.0),
        1.4,
        0.05,
        12,
        48,
        PI,
        hex_color(0xcfd8dc),
    );
    add(parts, "Wash arch", "Spray arch", Vec3::new(-3.0, 1.4, 0.0));

    mesh
}

fn build_flow_lines() -> Vec<FlowLine> {
    let mut lines = Vec::new();
    let path = FlowLine::new;

    // Seven run-off lines across the roof
    let y = CANOPY_HEIGHT + 0.18;
    for i in 0..7 {
        let z = -CANOPY_WIDTH / 2.0
            + (i as f32 + 0.5) * (CANOPY_WIDTH / 7.0);
        lines.push(path(vec![
            Vec3::new(-CANOPY_LENGTH / 2.0 + 0.3, y, z),
            Vec3::new(CANOPY_LENGTH / 2.0 + 0.25, y - 0.08, z),
        ]));
    }

    // Main gutter run
    lines.push(path(vec![
        Vec3::new(EDGE_X, CANOPY_HEIGHT + 0.05, -CANOPY_WIDTH / 2.0 + 0.2),
        Vec3::new(EDGE_X, CANOPY_HEIGHT + 0.02, CANOPY_WIDTH / 2.0 + 0.28),
    ]));
    // Front gutter to the downspout
    lines.push(path(vec![
        Vec3::new(CANOPY_LENGTH / 2.0 - 1.9, CANOPY_HEIGHT, CHAIN_Z),
        Vec3::new(EDGE_X, CANOPY_HEIGHT, CHAIN_Z),
    ]));
    // Down the spout
    lines.push(path(vec![
        Vec3::new(EDGE_X, CANOPY_HEIGHT, CHAIN_Z),
        Vec3::new(EDGE_X, 0.12, CHAIN_Z),
    ]));
    // Grade-level run to the filter
    lines.push(path(vec![
        Vec3::new(EDGE_X, 0.12, CHAIN_Z),
        Vec3::new(CANOPY_LENGTH / 2.0 - 1.7 + 0.4, 0.12, CHAIN_Z),
    ]));
    // Filter to pump
    lines.push(path(vec![
        Vec3::new(CANOPY_LENGTH / 2.0 - 1.7 - 0.4, 0.12, CHAIN_Z),
        Vec3::new(CANOPY_LENGTH / 2.0 - 2.7, 0.12, CHAIN_Z),
    ]));
    // Pump down below grade
    lines.push(path(vec![
        Vec3::new(CANOPY_LENGTH / 2.0 - 2.7 - 0.45, 0.12, CHAIN_Z),
        Vec3::new(CANOPY_LENGTH / 2.0 - 3.7, -0.4, CHAIN_Z),
    ]));
    // Into the tank
    lines.push(path(vec![
        Vec3::new(CANOPY_LENGTH / 2.0 - 3.7, -0.4, CHAIN_Z),
        Vec3::new(CANOPY_LENGTH / 2.0 - 4.4, -0.4, CHAIN_Z),
    ]));

    lines
}

fn build_grid(extent: f32, divisions: u32) -> Vec<[Vec3; 2]> {
    let half = extent / 2.0;
    let step = extent / divisions as f32;
    let mut segments = Vec::with_capacity((divisions as usize + 1) * 2);
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        segments.push([
            Vec3::new(-half, 0.0, offset),
            Vec3::new(half, 0.0, offset),
        ]);
        segments.push([
            Vec3::new(offset, 0.0, -half),
            Vec3::new(offset, 0.0, half),
        ]);
    }
    segments
}

/// Linear RGB of the helper grid lines.
#[must_use]
pub fn grid_color() -> [f32; 3] {
    hex_color(GRID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_pillars_present() {
        let diorama = Diorama::build();
        let pillars = diorama
            .parts
            .iter()
            .filter(|p| p.name == "Pillar")
            .count();
        assert_eq!(pillars, 6);
    }

    #[test]
    fn harvesting_chain_is_complete() {
        let diorama = Diorama::build();
        for name in [
            "Roof",
            "Main gutter",
            "Front gutter",
            "Downspout",
            "Inlet pipe",
            "Filter",
            "Pump",
            "Underground tank",
            "Manhole cover",
        ] {
            assert!(
                diorama.parts.iter().any(|p| p.name == name),
                "missing part: {name}"
            );
        }
    }

    #[test]
    fn tank_is_below_grade() {
        let diorama = Diorama::build();
        let tank = diorama
            .parts
            .iter()
            .find(|p| p.name == "Underground tank")
            .map(|p| p.anchor);
        assert!(tank.is_some_and(|a| a.y < 0.0));
    }

    #[test]
    fn wash_group_is_populated() {
        let diorama = Diorama::build();
        assert!(diorama.parts_in(PartGroup::Wash).len() >= 10);
    }

    #[test]
    fn fourteen_flow_lines() {
        // 7 roof run-off lines + 7 segments of the harvesting chain
        let diorama = Diorama::build();
        assert_eq!(diorama.flow_lines.len(), 14);
        assert!(diorama.flow_lines.iter().all(|l| l.length() > 0.0));
    }

    #[test]
    fn grid_covers_both_axes() {
        let diorama = Diorama::build();
        assert_eq!(diorama.grid.len(), 41 * 2);
    }

    #[test]
    fn meshes_are_non_empty() {
        let diorama = Diorama::build();
        assert!(diorama.ground.triangle_count() > 0);
        assert!(diorama.structure.triangle_count() > 100);
        assert!(diorama.wash.triangle_count() > 100);
    }
}
