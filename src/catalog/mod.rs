//! Catalog of celestial bodies and their resolved orbits.
//!
//! Runtime behavior:
//! - Raw records are resolved (missing periods filled) exactly once, then
//!   flattened into an indexed, append-only body list.
//! - Parent references resolve through a name table built at construction;
//!   names that match no body collapse to the central star, mirroring the
//!   resolver's mass fallback.
//!
//! Coordinate frame:
//! - Y-up display frame centered on the central star.
//! - Body positions are relative to their parent and scaled by
//!   `ORBIT_SCALE` display units per AU.

pub mod body;
pub mod data;
pub mod resolver;

pub use body::{BodyRecord, CelestialBody, OrbitRecord};
pub use resolver::resolve_periods;

use bevy::math::DVec3;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::orbit::{OrbitError, compute_position, sample_orbit};

/// Opaque index of a body within the catalog.
///
/// Handles are minted only by the catalog; the methods below index with
/// them directly and hold for every handle the same catalog produced.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

/// Resource holding every body in the scene plus name and entity indexes.
#[derive(Resource)]
pub struct SolarSystem {
    bodies: Vec<CelestialBody>,
    names: HashMap<String, BodyHandle>,
    entity_to_body: HashMap<Entity, BodyHandle>,
    body_to_entity: HashMap<BodyHandle, Entity>,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::from_records(data::solar_system())
    }
}

impl SolarSystem {
    /// Build a catalog from raw records.
    ///
    /// Resolution runs here, before flattening, so every stored orbit
    /// carries a non-zero period by the time positions can be queried.
    pub fn from_records(mut records: Vec<BodyRecord>) -> Self {
        resolve_periods(&mut records);

        let mut bodies = Vec::new();
        let mut names = HashMap::new();
        flatten(&records, &mut bodies, &mut names);

        // Parent links need the complete name table: a body may orbit one
        // declared after it.
        for body in &mut bodies {
            body.parent = body
                .orbit
                .orbiting_body
                .as_deref()
                .and_then(|name| names.get(name).copied());
        }

        Self {
            bodies,
            names,
            entity_to_body: HashMap::new(),
            body_to_entity: HashMap::new(),
        }
    }

    /// Number of bodies in the catalog.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Look up a body by name. Case-sensitive.
    pub fn handle(&self, name: &str) -> Option<BodyHandle> {
        self.names.get(name).copied()
    }

    /// The body behind a handle.
    pub fn body(&self, handle: BodyHandle) -> &CelestialBody {
        &self.bodies[handle.0]
    }

    /// Iterate bodies with their handles, parents before their moons.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (BodyHandle(index), body))
    }

    /// Parent of a body, `None` for bodies around the central star.
    pub fn parent_of(&self, handle: BodyHandle) -> Option<BodyHandle> {
        self.body(handle).parent
    }

    /// Position of a body relative to its parent at `time` days.
    pub fn local_position(&self, handle: BodyHandle, time: f64) -> Result<DVec3, OrbitError> {
        compute_position(&self.body(handle).orbit, time)
    }

    /// Position of a body relative to the central star at `time` days.
    ///
    /// Sums parent-relative positions up the chain. Parent links come from
    /// the flattened tree, so the chain is finite.
    pub fn world_position(&self, handle: BodyHandle, time: f64) -> Result<DVec3, OrbitError> {
        let local = self.local_position(handle, time)?;
        match self.parent_of(handle) {
            None => Ok(local),
            Some(parent) => Ok(self.world_position(parent, time)? + local),
        }
    }

    /// Parent-relative orbit path of a body, `samples + 1` points.
    pub fn orbit_path(&self, handle: BodyHandle, samples: usize) -> Result<Vec<DVec3>, OrbitError> {
        sample_orbit(&self.body(handle).orbit, samples)
    }

    /// Record which entity was spawned for a body.
    pub fn register(&mut self, entity: Entity, handle: BodyHandle) {
        self.entity_to_body.insert(entity, handle);
        self.body_to_entity.insert(handle, entity);
    }

    /// Entity spawned for a body, if one was registered.
    pub fn entity(&self, handle: BodyHandle) -> Option<Entity> {
        self.body_to_entity.get(&handle).copied()
    }

    /// Body behind a registered entity.
    pub fn handle_of(&self, entity: Entity) -> Option<BodyHandle> {
        self.entity_to_body.get(&entity).copied()
    }
}

/// Depth-first flattening: each record lands before its moons.
fn flatten(
    records: &[BodyRecord],
    bodies: &mut Vec<CelestialBody>,
    names: &mut HashMap<String, BodyHandle>,
) {
    for record in records {
        let handle = BodyHandle(bodies.len());
        bodies.push(record.to_body());
        names.insert(record.name.clone(), handle);
        flatten(&record.moons, bodies, names);
    }
}
