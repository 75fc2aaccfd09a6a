//! Contact detection between axis-aligned colliders.
//!
//! Every frame the colliders are tested pairwise on the XY plane. Pairs that
//! start touching produce a [`ContactStarted`] message, pairs that stop
//! touching (or lose an entity) produce a [`ContactEnded`] message. There is no
//! collision response: contacts only report, gameplay systems decide.

use std::collections::HashMap;

use bevy::prelude::*;
use tracing::debug;

/// Distance within which two boxes count as touching.
pub const CONTACT_SKIN: f32 = 0.01;

/// Axis-aligned box collider centred on the entity's translation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Collider {
    pub half_extents: Vec2,
}

impl Collider {
    pub fn from_size(size: Vec2) -> Self {
        Self {
            half_extents: size * 0.5,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.half_extents.x
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::from_size(Vec2::ONE)
    }
}

/// Marks a collider as a trigger volume.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Sensor;

/// How a contact is reported to gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ContactKind {
    /// Both colliders are solid.
    Collision,
    /// At least one collider is a [`Sensor`].
    Trigger,
}

impl ContactKind {
    fn between(a_sensor: bool, b_sensor: bool) -> Self {
        if a_sensor || b_sensor {
            ContactKind::Trigger
        } else {
            ContactKind::Collision
        }
    }
}

/// A pair of entities in contact. `a` is never greater than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
    pub kind: ContactKind,
}

impl Contact {
    pub fn new(first: Entity, second: Entity, kind: ContactKind) -> Self {
        let (a, b) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        Self { a, b, kind }
    }

    /// Both orderings of the pair, for handlers that look for one side.
    pub fn sides(&self) -> [(Entity, Entity); 2] {
        [(self.a, self.b), (self.b, self.a)]
    }
}

/// Two colliders started touching.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ContactStarted(pub Contact);

/// Two colliders stopped touching.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ContactEnded(pub Contact);

/// Pairs currently in contact, keyed by `(a, b)` with `a < b`.
#[derive(Resource, Debug, Default)]
pub struct ActiveContacts {
    pairs: HashMap<(Entity, Entity), ContactKind>,
}

/// Whether two boxes overlap or touch within [`CONTACT_SKIN`].
pub fn touching(a_center: Vec2, a: &Collider, b_center: Vec2, b: &Collider) -> bool {
    let distance = (a_center - b_center).abs();
    let reach = a.half_extents + b.half_extents + Vec2::splat(CONTACT_SKIN);
    distance.x <= reach.x && distance.y <= reach.y
}

/// System that diffs the current contact pairs against the previous frame.
pub fn detect_contacts(
    colliders: Query<(Entity, &Transform, &Collider, Has<Sensor>)>,
    mut active: ResMut<ActiveContacts>,
    mut started: MessageWriter<ContactStarted>,
    mut ended: MessageWriter<ContactEnded>,
) {
    let mut current = HashMap::with_capacity(active.pairs.len());

    for [(a, a_transform, a_collider, a_sensor), (b, b_transform, b_collider, b_sensor)] in
        colliders.iter_combinations()
    {
        if touching(
            a_transform.translation.truncate(),
            a_collider,
            b_transform.translation.truncate(),
            b_collider,
        ) {
            let contact = Contact::new(a, b, ContactKind::between(a_sensor, b_sensor));
            current.insert((contact.a, contact.b), contact.kind);
        }
    }

    for (&(a, b), &kind) in &current {
        if !active.pairs.contains_key(&(a, b)) {
            debug!("Contact started: {a} <-> {b} ({kind:?})");
            started.write(ContactStarted(Contact { a, b, kind }));
        }
    }

    for (&(a, b), &kind) in &active.pairs {
        if !current.contains_key(&(a, b)) {
            debug!("Contact ended: {a} <-> {b} ({kind:?})");
            ended.write(ContactEnded(Contact { a, b, kind }));
        }
    }

    active.pairs = current;
}
