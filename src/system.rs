use crate::error::OrbitError;
use crate::orbit::Orbit;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::universal::UniversalPos;
use crate::vector::Vector3;

/// Handle to an orbit stored in an [`OrbitSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrbitId(usize);

impl OrbitId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T: 'static> {
    orbit: Orbit<'static, T>,
    parent: Option<OrbitId>,
}

/// Owns a hierarchy of orbits, with parents referenced by id.
///
/// Unlike borrowed parents this lets every orbit of the tree be advanced
/// through time while the links stay in place. Links are checked on every
/// change, so the hierarchy is always a forest.
#[derive(Debug, Clone)]
pub struct OrbitSystem<T: 'static = f64> {
    nodes: Vec<Node<T>>,
}

impl<T: Scalar> Default for OrbitSystem<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> OrbitSystem<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a root orbit. Any borrowed parent of `orbit` is dropped.
    pub fn insert(&mut self, orbit: Orbit<'_, T>) -> OrbitId {
        let id = OrbitId(self.nodes.len());
        self.nodes.push(Node {
            orbit: orbit.detached(),
            parent: None,
        });
        id
    }

    pub fn insert_child(&mut self, orbit: Orbit<'_, T>, parent: OrbitId) -> Result<OrbitId, OrbitError> {
        self.node(parent)?;
        let id = self.insert(orbit);
        self.nodes[id.0].parent = Some(parent);
        Ok(id)
    }

    /// Re-parents `child`; `None` makes it a root.
    pub fn set_parent(&mut self, child: OrbitId, parent: Option<OrbitId>) -> Result<(), OrbitError> {
        self.node(child)?;
        if let Some(parent) = parent {
            self.node(parent)?;
            if self.chain(parent).any(|ancestor| ancestor == child) {
                log::warn!("rejected parent {:?} for {:?}: cycle", parent, child);
                return Err(OrbitError::Cycle { child, parent });
            }
        }
        log::debug!("parent of {:?} set to {:?}", child, parent);
        self.nodes[child.0].parent = parent;
        Ok(())
    }

    pub fn parent(&self, id: OrbitId) -> Result<Option<OrbitId>, OrbitError> {
        Ok(self.node(id)?.parent)
    }

    #[inline]
    pub fn get(&self, id: OrbitId) -> Option<&Orbit<'static, T>> {
        self.nodes.get(id.0).map(|node| &node.orbit)
    }

    #[inline]
    pub fn get_mut(&mut self, id: OrbitId) -> Option<&mut Orbit<'static, T>> {
        self.nodes.get_mut(id.0).map(|node| &mut node.orbit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrbitId, &Orbit<'static, T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (OrbitId(index), &node.orbit))
    }

    /// Places every orbit where it is `time` seconds after its periapsis passage.
    pub fn evaluate(&mut self, time: T, solver_iterations: u32) {
        for node in &mut self.nodes {
            node.orbit.evaluate_true_anomaly(time, solver_iterations);
        }
        log::debug!("evaluated {} orbits at t={:?}", self.nodes.len(), time);
    }

    /// Product of the local rotations from the root down to `id`.
    pub fn global_rotation(&self, id: OrbitId) -> Result<Quaternion<T>, OrbitError> {
        self.node(id)?;
        Ok(self
            .chain(id)
            .fold(Quaternion::identity(), |rotation, ancestor| {
                self.nodes[ancestor.0].orbit.local_rotation() * rotation
            }))
    }

    /// Position and velocity of `id` in the root frame, with the body at the
    /// root of its tree at the origin.
    pub fn global_state_vectors(&self, id: OrbitId) -> Result<(UniversalPos, Vector3<T>), OrbitError> {
        self.node(id)?;
        let mut chain: Vec<OrbitId> = self.chain(id).collect();
        chain.reverse();

        let mut position = UniversalPos::default();
        let mut velocity = Vector3::zero();
        // frame the current orbit's elements are expressed in
        let mut frame = Quaternion::identity();
        for ancestor in chain {
            let orbit = &self.nodes[ancestor.0].orbit;
            let (local_position, local_velocity) = orbit.to_local_state_vectors();
            position = position
                .checked_add(frame * local_position)
                .ok_or(OrbitError::Unrepresentable(id))?;
            velocity += frame * local_velocity;
            frame = frame * orbit.local_rotation();
        }
        Ok((position, velocity))
    }

    fn node(&self, id: OrbitId) -> Result<&Node<T>, OrbitError> {
        self.nodes.get(id.0).ok_or(OrbitError::UnknownOrbit(id))
    }

    // `id` followed by its ancestors, innermost first.
    fn chain(&self, id: OrbitId) -> impl Iterator<Item = OrbitId> + '_ {
        std::iter::successors(Some(id), move |current| {
            self.nodes.get(current.0).and_then(|node| node.parent)
        })
    }
}
