//! Static partition-wall obstacles on the XZ floor plane.

/// Axis-aligned rectangle the viewer may not enter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Obstacle {
    /// Footprint of a wall centered at `(x, z)` running along X.
    pub fn from_wall(x: f32, z: f32, width: f32, depth: f32) -> Self {
        let half_w = width / 2.0;
        let half_d = depth / 2.0;
        Self {
            min_x: x - half_w,
            max_x: x + half_w,
            min_z: z - half_d,
            max_z: z + half_d,
        }
    }

    /// Strict interior test; points on an edge are outside.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x > self.min_x && x < self.max_x && z > self.min_z && z < self.max_z
    }
}

/// Immutable set of obstacles, filled once while the layout is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionField {
    obstacles: Vec<Obstacle>,
}

impl CollisionField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn is_blocked(&self, x: f32, z: f32) -> bool {
        self.obstacles.iter().any(|o| o.contains(x, z))
    }
}
