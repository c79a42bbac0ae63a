use crate::geometry::Ring;

/// A planar area bounded by one exterior ring and zero or more interior rings (holes).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Surface {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Surface {
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }
}

/// A closed composite surface: the boundary of a solid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shell {
    surfaces: Vec<Surface>,
}

impl Shell {
    pub fn new(surfaces: Vec<Surface>) -> Self {
        Self { surfaces }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn num_surfaces(&self) -> usize {
        self.surfaces.len()
    }
}

/// A volume bounded by an exterior shell and zero or more interior shells (cavities).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    exterior: Option<Shell>,
    interiors: Vec<Shell>,
}

impl Solid {
    pub fn new(exterior: Option<Shell>, interiors: Vec<Shell>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> Option<&Shell> {
        self.exterior.as_ref()
    }

    pub fn interiors(&self) -> &[Shell] {
        &self.interiors
    }
}

impl From<Shell> for Solid {
    fn from(value: Shell) -> Self {
        Self::new(Some(value), vec![])
    }
}
