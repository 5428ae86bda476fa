//! Beam lattice: cylindrical struts between two nodes.

/// Shape closing a beam end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CapMode {
    /// Full sphere centered on the node.
    #[default]
    Sphere,
    /// Half sphere facing away from the beam.
    Hemisphere,
    /// Flat cut at the node.
    Butt,
}

impl CapMode {
    /// Returns the attribute spelling used by the beam-lattice markup.
    pub fn as_str(self) -> &'static str {
        match self {
            CapMode::Sphere => "sphere",
            CapMode::Hemisphere => "hemisphere",
            CapMode::Butt => "butt",
        }
    }

    /// Parse a cap mode from its attribute spelling.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "sphere" => Some(CapMode::Sphere),
            "hemisphere" => Some(CapMode::Hemisphere),
            "butt" => Some(CapMode::Butt),
            _ => None,
        }
    }
}

/// Per-beam attributes passed to [`Mesh::add_beam`](crate::mesh::Mesh::add_beam).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeamProperties {
    /// Radius at each end.
    pub radius: [f64; 2],
    /// Cap at each end.
    pub cap_mode: [CapMode; 2],
}

impl Default for BeamProperties {
    fn default() -> Self {
        BeamProperties {
            radius: [DEFAULT_BEAM_RADIUS; 2],
            cap_mode: [CapMode::Sphere; 2],
        }
    }
}

/// A strut between two nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Beam {
    /// Position in the beam collection.
    pub index: u32,
    /// End node indices.
    pub node_indices: [u32; 2],
    /// Radius at each end.
    pub radius: [f64; 2],
    /// Cap at each end.
    pub cap_mode: [CapMode; 2],
}

impl Beam {
    pub fn new(index: u32, node_indices: [u32; 2], props: BeamProperties) -> Self {
        Beam {
            index,
            node_indices,
            radius: props.radius,
            cap_mode: props.cap_mode,
        }
    }

    /// Attributes of this beam, suitable for re-adding it elsewhere.
    pub fn properties(&self) -> BeamProperties {
        BeamProperties {
            radius: self.radius,
            cap_mode: self.cap_mode,
        }
    }
}

/// Default radius of a lattice that does not specify one.
pub const DEFAULT_BEAM_RADIUS: f64 = 1.0;

/// Default minimum beam length of a lattice.
pub const DEFAULT_BEAM_MIN_LENGTH: f64 = 0.0001;

/// Beams of a mesh together with lattice-wide defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeamLattice {
    /// Beams in insertion order.
    pub beams: Vec<Beam>,
    /// Beams shorter than this are considered degenerate by consumers.
    pub min_length: f64,
    /// Radius used when a beam does not carry its own.
    pub default_radius: f64,
    /// Cap used when a beam does not carry its own.
    pub default_cap_mode: CapMode,
}

impl Default for BeamLattice {
    fn default() -> Self {
        BeamLattice {
            beams: Vec::new(),
            min_length: DEFAULT_BEAM_MIN_LENGTH,
            default_radius: DEFAULT_BEAM_RADIUS,
            default_cap_mode: CapMode::Sphere,
        }
    }
}

impl BeamLattice {
    /// Properties a beam gets when only its end nodes are known.
    pub fn default_properties(&self) -> BeamProperties {
        BeamProperties {
            radius: [self.default_radius; 2],
            cap_mode: [self.default_cap_mode; 2],
        }
    }
}
