//! Contour types produced by [`generate`](super::generate).

use uom::si::f64::{Area, Length};

use crate::support::isentropic::{
    Branch, FlowError, FlowState, GasProperties, SolverConfig, Stagnation,
};

/// Gas and inlet stagnation conditions driving a contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    pub gas: GasProperties,
    pub stagnation: Stagnation,
}

/// Configuration for contour generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourConfig {
    pub solver: SolverConfig,
    pub regime: RegimeConfig,
}

/// Thresholds used to tag stations with a [`FlowRegime`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegimeConfig {
    /// Half-width of the Mach band around `M = 1` treated as transonic.
    pub transonic_band: f64,
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            transonic_band: 0.2,
        }
    }
}

impl RegimeConfig {
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidInput`] if the band is negative or not finite.
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.transonic_band >= 0.0 && self.transonic_band.is_finite() {
            Ok(())
        } else {
            Err(FlowError::invalid_input(format!(
                "transonic band must be non-negative, got {}",
                self.transonic_band
            )))
        }
    }
}

/// Coarse classification of the local flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    Subsonic,
    Transonic,
    Supersonic,
}

impl FlowRegime {
    /// Classifies a Mach number against a transonic band around `M = 1`.
    #[must_use]
    pub fn classify(mach: f64, config: &RegimeConfig) -> Self {
        if (mach - 1.0).abs() <= config.transonic_band {
            Self::Transonic
        } else if mach < 1.0 {
            Self::Subsonic
        } else {
            Self::Supersonic
        }
    }
}

/// Wall cross-section at a station, in the plane normal to the axis.
#[derive(Debug, Clone, PartialEq)]
pub enum WallSection {
    /// Axisymmetric wall of the given radius.
    Circular { radius: Length },

    /// Closed non-axisymmetric perimeter, as `[y, z]` points ordered by angle.
    Lobed { points: Vec<[Length; 2]> },
}

/// A single sampled station of a nozzle contour.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPoint {
    /// Axial position, measured from the inlet.
    pub position: Length,

    /// Local cross-sectional area.
    pub area: Area,

    /// Local area ratio `A/A*`.
    pub area_ratio: f64,

    /// Area-Mach branch used at this station.
    pub branch: Branch,

    pub regime: FlowRegime,

    /// Local static flow state; its Mach number is the solved local Mach number.
    pub state: FlowState,

    pub wall: WallSection,
}

impl ContourPoint {
    /// Local Mach number.
    #[must_use]
    pub fn mach(&self) -> f64 {
        self.state.mach
    }
}

/// An ordered nozzle contour.
///
/// Points are ordered by strictly increasing axial position from the inlet
/// (`x = 0`) to the exit (`x = L`). A contour is derived data: when the geometry
/// or flow conditions change, generate a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub shape: &'static str,
    pub flow: FlowConditions,

    /// Index of the sampled throat station, if the throat was sampled.
    pub throat_index: Option<usize>,

    pub points: Vec<ContourPoint>,
}

impl Contour {
    /// The sampled throat station, if any.
    #[must_use]
    pub fn throat(&self) -> Option<&ContourPoint> {
        self.throat_index.and_then(|i| self.points.get(i))
    }

    /// The exit station.
    #[must_use]
    pub fn exit(&self) -> Option<&ContourPoint> {
        self.points.last()
    }

    /// The station with the smallest cross-sectional area.
    #[must_use]
    pub fn min_area_point(&self) -> Option<&ContourPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.area_ratio.total_cmp(&b.area_ratio))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContourPoint> {
        self.points.iter()
    }
}
