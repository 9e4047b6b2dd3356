//! # Configuration Constants
//!
//! Centralized constants for procedural primitive mesh generation:
//! parameter clamp bounds, tessellation step heuristics, and precision
//! values.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Profile bounds**: Valid ranges for cross-section parameters
//! - **Path bounds**: Valid ranges for sweep-path parameters
//! - **Stepping**: Path sampling densities and boost heuristics
//! - **Texturing**: Side-wall UV assignment thresholds

use std::f64::consts::PI;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon below which a path modulation parameter (radius, taper) is
/// treated as absent.
///
/// Coarser than [`EPSILON`] because these values arrive as quantized
/// protocol fields, not as computed results.
pub const PARAM_EPSILON: f64 = 1e-3;

// =============================================================================
// PROFILE BOUNDS
// =============================================================================

/// Minimum number of sides for the outer or hollow boundary of a
/// cross-section. Requests below this are raised, not rejected.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIDES;
/// assert_eq!(1u32.max(MIN_SIDES), 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Maximum hollow fraction. A hollow of 1.0 would leave a zero-thickness
/// wall, so the fraction is capped just below it.
pub const MAX_HOLLOW: f64 = 0.99;

/// Minimum span kept between the begin and end fractions of a profile or
/// path cut. Narrower requests are widened by pulling the begin fraction
/// down.
pub const MIN_CUT_SPAN: f64 = 0.02;

// =============================================================================
// PATH BOUNDS
// =============================================================================

/// Magnitude limit for the taper parameters. A taper of exactly 1 would
/// collapse the end cross-section to a point.
pub const TAPER_LIMIT: f64 = 0.999;

/// Magnitude limit for the skew parameter on circular paths. Keeps the
/// blended ring center at a positive path radius.
pub const MAX_SKEW: f64 = 0.95;

/// Minimum hole size on either axis of a circular path. A zero hole
/// size would collapse the swept ring.
pub const MIN_HOLE_SIZE: f64 = 0.01;

/// Maximum hole size on either axis of a circular path.
pub const MAX_HOLE_SIZE: f64 = 1.0;

/// Minimum number of revolutions for a circular path.
pub const MIN_REVOLUTIONS: f64 = 1.0;

// =============================================================================
// STEPPING HEURISTICS
// =============================================================================

/// Default number of path segments per revolution of a circular sweep.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_STEPS_PER_REVOLUTION;
/// assert!(DEFAULT_STEPS_PER_REVOLUTION >= 3);
/// ```
pub const DEFAULT_STEPS_PER_REVOLUTION: u32 = 24;

/// Default number of segments for a linear sweep.
pub const DEFAULT_LINEAR_STEPS: u32 = 1;

/// Twist magnitude (radians) below which no extra path sampling is added.
pub const MIN_TWIST: f64 = 0.01;

/// Extra linear-path steps added per radian of total twist. Empirical
/// anti-aliasing factor for twisted extrusions.
pub const TWIST_STEP_SCALE: f64 = 3.66;

/// Total twist (radians) above which a circular path doubles its steps
/// per revolution, to keep adjacent layers from self-intersecting.
pub const TWIST_STEP_DOUBLE: f64 = PI * 1.5;

/// Total twist (radians) above which a circular path doubles its steps
/// per revolution a second time.
pub const TWIST_STEP_QUAD: f64 = PI * 3.0;

/// Angular slack (radians) when deciding whether a circular sweep has
/// reached its end angle.
pub const ANGLE_STEP_EPSILON: f64 = 0.01;

/// Fraction of the Y top-shear value subtracted from a circular path's
/// start and end angles. Empirical approximation of the shear's effect
/// on the path cut.
pub const SHEAR_ANGLE_FACTOR: f64 = 0.9;

// =============================================================================
// TEXTURING THRESHOLDS
// =============================================================================

/// Side count below which a boundary is treated as a prism: each flat
/// wall owns the full [0,1] texture range and is flat-shaded instead of
/// smooth-shaded.
///
/// # Example
///
/// ```rust
/// use config::constants::SMOOTH_SIDE_THRESHOLD;
///
/// let sides = 4u32;
/// let faceted = sides < SMOOTH_SIDE_THRESHOLD;
/// assert!(faceted);
/// ```
pub const SMOOTH_SIDE_THRESHOLD: u32 = 5;

/// When a rescaled prism-wall U range wraps to a value below this
/// threshold, it is snapped back to 1.0 so the wall spans a full texture
/// repeat.
pub const UV_WRAP_THRESHOLD: f64 = 0.1;
