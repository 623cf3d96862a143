//! # trihue - Color conversion and picker-geometry engine
//!
//! The reusable core of a hue-ring/triangle color picker: color-model
//! conversions, ICC-profile-accurate CMYK handling with caching, and the
//! geometry that maps the selection surface to color coordinates.
//!
//! ## Goals
//!
//! - **Pure**: given color or surface coordinates, produce converted
//!   coordinates; no windowing, rendering or input handling
//! - **Consistent**: every model derives from canonical RGB in one pass,
//!   with documented rounding at each edge
//! - **Cached**: device profiles and transforms are built once per
//!   canonical key and shared for the registry's lifetime
//! - **Invertible**: the triangle's point↔(saturation, value) mappings are
//!   exact inverses, stable near edges and the centroid
//!
//! ## Quick Start
//!
//! ```
//! use trihue_core::{ColorState, Hsv, Rgb, SatVal, WheelGeometry};
//!
//! // Cross-model state: edit one model, read the rest
//! let mut color = ColorState::from_rgb(Rgb::new(255, 128, 0));
//! color.set_hsv(Hsv::new(200.0, 0.5, 0.9));
//! println!("{} rgb={:?} cmyk={:?}", color.hex(), color.rgb(), color.cmyk());
//!
//! // Selection-surface geometry
//! let wheel = WheelGeometry::default();
//! let verts = wheel.triangle_vertices(color.hsv().h);
//! let marker = wheel.sv_to_point(&verts, SatVal::new(color.hsv().s, color.hsv().v));
//! let back = wheel.point_to_sv(&verts, marker, SatVal::default());
//! assert!((back.s - color.hsv().s).abs() < 1e-6);
//! ```
//!
//! Profile-accurate CMYK goes through [`ProfileRegistry`] and
//! [`ProfileConverter`]:
//!
//! ```no_run
//! use std::sync::Arc;
//! use trihue_core::{ProfileConverter, ProfileRegistry};
//!
//! let registry = Arc::new(ProfileRegistry::new());
//! let converter = ProfileConverter::new(registry, "profiles/USWebCoatedSWOP.icc");
//! let rgb = converter.cmyk_to_rgb("cmyk(10%, 65%, 85%, 5%)")?;
//! # Ok::<(), trihue_core::Error>(())
//! ```

pub mod blend;
pub mod color;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod profile;
pub mod registry;
pub mod state;
pub mod transform;

pub use color::{Cmyk, CmykPercent, Hsv, Rgb, Rgba, byte_to_pct, pct_to_byte};
pub use convert::ProfileConverter;
pub use error::{Error, Result};
pub use geometry::{Point, SatVal, TriangleVertices, WheelGeometry, WheelRegion};
pub use parse::{HexColor, parse_cmyk_flexible, parse_hex, parse_rgb, parse_rgb_flexible, parse_rgba};
pub use profile::ColorProfile;
pub use registry::{ProfileKey, ProfileRegistry, SRGB_PROFILE};
pub use state::ColorState;
pub use transform::{Layout, RenderingIntent, Transform, TransformOptions};

/// Version of trihue
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
