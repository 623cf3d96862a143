//! Profile and transform registry
//!
//! Profiles and the transforms built from them are expensive to construct
//! and cheap to keep, so the registry memoizes both for its whole lifetime:
//! append-only maps, populated lazily, never evicted. Keys are canonical so
//! that `"sRGB"`, `" srgb "`, a relative path and the absolute path to the
//! same file all land on the same cache entry.
//!
//! The registry is meant to be constructed once and shared (by reference or
//! `Arc`) with every converter, replacing ambient global caches.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::profile::ColorProfile;
use crate::transform::{Layout, Transform, TransformOptions};

/// The literal naming the built-in sRGB profile
pub const SRGB_PROFILE: &str = "sRGB";

/// Canonical identity of a profile specifier
///
/// The case-insensitive literal `"srgb"` is the built-in profile; any other
/// specifier is a filesystem path resolved to its absolute form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileKey {
    /// The built-in sRGB profile
    Srgb,
    /// A file-backed device profile, keyed by resolved absolute path
    File(PathBuf),
}

impl ProfileKey {
    /// Normalize a profile specifier into its canonical key
    ///
    /// Surface differences (casing/whitespace of the literal, `~`, relative
    /// vs absolute spellings of the same file) all produce the same key.
    pub fn canonical(spec: &str) -> Self {
        let s = spec.trim();
        if s.eq_ignore_ascii_case("srgb") {
            return Self::Srgb;
        }
        Self::File(resolve_path(s))
    }
}

/// Expand `~` and resolve to an absolute path
///
/// Existing files go through `canonicalize` so that equivalent spellings
/// (`./x`, `sub/../x`, symlinks) collapse to one key; paths that do not
/// exist yet fall back to lexical absolutization, and `load_profile` will
/// report them as missing.
fn resolve_path(spec: &str) -> PathBuf {
    let path = match spec.strip_prefix("~/").or_else(|| spec.strip_prefix("~\\")) {
        Some(rest) => match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(rest),
            None => PathBuf::from(spec),
        },
        None => PathBuf::from(spec),
    };
    if let Ok(resolved) = std::fs::canonicalize(&path) {
        return resolved;
    }
    std::path::absolute(&path).unwrap_or(path)
}

/// Cache key for a built transform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TransformKey {
    src: ProfileKey,
    dst: ProfileKey,
    src_layout: Layout,
    dst_layout: Layout,
    intent: crate::transform::RenderingIntent,
    flags: u32,
}

/// Process-lifetime cache of loaded profiles and built transforms
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Mutex<HashMap<ProfileKey, Arc<ColorProfile>>>,
    transforms: Mutex<HashMap<TransformKey, Arc<Transform>>>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a profile by specifier, memoized
    ///
    /// The first call for a given canonical key constructs the built-in
    /// profile or reads the profile file; every later call (any spelling)
    /// returns the same cached handle. A missing or unreadable file is
    /// `ProfileNotFound`; the registry never fabricates a substitute and
    /// never retries on its own.
    pub fn load_profile(&self, spec: &str) -> Result<Arc<ColorProfile>> {
        let key = ProfileKey::canonical(spec);
        let mut cache = self
            .profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(profile) = cache.get(&key) {
            return Ok(profile.clone());
        }

        // Built under the lock so a concurrent first load of the same key
        // finds this entry instead of building a duplicate.
        let profile = Arc::new(build_profile(&key, spec)?);
        cache.insert(key, profile.clone());
        Ok(profile)
    }

    /// Get or build the transform for a profile pair, memoized
    ///
    /// The cache key is the canonical profile keys plus layouts, rendering
    /// intent and flag bits; at most one transform exists per distinct key
    /// tuple, and equivalent specifiers share the same `Arc`.
    pub fn get_transform(
        &self,
        src_spec: &str,
        dst_spec: &str,
        src_layout: Layout,
        dst_layout: Layout,
        options: TransformOptions,
    ) -> Result<Arc<Transform>> {
        let key = TransformKey {
            src: ProfileKey::canonical(src_spec),
            dst: ProfileKey::canonical(dst_spec),
            src_layout,
            dst_layout,
            intent: options.intent,
            flags: options.flag_bits(),
        };

        let mut cache = self
            .transforms
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(transform) = cache.get(&key) {
            return Ok(transform.clone());
        }

        let src = self.load_profile(src_spec)?;
        let dst = self.load_profile(dst_spec)?;
        let transform = Arc::new(Transform::new_8bit(
            &src, src_layout, &dst, dst_layout, options,
        )?);
        cache.insert(key, transform.clone());
        Ok(transform)
    }

    /// Number of cached profiles
    pub fn profile_count(&self) -> usize {
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of cached transforms
    pub fn transform_count(&self) -> usize {
        self.transforms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn build_profile(key: &ProfileKey, spec: &str) -> Result<ColorProfile> {
    match key {
        ProfileKey::Srgb => Ok(ColorProfile::new_srgb()),
        ProfileKey::File(path) => {
            if !path.is_file() {
                return Err(Error::ProfileNotFound {
                    spec: spec.to_string(),
                    resolved: path.clone(),
                });
            }
            ColorProfile::from_file(path)
        }
    }
}
