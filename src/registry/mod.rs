//! University Format Registry
//!
//! Read-only, per-institution thesis format requirements. Built once and
//! shared; lookups never fail, unknown institutions resolve to the default
//! (PUP) format so checking can still proceed against a reasonable baseline.
//!
//! ## Architecture
//! - `types.rs` - FormatRequirement and its parts
//! - `formats.rs` - Built-in PUP / VSU / CMU formats
//!
//! Extra institutions can be loaded from a JSON array of format documents
//! and merged over the built-ins with [`FormatRegistry::with_overrides`].

pub mod formats;
pub mod types;

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::RegistryError;
use crate::utils::normalize_slug;

pub use formats::{builtin_formats, DEFAULT_SLUG};
pub use types::{
    ChapterRequirement, FormatRequirement, FormattingRequirements, InstitutionSummary, Margins,
    PagePosition, PaginationRequirements, Spacing,
};

static BUILTIN: OnceLock<FormatRegistry> = OnceLock::new();

/// Institution formats indexed by normalized slug
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: Vec<FormatRequirement>,
    index: FxHashMap<String, usize>,
    default_index: usize,
}

impl FormatRegistry {
    /// Process-wide registry of the built-in formats, constructed on first use.
    pub fn builtin() -> &'static FormatRegistry {
        BUILTIN.get_or_init(|| {
            let registry = Self::from_validated(builtin_formats());
            tracing::info!("Built-in format registry ready ({} institutions)", registry.len());
            registry
        })
    }

    /// Build a registry, validating every format.
    ///
    /// Slugs are normalized before indexing. Each format needs at least one
    /// chapter and one end-matter entry, slugs must be unique, and the default
    /// institution must be present.
    pub fn from_formats(formats: Vec<FormatRequirement>) -> std::result::Result<Self, RegistryError> {
        let mut normalized = Vec::with_capacity(formats.len());
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for mut format in formats {
            let slug = normalize_slug(&format.slug);
            if slug.is_empty() {
                return Err(RegistryError::EmptySlug);
            }
            if format.chapter_structure.is_empty() {
                return Err(RegistryError::NoChapters(slug));
            }
            if format.end_matter.is_empty() {
                return Err(RegistryError::NoEndMatter(slug));
            }
            if !seen.insert(slug.clone()) {
                return Err(RegistryError::DuplicateSlug(slug));
            }
            format.slug = slug;
            normalized.push(format);
        }

        if !seen.contains(DEFAULT_SLUG) {
            return Err(RegistryError::MissingDefault);
        }

        Ok(Self::from_validated(normalized))
    }

    /// Index formats already known to satisfy the registry invariants.
    fn from_validated(formats: Vec<FormatRequirement>) -> Self {
        let index: FxHashMap<String, usize> = formats
            .iter()
            .enumerate()
            .map(|(i, f)| (normalize_slug(&f.slug), i))
            .collect();
        let default_index = index.get(DEFAULT_SLUG).copied().unwrap_or(0);

        Self {
            formats,
            index,
            default_index,
        }
    }

    /// Parse a JSON array of format documents.
    pub fn parse_formats(json: &str) -> Result<Vec<FormatRequirement>> {
        serde_json::from_str(json).context("Failed to parse university format document")
    }

    /// Read a JSON array of format documents from disk.
    pub fn read_formats(path: &Path) -> Result<Vec<FormatRequirement>> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read format file: {:?}", path))?;
        Self::parse_formats(&contents)
            .with_context(|| format!("Invalid format file: {:?}", path))
    }

    /// Load a complete registry from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let formats = Self::read_formats(path)?;
        let registry = Self::from_formats(formats)
            .with_context(|| format!("Format file {:?} violates registry rules", path))?;
        tracing::info!("Loaded {} institutions from {:?}", registry.len(), path);
        Ok(registry)
    }

    /// Merge formats over this registry.
    ///
    /// A format whose slug already exists replaces the existing entry in place;
    /// new slugs are appended in the order given.
    pub fn with_overrides(
        &self,
        overrides: Vec<FormatRequirement>,
    ) -> std::result::Result<Self, RegistryError> {
        let mut formats = self.formats.clone();

        for format in overrides {
            let slug = normalize_slug(&format.slug);
            match formats.iter().position(|f| f.slug == slug) {
                Some(existing) => {
                    tracing::warn!("Overriding format for institution '{}'", slug);
                    formats[existing] = format;
                }
                None => formats.push(format),
            }
        }

        Self::from_formats(formats)
    }

    /// Format for an institution, falling back to the default institution.
    ///
    /// The identifier is normalized (lowercase, whitespace to hyphens) first.
    /// Never fails: an unsupported institution is checked against PUP.
    pub fn lookup(&self, institution: &str) -> &FormatRequirement {
        match self.get(institution) {
            Some(format) => format,
            None => {
                tracing::debug!(
                    "No format for institution '{}' (normalized '{}'), using '{}'",
                    institution,
                    normalize_slug(institution),
                    DEFAULT_SLUG
                );
                &self.formats[self.default_index]
            }
        }
    }

    /// Format for an institution, or None when it is not registered.
    pub fn get(&self, institution: &str) -> Option<&FormatRequirement> {
        self.index
            .get(&normalize_slug(institution))
            .map(|&i| &self.formats[i])
    }

    /// Whether an institution has its own entry
    pub fn contains(&self, institution: &str) -> bool {
        self.index.contains_key(&normalize_slug(institution))
    }

    /// Names and slugs of all registered institutions, in registry order
    pub fn supported(&self) -> Vec<InstitutionSummary> {
        self.formats
            .iter()
            .map(|f| InstitutionSummary {
                name: f.name.clone(),
                slug: f.slug.clone(),
            })
            .collect()
    }

    /// The fallback format
    pub fn default_format(&self) -> &FormatRequirement {
        &self.formats[self.default_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatRequirement> {
        self.formats.iter()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
