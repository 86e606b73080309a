//! Tag registry: user-defined labels with a pastel display color.
//!
//! Tags are kept in insertion order so menus list them the way they were
//! created. Colors are deterministic per name: the name seeds an RNG that
//! picks the hue, so the same tag always renders the same color.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::color::{hsl_to_rgb, lightness, parse_hex_rgb, shade, to_hex};
use crate::consts::{MAX_TAG_LEN, TAG_BORDER_SHADE, TAG_LIGHTNESS, TAG_SATURATION};

/// A label and its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Background color as `#rrggbb`.
    pub color: String,
}

impl Tag {
    /// Darker shade of the tag color for badge borders.
    #[must_use]
    pub fn border_color(&self) -> String {
        shade(&self.color, TAG_BORDER_SHADE)
    }

    /// Dark text on light tag colors, white on dark ones.
    #[must_use]
    pub fn text_color(&self) -> &'static str {
        match parse_hex_rgb(&self.color) {
            Some((r, g, b)) if lightness(r, g, b) < 0.5 => "#ffffff",
            _ => "#222222",
        }
    }

    /// Inline CSS for a badge in this tag's colors.
    #[must_use]
    pub fn badge_style(&self) -> String {
        format!(
            "background-color: {}; border-color: {}; color: {};",
            self.color,
            self.border_color(),
            self.text_color()
        )
    }
}

/// Why a tag name was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("tag name is empty")]
    EmptyName,
    #[error("tag name is {len} characters, the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// Insertion-ordered set of tags keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the tag called `name` (trimmed), creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::EmptyName`] for blank names and
    /// [`TagError::TooLong`] past [`MAX_TAG_LEN`] characters.
    pub fn get_or_create(&mut self, name: &str) -> Result<Tag, TagError> {
        let name = normalize_name(name)?;
        if let Some(existing) = self.get(&name) {
            return Ok(existing.clone());
        }
        let tag = Tag { color: pastel_color(&name), name };
        log::debug!("created tag {} ({})", tag.name, tag.color);
        self.tags.push(tag.clone());
        Ok(tag)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a tag. Returns whether it existed.
    ///
    /// This only touches the registry; [`crate::wall::Wall::delete_tag`]
    /// also strips the tag from cells.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t.name != name);
        before != self.tags.len()
    }

    /// Tags in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn normalize_name(raw: &str) -> Result<String, TagError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TagError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_TAG_LEN {
        return Err(TagError::TooLong { len, max: MAX_TAG_LEN });
    }
    Ok(name.to_owned())
}

/// Deterministic pastel color for a tag name.
#[must_use]
pub fn pastel_color(name: &str) -> String {
    let mut rng = StdRng::seed_from_u64(fnv1a(name.as_bytes()));
    let hue = rng.random_range(0.0..360.0);
    let (r, g, b) = hsl_to_rgb(hue, TAG_SATURATION, TAG_LIGHTNESS);
    to_hex(r, g, b)
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// FNV-1a over `bytes`. Fixed across toolchains, unlike `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}
