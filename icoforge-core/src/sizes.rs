use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// Edge length of one square icon frame.
///
/// The ICO directory stores each dimension in a single byte (`0` meaning
/// 256), so valid edges are `1..=256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    pub const MIN_EDGE: u32 = 1;
    pub const MAX_EDGE: u32 = 256;

    pub fn new(edge: u32) -> crate::Result<Self> {
        if !(Self::MIN_EDGE..=Self::MAX_EDGE).contains(&edge) {
            return Err(IconError::InvalidSize(edge));
        }
        Ok(Self(edge))
    }

    #[inline]
    pub fn edge(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Ordered list of icon sizes written into one container.
///
/// Always non-empty and strictly ascending, so the first frame of the
/// container is the smallest one. Serializes as a plain array of edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SizeSet {
    sizes: Vec<IconSize>,
}

impl SizeSet {
    /// Standard Windows icon edges.
    pub const STANDARD_EDGES: [u32; 6] = [16, 32, 48, 64, 128, 256];

    pub fn new(edges: Vec<u32>) -> crate::Result<Self> {
        if edges.is_empty() {
            return Err(IconError::EmptySizeSet);
        }
        let sizes = edges
            .iter()
            .map(|&edge| IconSize::new(edge))
            .collect::<crate::Result<Vec<_>>>()?;
        if let Some(pair) = sizes.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(IconError::SizesNotAscending {
                previous: pair[0].edge(),
                next: pair[1].edge(),
            });
        }
        Ok(Self { sizes })
    }

    pub fn standard() -> Self {
        Self {
            sizes: Self::STANDARD_EDGES.iter().map(|&e| IconSize(e)).collect(),
        }
    }

    pub fn as_slice(&self) -> &[IconSize] {
        &self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = IconSize> + '_ {
        self.sizes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always `false`: a `SizeSet` holds at least one size.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn edges(&self) -> Vec<u32> {
        self.sizes.iter().map(|s| s.edge()).collect()
    }

    /// Human-readable list, e.g. `"16x16, 32x32"`.
    pub fn label(&self) -> String {
        size_label(&self.sizes)
    }
}

impl Default for SizeSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<u32>> for SizeSet {
    type Error = IconError;

    fn try_from(edges: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(edges)
    }
}

impl From<SizeSet> for Vec<u32> {
    fn from(set: SizeSet) -> Self {
        set.edges()
    }
}

pub(crate) fn size_label(sizes: &[IconSize]) -> String {
    sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
