//! Fixed option lists offered by the order form
//!
//! Selections are stored as indices; the lists below map them back to the
//! labels shown to the user. Order matters: an index is a position.

use super::error::LookupError;

/// Cat breeds, in picker order
pub const TYPES: &[&str] = &[
    "Persian",
    "Maine",
    "Siamese",
    "Ragdoll",
    "Sphynx",
    "Bengal",
    "Abyssinian",
    "Russian Blue",
];

/// Coat colours, in picker order
pub const COLOURS: &[&str] = &["Black", "White", "Gray", "Tabby", "Black and White"];

/// Hair lengths, in picker order
pub const HAIR_LENGTHS: &[&str] = &["Short", "Long"];

/// A named, ordered, read-only list of display labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionList {
    name: &'static str,
    labels: &'static [&'static str],
}

impl OptionList {
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn contains(&self, index: i64) -> bool {
        usize::try_from(index).is_ok_and(|i| i < self.labels.len())
    }

    /// Look up the label at `index`
    ///
    /// Negative or too-large indices yield [`LookupError::IndexOutOfRange`]
    /// instead of panicking.
    pub fn label(&self, index: i64) -> Result<&'static str, LookupError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i).copied())
            .ok_or(LookupError::IndexOutOfRange {
                list: self.name,
                index,
                len: self.labels.len(),
            })
    }
}

/// The three option lists the form picks from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    pub types: OptionList,
    pub colours: OptionList,
    pub hair_lengths: OptionList,
}

static STANDARD: CatalogOptions = CatalogOptions {
    types: OptionList::new("types", TYPES),
    colours: OptionList::new("colours", COLOURS),
    hair_lengths: OptionList::new("hairLengths", HAIR_LENGTHS),
};

impl CatalogOptions {
    /// The catalogue shipped with the form
    pub fn standard() -> &'static CatalogOptions {
        &STANDARD
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        STANDARD
    }
}
