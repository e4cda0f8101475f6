use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductDescriptor;

/// Length of the per-entry `_key` the studio expects on array members.
pub const IMAGE_KEY_LEN: usize = 7;

const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of an asset document created by the backend
/// (e.g. `image-3f2a...-800x600-png`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetReference(String);

impl AssetReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(rename = "_type")]
    pub kind: String,
    pub current: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub target: AssetReference,
    #[serde(rename = "_type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_key")]
    pub key: String,
    pub asset: Reference,
}

impl ImageEntry {
    fn new(asset: AssetReference, key: String) -> Self {
        Self {
            kind: "image".to_string(),
            key,
            asset: Reference {
                target: asset,
                kind: "reference".to_string(),
            },
        }
    }
}

/// The `product` document submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_type")]
    pub kind: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub slug: Slug,
    /// Zero or one entries; one only when the image upload produced an asset.
    pub images: Vec<ImageEntry>,
}

impl ProductDocument {
    /// Build the document for `product`, drawing a fresh random `_key` for the
    /// image entry.
    pub fn build(product: &ProductDescriptor, asset: Option<AssetReference>) -> Self {
        Self::build_with_key(product, asset, random_key)
    }

    /// Same as [`ProductDocument::build`] with a caller supplied key source.
    /// The key source is only invoked when an asset is present.
    pub fn build_with_key<F>(
        product: &ProductDescriptor,
        asset: Option<AssetReference>,
        key: F,
    ) -> Self
    where
        F: FnOnce() -> String,
    {
        let images = asset
            .map(|asset| vec![ImageEntry::new(asset, key())])
            .unwrap_or_default();

        Self {
            kind: "product".to_string(),
            name: product.name.to_string(),
            price: product.price,
            description: product.description.to_string(),
            slug: Slug {
                kind: "slug".to_string(),
                current: slugify(product.name),
            },
            images,
        }
    }

    pub fn asset(&self) -> Option<&AssetReference> {
        self.images.first().map(|img| &img.asset.target)
    }
}

/// Derive a URL slug from a product name.
///
/// Lower-cases the name, turns every run of whitespace into a single `-`, and
/// drops anything that is not an ASCII word character or `-`. Leading or
/// trailing whitespace in the name survives as a leading or trailing `-`.
///
/// Whitespace is the ECMAScript `\s` set, see [`is_slug_whitespace`].
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for ch in lowered.chars() {
        if is_slug_whitespace(ch) {
            if !in_space {
                out.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
        }
    }
    out
}

/// ECMAScript `\s`: Unicode `Zs`, the ASCII controls tab through carriage
/// return, the line/paragraph separators, and the BOM. Unlike
/// `char::is_whitespace` it includes U+FEFF and excludes U+0085.
pub fn is_slug_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Random lower-case base-36 key for array members.
pub fn random_key() -> String {
    let mut rng = rand::thread_rng();
    (0..IMAGE_KEY_LEN)
        .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}
