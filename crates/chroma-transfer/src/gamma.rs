//! Pure power-law gamma.
//!
//! The standard curve shape: a single exponent, no linear toe. Covers
//! linear (gamma 1.0) as a trivial special case and legacy encodings like
//! the JPEG 2.2 gamma.
//!
//! # Range
//!
//! Inputs at or below zero map to zero; no mirroring of negatives.

/// Encodes a linear value with a power-law curve: `c^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::gamma::encode;
///
/// let v = encode(0.218, 2.2);
/// assert!((v - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(c: f32, gamma: f32) -> f32 {
    if c <= 0.0 { 0.0 } else { c.powf(1.0 / gamma) }
}

/// Decodes an encoded value with a power-law curve: `c^gamma`.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::gamma::decode;
///
/// let linear = decode(0.5, 2.2);
/// assert!((linear - 0.218).abs() < 0.01);
/// ```
#[inline]
pub fn decode(c: f32, gamma: f32) -> f32 {
    if c <= 0.0 { 0.0 } else { c.powf(gamma) }
}

/// Applies gamma correction with an arbitrary image gamma.
///
/// Equivalent to [`encode`]: `c^(1/image_gamma)`. Kept as a standalone
/// helper for collaborators that gamma-correct single channels without
/// going through a profile (JPEG is 2.2 for example; if unsure use 1.0).
#[inline]
pub fn gamma_correct(c: f32, image_gamma: f32) -> f32 {
    c.powf(1.0 / image_gamma)
}

/// Un-applies gamma correction with an arbitrary image gamma.
///
/// Equivalent to [`decode`]: `c^image_gamma`.
#[inline]
pub fn gamma_uncorrect(c: f32, image_gamma: f32) -> f32 {
    c.powf(image_gamma)
}
