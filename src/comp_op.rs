//! Source-over compositing of packed RGBA pixels.
//!
//! Colors are straight (not premultiplied) alpha. The RGB channels follow
//! the usual source-over weighting; the resulting alpha channel is simply
//! the larger of the two input alphas, so repeatedly layering
//! semi-transparent paint never builds up more opacity than its most opaque
//! layer.

use crate::color::{pack_rgba, unpack_rgba};

/// Blend `new` over `old`, scaling the source alpha by `global_alpha`.
///
/// Per RGB channel, with `Aa = new.a / 255 * global_alpha` and
/// `Ab = old.a / 255`:
///
/// ```text
/// C = (Ca*Aa + Cb*Ab*(1 - Aa)) / (Aa + Ab*(1 - Aa))
/// ```
///
/// rounded to the nearest byte. The output alpha is `max(old.a, new.a)`.
/// When both effective alphas are zero the result is transparent black.
#[inline]
pub fn composite(old: u32, new: u32, global_alpha: f64) -> u32 {
    let [nr, ng, nb, na] = unpack_rgba(new);
    let [or, og, ob, oa] = unpack_rgba(old);

    let aa = na as f64 / 255.0 * global_alpha;
    let ab = oa as f64 / 255.0;
    let denom = aa + ab * (1.0 - aa);
    if denom <= 0.0 || !denom.is_finite() {
        return 0;
    }

    let blend = |ca: u8, cb: u8| -> u8 {
        let ca = ca as f64 / 255.0;
        let cb = cb as f64 / 255.0;
        let c = (ca * aa + cb * ab * (1.0 - aa)) / denom;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };

    pack_rgba(blend(nr, or), blend(ng, og), blend(nb, ob), oa.max(na))
}

// ============================================================================
// Tests
// ============================================================================
