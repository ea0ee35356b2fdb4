//! # Body classifier
//!
//! Partitions the discovered bodies between the two panels. A body belongs to
//! the **inner set** iff its radial distance at the first sampled frame is
//! within the close-in viewport radius. The **outer set** is always every
//! discovered body, unconditionally.
//!
//! Edge-case policy: when no body starts inside the close-in radius (all
//! bodies beyond it, or an empty series), the inner set falls back to the
//! first `min(5, bodyCount)` discovered bodies so the close-in panel is never
//! empty. Five covers a Sun-through-Mars inner system when the table lists
//! bodies outward from the center.

use crate::constants::PanelSet;
use crate::playback::sampler::SampledSeries;

/// How many leading bodies the inner panel falls back to when no body starts
/// within the close-in radius.
pub(crate) const INNER_FALLBACK_COUNT: usize = 5;

/// Indices of the bodies shown in the close-in panel, in discovery order.
pub(crate) fn classify_inner(series: &SampledSeries, inner_radius: f64) -> PanelSet {
    let fallback = || (0..series.body_count().min(INNER_FALLBACK_COUNT)).collect();

    if series.frame_count() == 0 {
        return fallback();
    }

    let inner: PanelSet = (0..series.body_count())
        .filter(|&body| series.position(body, 0).norm() <= inner_radius)
        .collect();

    if inner.is_empty() {
        fallback()
    } else {
        inner
    }
}
