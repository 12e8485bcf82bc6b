//! Milliseconds since boot.
//!
//! The tick interrupt is the only writer, so a plain load/store pair is
//! enough even on cores without read-modify-write atomics.

use core::sync::atomic::{AtomicU32, Ordering};

static MILLIS: AtomicU32 = AtomicU32::new(0);

/// Advances the clock by one millisecond. Call only from the tick interrupt.
pub fn tick() {
    let ms = MILLIS.load(Ordering::Relaxed);
    MILLIS.store(ms.wrapping_add(1), Ordering::Release);
}

pub fn now() -> u32 {
    MILLIS.load(Ordering::Acquire)
}

/// Milliseconds elapsed from `earlier` to `later`, correct across wrap-around.
pub fn elapsed(earlier: u32, later: u32) -> u32 {
    later.wrapping_sub(earlier)
}
