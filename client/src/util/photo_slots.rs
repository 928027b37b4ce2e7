//! Split a task's flat before/after photo list into per-reference-image slots.
//!
//! Each reference image stands for `quantity` instances of something (three
//! rose bushes, two planters). Photos are uploaded in reference order, so slot
//! *i* takes the next `quantity_i` photos. Photos past the last slot are
//! reported as overflow rather than dropped.

#[cfg(test)]
#[path = "photo_slots_test.rs"]
mod photo_slots_test;

use crate::net::types::{Photo, ReferenceImage};

/// Photos matched to one reference image.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSlot {
    pub reference: ReferenceImage,
    pub photos: Vec<Photo>,
    /// Photos this slot needs; at least 1.
    pub expected: usize,
}

impl PhotoSlot {
    #[must_use]
    pub fn missing(&self) -> usize {
        self.expected.saturating_sub(self.photos.len())
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.missing() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotSplit {
    pub slots: Vec<PhotoSlot>,
    /// Photos beyond the sum of all slot quantities.
    pub overflow: Vec<Photo>,
}

impl SlotSplit {
    /// True when no slot is missing photos (vacuously true with no slots).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(PhotoSlot::is_filled)
    }

    #[must_use]
    pub fn total_expected(&self) -> usize {
        self.slots.iter().fold(0, |total, s| total.saturating_add(s.expected))
    }

    #[must_use]
    pub fn total_missing(&self) -> usize {
        self.slots.iter().fold(0, |total, s| total.saturating_add(s.missing()))
    }
}

/// Photos a reference image asks for. Non-positive quantities count as 1.
#[must_use]
pub fn expected_count(quantity: i64) -> usize {
    usize::try_from(quantity.max(1)).unwrap_or(1)
}

/// Assign `photos` in order to one slot per entry of `references`.
#[must_use]
pub fn split_photos(photos: &[Photo], references: &[ReferenceImage]) -> SlotSplit {
    let mut remaining = photos.iter();
    let slots = references
        .iter()
        .map(|reference| {
            let expected = expected_count(reference.quantity);
            let taken: Vec<Photo> = remaining.by_ref().take(expected).cloned().collect();
            PhotoSlot { reference: reference.clone(), photos: taken, expected }
        })
        .collect();
    SlotSplit { slots, overflow: remaining.cloned().collect() }
}
