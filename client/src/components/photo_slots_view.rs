//! Grid of reference images with the photos matched to each.

use leptos::prelude::*;

use crate::net::types::{Photo, ReferenceImage};
use crate::util::photo_slots::split_photos;

/// One row per reference image: the reference, its photos, and placeholders
/// for missing ones. Loose photos (no references, or overflow) follow.
#[component]
pub fn PhotoSlotGrid(title: &'static str, photos: Vec<Photo>, references: Vec<ReferenceImage>) -> impl IntoView {
    let split = split_photos(&photos, &references);
    let summary = if split.slots.is_empty() {
        format!("{} photos", photos.len())
    } else {
        format!("{} of {} photos", split.total_expected() - split.total_missing(), split.total_expected())
    };

    let rows = split
        .slots
        .into_iter()
        .map(|slot| {
            let missing = slot.missing();
            let caption = slot.reference.label.clone().unwrap_or_else(|| "Reference".to_owned());
            view! {
                <div class="photo-slot" class:photo-slot--missing={missing > 0}>
                    <figure class="photo-slot__reference">
                        <img src=slot.reference.url.clone() alt=caption.clone()/>
                        <figcaption>{caption}" × "{slot.expected}</figcaption>
                    </figure>
                    <div class="photo-slot__photos">
                        {slot
                            .photos
                            .into_iter()
                            .map(|p| view! { <img class="photo-slot__photo" src=p.url alt="Site photo"/> })
                            .collect::<Vec<_>>()}
                        {(0..missing)
                            .map(|_| view! { <span class="photo-slot__placeholder">"Missing"</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let loose = (!split.overflow.is_empty()).then(|| {
        let photos = split
            .overflow
            .into_iter()
            .map(|p| view! { <img class="photo-slot__photo" src=p.url alt="Site photo"/> })
            .collect::<Vec<_>>();
        view! { <div class="photo-grid__loose">{photos}</div> }
    });

    view! {
        <section class="photo-grid">
            <h3 class="photo-grid__title">{title}" "<small>{summary}</small></h3>
            {rows}
            {loose}
        </section>
    }
}
