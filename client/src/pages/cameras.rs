//! Camera page: the four gate cameras as fixed images.

use leptos::prelude::*;

use crate::components::content_wrapper::{Align, ContentWrapper};
use crate::util::assets::CAMERAS;

#[component]
pub fn CamerasPage() -> impl IntoView {
    view! {
        <ContentWrapper align=Align::Top>
            <div class="paper cameras-page">
                <h4 class="page-title">"Câmeras"</h4>
                <div class="cameras-page__grid">
                    {CAMERAS
                        .iter()
                        .map(|cam| {
                            view! {
                                <figure class="cameras-page__feed">
                                    <img src=cam.url() alt=cam.alt()/>
                                    <figcaption>{cam.alt()}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </ContentWrapper>
    }
}
