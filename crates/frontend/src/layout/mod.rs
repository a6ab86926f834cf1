pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::modal::DeleteConfirmModal;
use crate::shared::toast::ToastHost;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The delete confirmation and the toast stack are mounted once here.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <center::Center />
                </div>
            </div>

            <DeleteConfirmModal />
            <ToastHost />
        </div>
    }
}
