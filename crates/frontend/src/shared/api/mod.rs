pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod http;

pub use client::{
    delete_record, fetch_choices, fetch_listing, filter, ApiHandle, Attachment, Filters, Operation, RequestBody,
    ResourceApi,
};
pub use error::ApiError;
pub use http::{AuthMode, HttpResourceClient};

use leptos::prelude::*;

/// The resource client provided by `App`
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>().expect("ResourceApi not found in context")
}
