//! Wire types shared by every dashboard screen.
//!
//! Records, drafts and list payloads mirror the JSON the admin backend
//! exchanges; nothing in this crate performs I/O.

pub mod domain;
pub mod system;
