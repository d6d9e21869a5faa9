//! Media maintenance: batch image optimization for the storefront's upload
//! folders.

pub mod optimize;
