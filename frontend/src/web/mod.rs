//! Browser API wrappers
//!
//! Thin layers over `web_sys` for the pieces the app needs: history-based
//! routing and `localStorage`.

pub mod router;
mod storage;

pub use storage::LocalStorage;
