//! Cross-platform plumbing shared by the page components.

pub mod color;
pub mod dom;
pub mod platform;
pub mod storage;
pub mod throttle;
pub mod timing;
