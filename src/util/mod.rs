//! Small browser-environment helpers shared across the app.

pub mod clock;
pub mod delay;
pub mod storage;
