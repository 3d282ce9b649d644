//! Snapshot mapping integration tests.
//!
//! Covers single-document mapping, query batch mapping, and change
//! classification, each against the shared `Message` fixture type.
