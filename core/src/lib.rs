//! Route specification compiler and matcher for file-convention routing.
//!
//! A discovery collaborator walks a directory tree and hands this crate
//! candidate route declarations: a filesystem-shaped path specification
//! (`users/[id]/page`, `(marketing)/dashboard`, `files/[...slug]`), an
//! HTTP method, an opaque handler reference and optional middleware
//! references. This crate turns those into a deterministic, immutable
//! routing table: it parses specifications into typed segments,
//! compiles canonical patterns and matchers, totals-orders routes by
//! specificity so the most specific wins on overlap, scopes middleware
//! by pattern prefix, and resolves incoming `(method, path)` pairs to
//! a handler reference plus extracted parameter bindings.
//!
//! Filesystem traversal, module loading, rendering, transport and
//! hot-reload mechanics all live outside this crate.

pub mod api;
pub mod errors;
pub mod routing;
