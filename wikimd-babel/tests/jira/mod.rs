//! Jira wiki format tests
//!
//! Tests for wiki markup → Markdown conversion through the public API.

mod commonmark;
mod conversion;
mod kitchensink;
