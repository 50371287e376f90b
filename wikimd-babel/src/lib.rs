//! Wiki markup to Markdown conversion
//!
//!     This crate converts documents written in the Jira/Confluence wiki dialect into CommonMark.
//!     Only syntax is converted: every piece of visible content in the input is kept.
//!
//!     This is a pure lib, that is, it powers wikimd-cli but is shell agnostic: no code here
//!     reads files, prints, or looks at environment variables. Callers hand over a complete
//!     document and get a complete document back.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                    # ConvertError, FormatError
//!     ├── format.rs                   # Format trait definition
//!     ├── registry.rs                 # FormatRegistry for discovery and selection
//!     ├── transforms.rs               # convert / convert_with_rules
//!     ├── formats
//!     │   └── jira
//!     │       ├── blocks.rs           # code block extraction and reinsertion
//!     │       ├── line_state.rs       # color spans, list nesting
//!     │       ├── inline.rs           # ordered per-line rules
//!     │       ├── conversion_rules.rs # output knobs
//!     │       └── mod.rs              # Converter, JiraWikiFormat
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Core Algorithm
//!
//!     The engine is not a parser: it is an ordered pipeline of rewrites over the document text.
//!     The hard parts are the constructs a single per-line substitution cannot express:
//!     - code blocks, whose content must survive every later rule untouched;
//!     - color spans, which may open and close on different lines;
//!     - nested lists, whose depth is encoded in the length of the marker run.
//!
//!     See ./formats/jira/mod.rs for the pass order and the element mapping table.
//!
//!     The conversion never fails on odd markup: anything unrecognized is text. It fails only
//!     when a code block placeholder went missing or out of order, which would otherwise
//!     silently lose content.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub use error::{ConvertError, FormatError};
pub use format::Format;
pub use formats::{ConversionRules, Converter, JiraWikiFormat};
pub use registry::FormatRegistry;
pub use transforms::{convert, convert_with_rules};
