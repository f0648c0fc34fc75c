#![warn(missing_docs)]
//! `scard-core` - headless engines for the Scard card format.
//!
//! # Overview
//!
//! A `.scard` file is a flat list of `key = value` lines with `#` comments:
//!
//! ```text
//! # comment line
//! id = "unique_card_id"
//! rarity = "COMMON"
//! npcName = "Name"
//! npcSpeed = 1.0f
//! npcPassing = 10
//! npcShooting = 10
//! ```
//!
//! This crate provides what an editor needs to work with it. Rendering, file persistence and
//! scheduling stay with the host.
//!
//! ```text
//! ┌─────────────────────────────┐   ┌──────────────────────────┐
//! │  Validator (validate)       │   │  Lexer (tokenize)        │
//! └──────────────┬──────────────┘   └────────────┬─────────────┘
//!                └──────────┬────────────────────┘
//!                 Style Composer (compute_styles)
//!
//!  Completion (get_suggestions / resolve_insertion) works on the caret line only.
//! ```
//!
//! Every operation is a pure function of its inputs, so results can be computed on any thread.
//! All offsets are counted in Unicode scalar values (`char`).
//!
//! # Quick Start
//!
//! ```rust
//! use scard_core::{compute_styles, get_suggestions, resolve_insertion, spans_len, validate};
//!
//! let text = "id = \"c1\"\nrarity = COMMON";
//! let diagnostics = validate(text);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].line, Some(1));
//!
//! let styles = compute_styles(text, &diagnostics);
//! assert_eq!(spans_len(&styles), text.chars().count());
//!
//! assert_eq!(get_suggestions("npcSp", 5), vec!["npcSpeed"]);
//! let plan = resolve_insertion("npcSp", 5, "npcSpeed").unwrap();
//! assert_eq!(plan.apply("npcSp").as_deref(), Some("npcSpeed"));
//! ```
//!
//! # Module Description
//!
//! - [`registry`] - the fixed field table and `rarity` members
//! - [`lexer`] - single-line tokenizer
//! - [`validator`] - whole-document validation
//! - [`diagnostics`] - diagnostic data model
//! - [`styles`] - style span composition
//! - [`completion`] - suggestions and insertion planning
//! - [`analysis`] - combined analysis and status text
//! - [`config`] - renderer class names

pub mod analysis;
pub mod completion;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod lexer;
pub mod registry;
pub mod styles;
pub mod template;
pub mod validator;

pub use analysis::{Analysis, analyze, caret_status, status_line};
pub use completion::{
    CompletionContext, InsertionKind, InsertionPlan, completion_context, get_suggestions,
    resolve_insertion, resolve_insertion_as,
};
pub use config::StyleClasses;
pub use diagnostics::{Diagnostic, Issue, Severity};
pub use error::ScardError;
pub use lexer::{Token, TokenKind, tokenize};
pub use registry::{FIELDS, FieldKind, FieldSpec, RARITY_VALUES};
pub use styles::{StyleSpan, StyleTag, compute_styles, spans_len};
pub use template::TEMPLATE;
pub use validator::validate;
