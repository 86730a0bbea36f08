//! # wortteiler
//!
//! Client-side core of the wortteiler compound-word lookup.
//!
//! A user submits a German word; the server at `/split/<word>` answers with
//! a tree showing how the word breaks into smaller dictionary words, each
//! with its English definitions. This crate holds everything about that
//! exchange that does not need a browser:
//!
//! - **Wire model**: [`SplitNode`], decoded from the server's JSON
//! - **Renderer**: [`render_result`] turns a tree into an abstract
//!   [`RenderNode`] the UI attaches to the page
//! - **Form controller**: [`FormState`] tracks the input field, in-flight
//!   requests and the result area
//!
//! ## Example
//!
//! ```
//! use wortteiler::{ClientConfig, FormState, Outcome, ResultView};
//!
//! let config = ClientConfig::default();
//! let (state, request) = FormState::new().submit("probieren", &config);
//! let request = request.unwrap();
//! assert_eq!(request.path, "/split/probieren");
//!
//! let body = r#"{"word":"probieren","defns":["to try"]}"#.to_string();
//! let state = state.settle(request.id, Outcome::Body(body), &config);
//! assert!(state.input_enabled);
//! assert!(matches!(state.result, ResultView::Rendered(_)));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod render;
pub mod tree;

pub use config::{ClientConfig, Layout, RequestMethod};
pub use controller::{FormState, LOADING_TEXT, Outcome, ResultView};
pub use error::{ConfigError, LookupError};
pub use lookup::{LookupRequest, RequestId, dictionary_link, split_path, validate_word};
pub use render::{Element, RenderNode, TREE_ID, render_node, render_outline, render_result};
pub use tree::SplitNode;
