//! Built-in nodes and the demo analysis pipeline
//!
//! The three nodes here form the fixed chain the server runs on every
//! `/api/analyse-css` request: `welcome` and `question` fill in the state,
//! `display` writes both lines to its sink and clears the state.

mod display;
mod pipeline;
mod question;
mod welcome;

pub use display::{stdout_sink, DisplayNode, OutputSink};
pub use pipeline::{analyse_css, create_graph};
pub use question::{QuestionNode, QUESTION_TEXT};
pub use welcome::{WelcomeNode, WELCOME_MESSAGE};
