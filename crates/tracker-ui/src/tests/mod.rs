//! Behavioral tests for the UI
//!
//! BDD-style tests using given-when-then naming. They exercise the pure
//! parts of the view layer and the reactive state, not the DOM.
