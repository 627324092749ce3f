//! Behavioural tests for the report form
//!
//! Tests are organized by topic:
//! - `request` - Wire encoding of report requests
//! - `selection` - Exclusive selection across click sequences
//! - `submit` - Validation, outcomes and superseded submissions
//! - `download` - Navigation to the download endpoint

mod support;
