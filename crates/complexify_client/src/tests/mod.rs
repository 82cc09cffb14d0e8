//! Tests for the client library.
//!
//! - `protocol` - wire-type shapes and verbatim metric rendering
//! - `client` - the HTTP exchange against a canned local listener
