//! Tests for the coordinate parser
