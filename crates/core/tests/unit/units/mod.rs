//! # Execution Unit Tests
