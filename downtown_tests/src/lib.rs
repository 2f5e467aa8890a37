//! Test-only crate. The actual coverage lives under `tests/`.
