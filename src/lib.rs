//! Workspace-level integration tests for trapcalc live under `tests/`.
