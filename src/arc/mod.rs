// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod request;
mod slerp;

pub use request::{ArcError, ArcRequest, DEFAULT_SAMPLE_COUNT};
pub use slerp::{compute_arc, ArcPath};
