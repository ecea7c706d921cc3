// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Section decoders
//!
//! - [`rc`] - RC column and beam sections with resolved plan dimensions
//! - [`steel`] - Steel column, beam and brace sections
//! - [`catalog`] - The parametric steel shape catalog
//! - [`bar`] - Ver1 bar arrangement vectors for RC sections

pub mod bar;
pub mod catalog;
pub mod rc;
pub mod steel;

pub use catalog::{load_sec_steel, SteelIndex};
pub use rc::{load_sec_beam_rc, load_sec_column_rc, BeamFigure, ColumnFigure};
pub use steel::{load_sec_beam_s, load_sec_brace_s, load_sec_column_s, SteelFigure};
