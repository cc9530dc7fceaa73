// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for the parsed commit record.

mod message;

pub use message::ParsedCommit;
