// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colors used in log and console output.

use std::fmt::Display;

pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const CLEAR: &str = "\x1b[0;0m";
pub const YELLOW: &str = "\x1b[33;1m";

/// Wraps a value's `Display` output in an ANSI color.
pub trait Color {
    fn color(&self, color: &str) -> String;

    fn grey(&self) -> String;
    fn lavender(&self) -> String;
    fn mint(&self) -> String;
    fn yellow(&self) -> String;
}

#[rustfmt::skip]
impl<T> Color for T
where
    T: Display,
{
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{CLEAR}")
    }

    fn grey(&self)     -> String { self.color(GREY) }
    fn lavender(&self) -> String { self.color(LAVENDER) }
    fn mint(&self)     -> String { self.color(MINT) }
    fn yellow(&self)   -> String { self.color(YELLOW) }
}
