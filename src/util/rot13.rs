// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! ROT13 substitution cipher.
//!
//! Video payloads are stored encoded, so the lyrics shown on playback are the
//! result of [`rot13`]. The cipher is its own inverse.

/// Rotates every ASCII letter 13 places, preserving case.
///
/// Any other character is passed through untouched.
///
/// # Examples
///
/// ```
/// use choolist::util::rot13::rot13;
///
/// assert_eq!(rot13("Uryyb, jbeyq!"), "Hello, world!");
/// ```
pub fn rot13(input: &str) -> String {
    input.chars().map(rotate).collect()
}

fn rotate(c: char) -> char {
    match c {
        'A'..='M' | 'a'..='m' => (c as u8 + 13) as char,
        'N'..='Z' | 'n'..='z' => (c as u8 - 13) as char,
        _ => c,
    }
}
