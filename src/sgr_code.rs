/*
 *   Copyright (c) 2024-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{Hue, Placement, Style};

/// A single SGR escape sequence, encoded as `T;MC` where `T` is the [Style]
/// code, `M` is the [Placement] code, and `C` is the [Hue] code. `M` and `C`
/// are adjacent with no separator, so eg bold red foreground is `1;31` and
/// regular yellow bright background is `0;103`.
///
/// [SgrCode::Reset] sits outside the `T;MC` space and clears all active
/// formatting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Color(Style, Placement, Hue),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://www.asciitable.com/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                           => write!(f, "{CSI}0{SGR}"),
                SgrCode::Color(style, placement, hue)    => write!(f, "{CSI}{style};{placement}{hue}{SGR}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::SgrCode;
    use crate::{Hue, Placement, Style};

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn bold_red_foreground() {
        let sgr_code = SgrCode::Color(Style::Bold, Placement::ForegroundNormal, Hue::Red);
        assert_eq!(sgr_code.to_string(), "\x1b[1;31m");
    }

    #[test]
    fn regular_yellow_bright_background() {
        let sgr_code =
            SgrCode::Color(Style::Regular, Placement::BackgroundBright, Hue::Yellow);
        assert_eq!(sgr_code.to_string(), "\x1b[0;103m");
    }

    #[test]
    fn italic_black_foreground() {
        let sgr_code =
            SgrCode::Color(Style::Italic, Placement::ForegroundNormal, Hue::Black);
        assert_eq!(sgr_code.to_string(), "\x1b[3;30m");
    }

    #[test]
    fn faint_purple_bright_foreground() {
        let sgr_code =
            SgrCode::Color(Style::Faint, Placement::ForegroundBright, Hue::Purple);
        assert_eq!(sgr_code.to_string(), "\x1b[2;95m");
    }

    #[test]
    fn underline_cyan_background() {
        let sgr_code =
            SgrCode::Color(Style::Underline, Placement::BackgroundNormal, Hue::Cyan);
        assert_eq!(sgr_code.to_string(), "\x1b[4;46m");
    }

    /// Every combination in the 5 × 4 × 8 domain renders as the literal
    /// concatenation of the documented numeric codes. The code tables here are
    /// written out independently so this does not just mirror the
    /// implementation.
    #[test]
    fn every_combination_renders_the_documented_shape() {
        let style_codes = ["0", "1", "2", "3", "4"];
        let placement_codes = ["3", "4", "9", "10"];
        let hue_codes = ["0", "1", "2", "3", "4", "5", "6", "7"];

        let mut case_count = 0;
        for (style, t) in Style::iter().zip(style_codes) {
            for (placement, m) in Placement::iter().zip(placement_codes) {
                for (hue, c) in Hue::iter().zip(hue_codes) {
                    let expected = format!("\x1b[{t};{m}{c}m");
                    let actual = SgrCode::Color(style, placement, hue).to_string();
                    assert_eq!(actual, expected);
                    case_count += 1;
                }
            }
        }
        assert_eq!(case_count, 160);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let sgr_code = SgrCode::Color(Style::Bold, Placement::ForegroundBright, Hue::Green);
        assert_eq!(sgr_code.to_string(), sgr_code.to_string());
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
    }
}
