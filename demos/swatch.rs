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

//! Prints every style × placement × hue combination so the sequences can be
//! checked visually on a real terminal.

use ansi_sgr::{AnsiStyledText, Hue, Placement, SgrCode, Style, red, yellow};
use strum::IntoEnumIterator;

fn main() {
    // Print a string w/ SGR codes.
    {
        AnsiStyledText {
            text: "Print a formatted (bold, red on bright yellow) string w/ SGR codes.",
            codes: smallvec::smallvec![
                SgrCode::Color(Style::Bold, Placement::ForegroundNormal, Hue::Red),
                SgrCode::Color(Style::Regular, Placement::BackgroundBright, Hue::Yellow),
            ],
        }
        .println();

        red("Constructor function, restyled w/ builder methods.")
            .underline()
            .on_bg(Hue::Black)
            .println();

        yellow("warning: bright black background").on_bg_bright(Hue::Black).println();
    }

    // Print the full swatch, one line per (style, placement) pair.
    {
        for style in Style::iter() {
            for placement in Placement::iter() {
                print!("{style};{placement}  ");
                for hue in Hue::iter() {
                    let code = SgrCode::Color(style, placement, hue);
                    print!("{code} {hue:?} {reset}", reset = SgrCode::Reset);
                }
                println!();
            }
        }
    }
}
