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

//! # ansi_sgr
//!
//! Generate ANSI SGR (Select Graphic Rendition) escape sequences from three
//! closed axes: text [Style], color [Placement], and color [Hue]. The encoding
//! is `ESC [ T;MC m`:
//!
//! | Field | Axis        | Codes                                             |
//! |-------|-------------|---------------------------------------------------|
//! | `T`   | [Style]     | 0 regular, 1 bold, 2 faint, 3 italic, 4 underline |
//! | `M`   | [Placement] | 3 fg normal, 4 bg normal, 9 fg bright, 10 bg bright |
//! | `C`   | [Hue]       | 0 black .. 7 white                                |
//!
//! `ESC [ 0 m` resets all formatting. Because every axis is a closed enum, a
//! malformed sequence cannot be constructed; there is no runtime error path.
//!
//! # Example usage:
//!
//! ```rust
//! use ansi_sgr::*;
//!
//! // Compose a raw SGR code.
//! let code = SgrCode::Color(Style::Bold, Placement::ForegroundNormal, Hue::Red);
//! assert_eq!(code.to_string(), "\x1b[1;31m");
//! assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
//!
//! // Or let the styled text wrapper pair the code w/ its reset.
//! println!("{}", red("bold red text").bold());
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod axis;
pub mod sgr_code;
pub mod styled_text;

// Re-export.
pub use axis::*;
pub use sgr_code::*;
pub use styled_text::*;
