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

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::{SmallVec, smallvec};

use crate::{Hue, Placement, SgrCode, Style};

/// A text slice paired with the SGR codes to emit before it. It has two
/// fields:
/// - `text` - the text to print.
/// - `codes` - a list of [SgrCode] to apply to the text. This is owned in a
///   stack allocated buffer (which can spill to the heap if it gets larger
///   than [sizing::MAX_STYLED_TEXT_CODE_SIZE]).
///
/// The [Display] impl writes every code, then the text, then
/// [SgrCode::Reset], so formatting never bleeds into subsequent output.
///
/// # Example usage:
///
/// ```rust
/// use ansi_sgr::*;
///
/// // Using the constructor functions.
/// let red_text = red("This is red text.");
/// println!("{red_text}");
/// red_text.println();
///
/// // Combine constructor functions w/ builder methods.
/// let loud = yellow("warning").bold().on_bg(Hue::Black);
/// println!("{loud}");
///
/// // Flexible construction from the axis enums.
/// let dim_bright_cyan = fg_bright(Hue::Cyan, "hint").with_style(Style::Faint);
/// println!("{dim_bright_cyan}");
///
/// // Verbose struct construction.
/// AnsiStyledText {
///     text: "Underlined white on bright purple.",
///     codes: smallvec::smallvec![
///         SgrCode::Color(Style::Underline, Placement::ForegroundNormal, Hue::White),
///         SgrCode::Color(Style::Regular, Placement::BackgroundBright, Hue::Purple),
///     ],
/// }
/// .println();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub codes: sizing::InlineVecSgrCodes,
}

pub mod sizing {
    use super::*;

    /// One foreground code plus a background code covers the common case; a
    /// couple of spare slots before spilling to the heap.
    pub const MAX_STYLED_TEXT_CODE_SIZE: usize = 4;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_STYLED_TEXT_CODE_SIZE]>;

    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
}

mod styled_text_impl {
    use super::*;

    impl AnsiStyledText<'_> {
        pub fn println(&self) {
            println!("{}", self);
        }

        /// This is different than the [Display] trait implementation, because
        /// it doesn't allocate a new [String], but instead allocates an inline
        /// buffer on the stack. If this buffer gets larger than
        /// [sizing::DEFAULT_STRING_STORAGE_SIZE], it will spill to the heap.
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; super::sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            format!("{}", self).into()
        }
    }
}

/// Regular-weight foreground text in the normal half of the palette.
pub fn fg(hue: Hue, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        codes: smallvec!(SgrCode::Color(
            Style::Regular,
            Placement::ForegroundNormal,
            hue
        )),
    }
}

/// Regular-weight foreground text in the bright half of the palette.
pub fn fg_bright(hue: Hue, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        codes: smallvec!(SgrCode::Color(
            Style::Regular,
            Placement::ForegroundBright,
            hue
        )),
    }
}

pub fn black(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Black, text)
}

pub fn red(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Red, text)
}

pub fn green(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Green, text)
}

pub fn yellow(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Yellow, text)
}

pub fn blue(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Blue, text)
}

pub fn purple(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Purple, text)
}

pub fn cyan(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::Cyan, text)
}

pub fn white(text: &str) -> AnsiStyledText<'_> {
    fg(Hue::White, text)
}

impl AnsiStyledText<'_> {
    /// Restyles the foreground code (the one the constructor functions
    /// create). Background codes are left untouched since the terminal
    /// ignores the style field when painting a background cell.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        if let Some(SgrCode::Color(existing, _, _)) = self.codes.first_mut() {
            *existing = style;
        }
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with_style(Style::Bold)
    }

    #[must_use]
    pub fn faint(self) -> Self {
        self.with_style(Style::Faint)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.with_style(Style::Italic)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.with_style(Style::Underline)
    }

    /// Appends a background code in the normal half of the palette.
    #[must_use]
    pub fn on_bg(mut self, hue: Hue) -> Self {
        self.codes.push(SgrCode::Color(
            Style::Regular,
            Placement::BackgroundNormal,
            hue,
        ));
        self
    }

    /// Appends a background code in the bright half of the palette.
    #[must_use]
    pub fn on_bg_bright(mut self, hue: Hue) -> Self {
        self.codes.push(SgrCode::Color(
            Style::Regular,
            Placement::BackgroundBright,
            hue,
        ));
        self
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for AnsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for code in &self.codes {
                write!(f, "{}", code)?;
            }
            write!(f, "{}", self.text)?;
            write!(f, "{}", SgrCode::Reset)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::{cyan, fg_bright, red, yellow};
    use crate::{AnsiStyledText, Hue, Placement, SgrCode, Style};

    #[test]
    fn test_constructor_and_builder_debug_shape() {
        let eg_1 = red("Hello");
        println!("{:?}", eg_1);
        println!("{}", eg_1);
        assert_eq!(
            format!("{:?}", eg_1),
            r#"AnsiStyledText { text: "Hello", codes: [Color(Regular, ForegroundNormal, Red)] }"#
        );

        let eg_2 = eg_1.bold().on_bg_bright(Hue::Yellow);
        println!("{:?}", eg_2);
        println!("{}", eg_2);
        assert_eq!(
            format!("{:?}", eg_2),
            r#"AnsiStyledText { text: "Hello", codes: [Color(Bold, ForegroundNormal, Red), Color(Regular, BackgroundBright, Yellow)] }"#
        );
    }

    #[test]
    fn test_formatted_string_creation() {
        let eg_1 = AnsiStyledText {
            text: "Hello",
            codes: smallvec!(
                SgrCode::Color(Style::Bold, Placement::ForegroundNormal, Hue::Red),
                SgrCode::Color(Style::Regular, Placement::BackgroundNormal, Hue::Blue),
            ),
        };

        assert_eq!(
            format!("{0}", eg_1),
            "\x1b[1;31m\x1b[0;44mHello\x1b[0m".to_string()
        );

        let eg_2 = AnsiStyledText {
            text: "World",
            codes: smallvec!(SgrCode::Color(
                Style::Underline,
                Placement::ForegroundBright,
                Hue::Cyan
            )),
        };

        assert_eq!(format!("{0}", eg_2), "\x1b[4;96mWorld\x1b[0m".to_string());
    }

    #[test]
    fn test_output_always_ends_with_reset() {
        let styled = yellow("warning").italic().on_bg(Hue::Black);
        let output = styled.to_string();
        assert!(output.ends_with("\x1b[0m"));
        assert_eq!(output, "\x1b[3;33m\x1b[0;40mwarning\x1b[0m");
    }

    #[test]
    fn test_bright_constructor() {
        let styled = fg_bright(Hue::Green, "ok");
        assert_eq!(styled.to_string(), "\x1b[0;92mok\x1b[0m");
    }

    #[test]
    fn test_to_small_str_matches_display() {
        let styled = cyan("note").faint();
        assert_eq!(styled.to_small_str().as_str(), format!("{}", styled));
        assert_eq!(styled.to_small_str().as_str(), "\x1b[2;36mnote\x1b[0m");
    }
}
