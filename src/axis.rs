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

//! The three closed axes of the SGR encoding scheme. More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// Text rendition weight/decoration. Occupies the `T` field of the `T;MC`
/// encoding (see [crate::SgrCode]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Style {
    Regular,
    Bold,
    Faint,
    Italic,
    Underline,
}

/// Where the color lands (foreground or background) and whether the bright
/// half of the palette is used. Occupies the `M` field of the `T;MC` encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Placement {
    ForegroundNormal,
    BackgroundNormal,
    ForegroundBright,
    BackgroundBright,
}

/// One of the eight base terminal colors. Occupies the `C` field of the `T;MC`
/// encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

/// Names an axis of the encoding, for use in [InvalidCode].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Style,
    Placement,
    Hue,
}

/// A raw numeric code fell outside the closed domain of its axis. This only
/// arises on the [TryFrom] conversions; values of [Style], [Placement], and
/// [Hue] themselves cannot produce malformed output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid SGR {axis} code: {value}")]
pub struct InvalidCode {
    pub axis: Axis,
    pub value: u8,
}

pub mod axis_code_impl {
    use super::*;

    impl Style {
        #[must_use]
        pub fn code(&self) -> u8 {
            match self {
                Style::Regular => 0,
                Style::Bold => 1,
                Style::Faint => 2,
                Style::Italic => 3,
                Style::Underline => 4,
            }
        }
    }

    impl Placement {
        #[must_use]
        pub fn code(&self) -> u8 {
            match self {
                Placement::ForegroundNormal => 3,
                Placement::BackgroundNormal => 4,
                Placement::ForegroundBright => 9,
                Placement::BackgroundBright => 10,
            }
        }
    }

    impl Hue {
        #[must_use]
        pub fn code(&self) -> u8 {
            match self {
                Hue::Black => 0,
                Hue::Red => 1,
                Hue::Green => 2,
                Hue::Yellow => 3,
                Hue::Blue => 4,
                Hue::Purple => 5,
                Hue::Cyan => 6,
                Hue::White => 7,
            }
        }
    }

    impl Display for Style {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.code())
        }
    }

    impl Display for Placement {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.code())
        }
    }

    impl Display for Hue {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.code())
        }
    }

    impl Display for Axis {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Axis::Style     => write!(f, "style"),
                Axis::Placement => write!(f, "placement"),
                Axis::Hue       => write!(f, "hue"),
            }
        }
    }
}

pub mod axis_try_from_impl {
    use super::*;

    impl TryFrom<u8> for Style {
        type Error = InvalidCode;

        fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
            match value {
                0 => Ok(Style::Regular),
                1 => Ok(Style::Bold),
                2 => Ok(Style::Faint),
                3 => Ok(Style::Italic),
                4 => Ok(Style::Underline),
                _ => Err(InvalidCode {
                    axis: Axis::Style,
                    value,
                }),
            }
        }
    }

    impl TryFrom<u8> for Placement {
        type Error = InvalidCode;

        fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
            match value {
                3 => Ok(Placement::ForegroundNormal),
                4 => Ok(Placement::BackgroundNormal),
                9 => Ok(Placement::ForegroundBright),
                10 => Ok(Placement::BackgroundBright),
                _ => Err(InvalidCode {
                    axis: Axis::Placement,
                    value,
                }),
            }
        }
    }

    impl TryFrom<u8> for Hue {
        type Error = InvalidCode;

        fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
            match value {
                0 => Ok(Hue::Black),
                1 => Ok(Hue::Red),
                2 => Ok(Hue::Green),
                3 => Ok(Hue::Yellow),
                4 => Ok(Hue::Blue),
                5 => Ok(Hue::Purple),
                6 => Ok(Hue::Cyan),
                7 => Ok(Hue::White),
                _ => Err(InvalidCode {
                    axis: Axis::Hue,
                    value,
                }),
            }
        }
    }
}
