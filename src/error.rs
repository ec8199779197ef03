// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// The SVG optimizer rejected the input.
    ///
    /// Malformed XML, an invalid size or a broken GZip stream end up here.
    ParsingFailed(usvg::Error),
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::NotAnUtf8Str => None,
            Error::ParsingFailed(ref e) => Some(e),
        }
    }
}
