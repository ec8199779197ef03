// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svg2vectordrawable` converts SVG images into
[Android Vector Drawable](https://developer.android.com/develop/ui/views/graphics/vector-drawable-resources)
XML.

SVG simplification is done by [`usvg`]: styles, `use` elements, shapes, units
and text are resolved into a tree of groups and absolute paths.
This crate writes that tree using vector drawable elements.

```no_run
let fontdb = svg2vectordrawable::usvg::fontdb::Database::new();
let xml = svg2vectordrawable::convert_str(
    "<svg viewBox='0 0 24 24'><circle cx='12' cy='12' r='10'/></svg>",
    &svg2vectordrawable::usvg::Options::default(),
    &fontdb,
    &svg2vectordrawable::WriteOptions::default(),
).unwrap();
println!("{}", xml);
```

## Limitations

Vector drawables are much simpler than SVG:

- patterns, masks, filters, blend modes and raster images are not supported
  and will be skipped with a warning
- group opacity is applied to each child path instead
- transforms with a skew are applied to the coordinates directly
- dashed strokes become solid
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(clippy::uninlined_format_args)]

pub use usvg;
pub use xmlwriter::Indent;

pub mod batch;
mod error;
pub mod source;
mod writer;

pub use error::Error;
pub use writer::{VectorDrawableWriting, WriteOptions};

/// Converts an SVG string into a Vector Drawable XML.
///
/// SVG fragments and documents without namespaces are accepted as well.
/// See [`source::prepare`] for details.
pub fn convert_str(
    text: &str,
    opt: &usvg::Options,
    fontdb: &usvg::fontdb::Database,
    xml_opt: &WriteOptions,
) -> Result<String, Error> {
    let text = source::prepare(text);
    let tree = usvg::Tree::from_str(&text, opt, fontdb)?;
    Ok(tree.to_vector_drawable(xml_opt))
}

/// Converts an SVG data into a Vector Drawable XML.
///
/// Can contain an SVG string or a gzip compressed data.
pub fn convert_data(
    data: &[u8],
    opt: &usvg::Options,
    fontdb: &usvg::fontdb::Database,
    xml_opt: &WriteOptions,
) -> Result<String, Error> {
    if data.starts_with(&[0x1f, 0x8b]) {
        let tree = usvg::Tree::from_data(data, opt, fontdb)?;
        return Ok(tree.to_vector_drawable(xml_opt));
    }

    let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
    convert_str(text, opt, fontdb, xml_opt)
}
