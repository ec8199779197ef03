// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use usvg::tiny_skia_path::{self, PathSegment};
use usvg::{
    AspectRatio, BaseGradient, BlendMode, ClipPath, Color, Fill, FillRule, Group, LineCap,
    LineJoin, Node, Paint, PaintOrder, Path, SpreadMethod, Stroke, Transform, Tree, Visibility,
};
use xmlwriter::{Indent, XmlWriter};

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
const AAPT_NS: &str = "http://schemas.android.com/aapt";

/// A trait to write `usvg::Tree` as an Android Vector Drawable.
pub trait VectorDrawableWriting {
    /// Writes `usvg::Tree` as an Android Vector Drawable XML.
    fn to_vector_drawable(&self, opt: &WriteOptions) -> String;
}

impl VectorDrawableWriting for Tree {
    fn to_vector_drawable(&self, opt: &WriteOptions) -> String {
        convert(self, opt)
    }
}

/// XML writing options.
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Set the coordinates numeric precision.
    ///
    /// Applies to path data, sizes, stroke widths and gradient geometry.
    ///
    /// Default: 2
    pub coordinates_precision: u8,

    /// Set the transform values numeric precision.
    ///
    /// Applies to `group` scale, rotation and translation.
    ///
    /// Default: 3
    pub transforms_precision: u8,

    /// Keep the leading zero of fractional numbers.
    ///
    /// When disabled, `0.5` is written as `.5` and `-0.5` as `-.5`.
    ///
    /// Default: false
    pub leading_zero: bool,

    /// Use single quote marks instead of double quote.
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// Default: 4 spaces
    pub indent: Indent,

    /// Set XML attributes indention.
    ///
    /// Each attribute is written on its own line unless set to `Indent::None`.
    ///
    /// Default: 4 spaces
    pub attributes_indent: Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            coordinates_precision: 2,
            transforms_precision: 3,
            leading_zero: false,
            use_single_quote: false,
            indent: Indent::Spaces(4),
            attributes_indent: Indent::Spaces(4),
        }
    }
}

impl WriteOptions {
    // Alpha values look odd with less than two digits.
    fn alpha_precision(&self) -> u8 {
        self.coordinates_precision.max(2)
    }
}

/// The state inherited by children during writing.
#[derive(Clone, Copy)]
struct Context {
    /// A transform that cannot be expressed with a `group` and must be
    /// applied to the coordinates directly.
    ts: Transform,
    /// Accumulated group opacity.
    opacity: f32,
}

pub(crate) fn convert(tree: &Tree, opt: &WriteOptions) -> String {
    let mut xml = XmlWriter::new(xmlwriter::Options {
        use_single_quote: opt.use_single_quote,
        indent: opt.indent,
        attributes_indent: opt.attributes_indent,
    });

    let size = tree.size();
    let view_box = tree.view_box().rect;

    xml.start_element("vector");
    xml.write_attribute("xmlns:android", ANDROID_NS);
    if has_gradients(tree.root()) {
        xml.write_attribute("xmlns:aapt", AAPT_NS);
    }
    xml.write_attribute_raw("android:width", |buf| {
        write_num(size.width(), buf, opt.coordinates_precision, opt.leading_zero);
        buf.extend_from_slice(b"dp");
    });
    xml.write_attribute_raw("android:height", |buf| {
        write_num(size.height(), buf, opt.coordinates_precision, opt.leading_zero);
        buf.extend_from_slice(b"dp");
    });
    xml.write_num_attribute("android:viewportWidth", view_box.width(), opt);
    xml.write_num_attribute("android:viewportHeight", view_box.height(), opt);

    if tree.view_box().aspect != AspectRatio::default() {
        log::debug!("'preserveAspectRatio' is not supported. The viewport will be stretched.");
    }

    // A viewBox with a non-zero origin becomes a translating root group.
    let ctx = Context {
        ts: Transform::from_translate(-view_box.x(), -view_box.y()),
        opacity: 1.0,
    };
    write_group(tree.root(), ctx, opt, &mut xml);

    xml.end_document()
}

fn write_elements(parent: &Group, ctx: Context, opt: &WriteOptions, xml: &mut XmlWriter) {
    for node in parent.children() {
        match node {
            Node::Group(ref group) => write_group(group, ctx, opt, xml),
            Node::Path(ref path) => write_path(path, ctx, opt, xml),
            Node::Image(ref image) => {
                log::warn!("Raster images are not supported. Image '{}' skipped.", image.id());
            }
            Node::Text(ref text) => write_group(text.flattened(), ctx, opt, xml),
        }
    }
}

fn write_group(group: &Group, ctx: Context, opt: &WriteOptions, xml: &mut XmlWriter) {
    if !group.filters().is_empty() {
        log::warn!("Filters are not supported. Group '{}' is written without them.", group.id());
    }

    if group.mask().is_some() {
        log::warn!("Masks are not supported. Group '{}' is written without a mask.", group.id());
    }

    if group.blend_mode() != BlendMode::Normal {
        log::warn!("Blend modes are not supported. Group '{}' uses 'normal'.", group.id());
    }

    let ts = ctx.ts.pre_concat(group.transform());
    let (group_ts, children_ts) = if ts.is_identity() {
        (None, Transform::identity())
    } else if let Some(parts) = GroupTransform::from_transform(ts) {
        (Some(parts), Transform::identity())
    } else {
        log::debug!("Group '{}' has a skew. Baking it into the coordinates.", group.id());
        (None, ts)
    };

    let clip_path = group.clip_path();
    let has_element = group_ts.is_some() || clip_path.is_some() || !group.id().is_empty();

    if has_element {
        xml.start_element("group");
        if !group.id().is_empty() {
            xml.write_attribute("android:name", group.id());
        }

        if let Some(ref parts) = group_ts {
            xml.write_group_transform(parts, opt);
        }

        if let Some(clip_path) = clip_path {
            write_clip_path(clip_path, children_ts, opt, xml);
        }
    }

    let children_ctx = Context {
        ts: children_ts,
        opacity: ctx.opacity * group.opacity().get(),
    };
    write_elements(group, children_ctx, opt, xml);

    if has_element {
        xml.end_element();
    }
}

fn write_clip_path(clip_path: &ClipPath, ts: Transform, opt: &WriteOptions, xml: &mut XmlWriter) {
    if clip_path.clip_path().is_some() {
        log::warn!(
            "Nested clip paths are not supported. Only '{}' is applied.",
            clip_path.id()
        );
    }

    let mut data = Vec::new();
    collect_clip_path_data(
        clip_path.root(),
        ts.pre_concat(clip_path.transform()),
        opt,
        &mut data,
    );

    // An empty clip path hides everything.
    if data.is_empty() {
        data.extend_from_slice(b"M0 0");
    }

    xml.start_element("clip-path");
    if !clip_path.id().is_empty() {
        xml.write_attribute("android:name", clip_path.id());
    }
    xml.write_attribute_raw("android:pathData", |buf| buf.extend_from_slice(&data));
    xml.end_element();
}

fn collect_clip_path_data(parent: &Group, ts: Transform, opt: &WriteOptions, buf: &mut Vec<u8>) {
    for node in parent.children() {
        match node {
            Node::Group(ref group) => {
                collect_clip_path_data(group, ts.pre_concat(group.transform()), opt, buf);
            }
            Node::Path(ref path) => {
                if path.visibility() == Visibility::Visible {
                    write_path_data(path.data(), ts, opt, buf);
                }
            }
            Node::Text(ref text) => {
                let group = text.flattened();
                collect_clip_path_data(group, ts.pre_concat(group.transform()), opt, buf);
            }
            Node::Image(_) => {}
        }
    }
}

fn write_path(path: &Path, ctx: Context, opt: &WriteOptions, xml: &mut XmlWriter) {
    if path.visibility() != Visibility::Visible {
        return;
    }

    let fill = path.fill().filter(|fill| is_supported_paint(fill.paint()));
    let stroke = path.stroke().filter(|stroke| is_supported_paint(stroke.paint()));

    match (fill, stroke) {
        (None, None) => {
            log::debug!("Path '{}' has nothing to paint. Skipped.", path.id());
        }
        (Some(fill), Some(stroke)) if path.paint_order() == PaintOrder::StrokeAndFill => {
            // A vector drawable path always paints the fill first.
            write_path_element(path, None, Some(stroke), ctx, opt, xml);
            write_path_element(path, Some(fill), None, ctx, opt, xml);
        }
        (fill, stroke) => {
            write_path_element(path, fill, stroke, ctx, opt, xml);
        }
    }
}

fn write_path_element(
    path: &Path,
    fill: Option<&Fill>,
    stroke: Option<&Stroke>,
    ctx: Context,
    opt: &WriteOptions,
    xml: &mut XmlWriter,
) {
    xml.start_element("path");
    if !path.id().is_empty() {
        xml.write_attribute("android:name", path.id());
    }

    if let Some(fill) = fill {
        if let Paint::Color(c) = fill.paint() {
            xml.write_color("android:fillColor", *c);
        }

        let alpha = fill.opacity().get() * ctx.opacity;
        if alpha < 1.0 {
            xml.write_alpha("android:fillAlpha", alpha, opt);
        }

        if fill.rule() == FillRule::EvenOdd {
            xml.write_attribute("android:fillType", "evenOdd");
        }
    }

    if let Some(stroke) = stroke {
        write_stroke(stroke, ctx, opt, xml);
    }

    xml.write_attribute_raw("android:pathData", |buf| {
        write_path_data(path.data(), ctx.ts, opt, buf);
    });

    // Gradients are child elements and must go after all attributes.
    if let Some(fill) = fill {
        write_gradient("android:fillColor", fill.paint(), ctx.ts, opt, xml);
    }

    if let Some(stroke) = stroke {
        write_gradient("android:strokeColor", stroke.paint(), ctx.ts, opt, xml);
    }

    xml.end_element();
}

fn write_stroke(stroke: &Stroke, ctx: Context, opt: &WriteOptions, xml: &mut XmlWriter) {
    if let Paint::Color(c) = stroke.paint() {
        xml.write_color("android:strokeColor", *c);
    }

    let width = stroke.width().get() * transform_scale(ctx.ts);
    xml.write_num_attribute("android:strokeWidth", width, opt);

    let alpha = stroke.opacity().get() * ctx.opacity;
    if alpha < 1.0 {
        xml.write_alpha("android:strokeAlpha", alpha, opt);
    }

    match stroke.linecap() {
        LineCap::Butt => {}
        LineCap::Round => xml.write_attribute("android:strokeLineCap", "round"),
        LineCap::Square => xml.write_attribute("android:strokeLineCap", "square"),
    }

    match stroke.linejoin() {
        LineJoin::Miter | LineJoin::MiterClip => {}
        LineJoin::Round => xml.write_attribute("android:strokeLineJoin", "round"),
        LineJoin::Bevel => xml.write_attribute("android:strokeLineJoin", "bevel"),
    }

    let miterlimit = stroke.miterlimit().get();
    if miterlimit != 4.0 {
        xml.write_num_attribute("android:strokeMiterLimit", miterlimit, opt);
    }

    if stroke.dasharray().is_some() {
        log::warn!("Dashed strokes are not supported. A solid stroke is used.");
    }
}

fn write_gradient(name: &str, paint: &Paint, ts: Transform, opt: &WriteOptions, xml: &mut XmlWriter) {
    let base: &BaseGradient = match paint {
        Paint::LinearGradient(ref lg) => lg,
        Paint::RadialGradient(ref rg) => rg,
        Paint::Color(_) | Paint::Pattern(_) => return,
    };

    let ts = ts.pre_concat(base.transform());

    xml.start_element("aapt:attr");
    xml.write_attribute("name", name);
    xml.start_element("gradient");

    match paint {
        Paint::LinearGradient(ref lg) => {
            let (x1, y1) = map_point(ts, lg.x1(), lg.y1());
            let (x2, y2) = map_point(ts, lg.x2(), lg.y2());
            xml.write_attribute("android:type", "linear");
            xml.write_num_attribute("android:startX", x1, opt);
            xml.write_num_attribute("android:startY", y1, opt);
            xml.write_num_attribute("android:endX", x2, opt);
            xml.write_num_attribute("android:endY", y2, opt);
        }
        Paint::RadialGradient(ref rg) => {
            if rg.fx() != rg.cx() || rg.fy() != rg.cy() {
                log::warn!(
                    "Radial gradient '{}' has a focal point. It will be ignored.",
                    rg.id()
                );
            }

            let (cx, cy) = map_point(ts, rg.cx(), rg.cy());
            xml.write_attribute("android:type", "radial");
            xml.write_num_attribute("android:centerX", cx, opt);
            xml.write_num_attribute("android:centerY", cy, opt);
            xml.write_num_attribute(
                "android:gradientRadius",
                rg.r().get() * transform_scale(ts),
                opt,
            );
        }
        Paint::Color(_) | Paint::Pattern(_) => {}
    }

    match base.spread_method() {
        SpreadMethod::Pad => {}
        SpreadMethod::Reflect => xml.write_attribute("android:tileMode", "mirror"),
        SpreadMethod::Repeat => xml.write_attribute("android:tileMode", "repeat"),
    }

    for stop in base.stops() {
        xml.start_element("item");
        xml.write_num_attribute("android:offset", stop.offset().get(), opt);
        xml.write_argb_color("android:color", stop.color(), stop.opacity().get());
        xml.end_element();
    }

    xml.end_element();
    xml.end_element();
}

fn is_supported_paint(paint: &Paint) -> bool {
    match paint {
        Paint::Color(_) | Paint::LinearGradient(_) | Paint::RadialGradient(_) => true,
        Paint::Pattern(ref patt) => {
            log::warn!("Patterns are not supported. Pattern '{}' skipped.", patt.id());
            false
        }
    }
}

fn has_gradients(parent: &Group) -> bool {
    let is_gradient = |paint: &Paint| {
        matches!(paint, Paint::LinearGradient(_) | Paint::RadialGradient(_))
    };

    parent.children().iter().any(|node| match node {
        Node::Group(ref group) => has_gradients(group),
        Node::Path(ref path) => {
            path.visibility() == Visibility::Visible
                && (path.fill().map_or(false, |f| is_gradient(f.paint()))
                    || path.stroke().map_or(false, |s| is_gradient(s.paint())))
        }
        Node::Text(ref text) => has_gradients(text.flattened()),
        Node::Image(_) => false,
    })
}

/// `group` transform attributes.
///
/// A vector drawable group applies scale, then rotation, then translation.
/// Skew has no representation.
#[derive(Clone, Copy, PartialEq, Debug)]
struct GroupTransform {
    translate_x: f64,
    translate_y: f64,
    scale_x: f64,
    scale_y: f64,
    /// In degrees.
    rotation: f64,
}

impl GroupTransform {
    fn from_transform(ts: Transform) -> Option<Self> {
        let (a, b, c, d) = (ts.sx as f64, ts.ky as f64, ts.kx as f64, ts.sy as f64);

        let scale_x = (a * a + b * b).sqrt();
        let col2 = (c * c + d * d).sqrt();
        if scale_x < f64::EPSILON || col2 < f64::EPSILON {
            return None;
        }

        // Columns must be orthogonal, otherwise the matrix has a skew.
        if ((a * c + b * d) / (scale_x * col2)).abs() > 1e-4 {
            return None;
        }

        let det = a * d - b * c;
        Some(GroupTransform {
            translate_x: ts.tx as f64,
            translate_y: ts.ty as f64,
            scale_x,
            scale_y: det / scale_x,
            rotation: b.atan2(a).to_degrees(),
        })
    }
}

fn transform_scale(ts: Transform) -> f32 {
    let det = ts.sx * ts.sy - ts.ky * ts.kx;
    det.abs().sqrt()
}

#[inline]
fn map_point(ts: Transform, x: f32, y: f32) -> (f32, f32) {
    (
        ts.sx * x + ts.kx * y + ts.tx,
        ts.ky * x + ts.sy * y + ts.ty,
    )
}

trait XmlWriterExt {
    fn write_num_attribute(&mut self, name: &str, num: f32, opt: &WriteOptions);
    fn write_alpha(&mut self, name: &str, alpha: f32, opt: &WriteOptions);
    fn write_color(&mut self, name: &str, color: Color);
    fn write_argb_color(&mut self, name: &str, color: Color, alpha: f32);
    fn write_group_transform(&mut self, ts: &GroupTransform, opt: &WriteOptions);
}

impl XmlWriterExt for XmlWriter {
    #[inline(never)]
    fn write_num_attribute(&mut self, name: &str, num: f32, opt: &WriteOptions) {
        self.write_attribute_raw(name, |buf| {
            write_num(num, buf, opt.coordinates_precision, opt.leading_zero)
        });
    }

    fn write_alpha(&mut self, name: &str, alpha: f32, opt: &WriteOptions) {
        self.write_attribute_raw(name, |buf| {
            write_num(alpha, buf, opt.alpha_precision(), opt.leading_zero)
        });
    }

    #[inline(never)]
    fn write_color(&mut self, name: &str, c: Color) {
        self.write_attribute_raw(name, |buf| {
            buf.push(b'#');
            write_hex(c.red, buf);
            write_hex(c.green, buf);
            write_hex(c.blue, buf);
        });
    }

    fn write_argb_color(&mut self, name: &str, c: Color, alpha: f32) {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.write_attribute_raw(name, |buf| {
            buf.push(b'#');
            write_hex(alpha, buf);
            write_hex(c.red, buf);
            write_hex(c.green, buf);
            write_hex(c.blue, buf);
        });
    }

    fn write_group_transform(&mut self, ts: &GroupTransform, opt: &WriteOptions) {
        let p = opt.transforms_precision;
        let mut write = |name: &str, value: f64, default: f64| {
            if round(value, p) != default {
                self.write_attribute_raw(name, |buf| write_num_f64(value, buf, p, opt.leading_zero));
            }
        };

        write("android:scaleX", ts.scale_x, 1.0);
        write("android:scaleY", ts.scale_y, 1.0);
        write("android:rotation", ts.rotation, 0.0);
        write("android:translateX", ts.translate_x, 0.0);
        write("android:translateY", ts.translate_y, 0.0);
    }
}

fn write_hex(n: u8, buf: &mut Vec<u8>) {
    static CHARS: &[u8] = b"0123456789ABCDEF";
    buf.push(CHARS[(n >> 4) as usize]);
    buf.push(CHARS[(n & 0xf) as usize]);
}

fn write_path_data(
    path: &tiny_skia_path::Path,
    ts: Transform,
    opt: &WriteOptions,
    buf: &mut Vec<u8>,
) {
    let write_coords = |cmd: u8, points: &[tiny_skia_path::Point], buf: &mut Vec<u8>| {
        buf.push(cmd);
        for (i, p) in points.iter().enumerate() {
            let (x, y) = map_point(ts, p.x, p.y);
            if i != 0 {
                write_separator(x, buf, opt);
            }
            write_num(x, buf, opt.coordinates_precision, opt.leading_zero);
            write_separator(y, buf, opt);
            write_num(y, buf, opt.coordinates_precision, opt.leading_zero);
        }
    };

    for seg in path.segments() {
        match seg {
            PathSegment::MoveTo(p) => write_coords(b'M', &[p], buf),
            PathSegment::LineTo(p) => write_coords(b'L', &[p], buf),
            PathSegment::QuadTo(p1, p) => write_coords(b'Q', &[p1, p], buf),
            PathSegment::CubicTo(p1, p2, p) => write_coords(b'C', &[p1, p2, p], buf),
            PathSegment::Close => buf.push(b'Z'),
        }
    }
}

/// A minus sign is a separator by itself.
fn write_separator(next: f32, buf: &mut Vec<u8>, opt: &WriteOptions) {
    if round(next as f64, opt.coordinates_precision) >= 0.0 {
        buf.push(b' ');
    }
}

static POW_VEC: &[f64] = &[
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
];

fn round(num: f64, precision: u8) -> f64 {
    let pow = POW_VEC[(precision as usize).min(POW_VEC.len() - 1)];
    let v = (num * pow).round() / pow;
    // Get rid of `-0`.
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn write_num(num: f32, buf: &mut Vec<u8>, precision: u8, leading_zero: bool) {
    write_num_f64(num as f64, buf, precision, leading_zero)
}

fn write_num_f64(num: f64, buf: &mut Vec<u8>, precision: u8, leading_zero: bool) {
    let v = round(num, precision);

    // If number is an integer, it's faster to write it as i64.
    if v.fract() == 0.0 {
        write!(buf, "{}", v as i64).unwrap();
        return;
    }

    let start = buf.len();
    write!(buf, "{}", v).unwrap();

    if !leading_zero {
        let digits = if v < 0.0 { start + 1 } else { start };
        if buf.get(digits) == Some(&b'0') {
            buf.remove(digits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f32, precision: u8, leading_zero: bool) -> String {
        let mut buf = Vec::new();
        write_num(n, &mut buf, precision, leading_zero);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn number_formatting() {
        assert_eq!(num(3.0, 2, false), "3");
        assert_eq!(num(-12.0, 2, false), "-12");
        assert_eq!(num(1.234, 2, false), "1.23");
        assert_eq!(num(1.235, 3, false), "1.235");
        assert_eq!(num(0.5, 2, false), ".5");
        assert_eq!(num(-0.5, 2, false), "-.5");
        assert_eq!(num(0.5, 2, true), "0.5");
        assert_eq!(num(-0.5, 2, true), "-0.5");
        assert_eq!(num(10.5, 2, false), "10.5");
        assert_eq!(num(0.999, 2, false), "1");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(num(-0.001, 2, false), "0");
        assert_eq!(num(-0.0, 2, false), "0");
    }

    #[test]
    fn path_data_separators() {
        let mut builder = tiny_skia_path::PathBuilder::new();
        builder.move_to(0.5, -1.0);
        builder.line_to(-2.25, 3.0);
        builder.cubic_to(1.0, 2.0, 3.0, -4.0, 5.0, 6.0);
        builder.close();
        let path = builder.finish().unwrap();

        let mut buf = Vec::new();
        write_path_data(&path, Transform::identity(), &WriteOptions::default(), &mut buf);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "M.5-1L-2.25 3C1 2 3-4 5 6Z"
        );
    }

    #[test]
    fn path_data_with_transform() {
        let mut builder = tiny_skia_path::PathBuilder::new();
        builder.move_to(1.0, 1.0);
        builder.line_to(2.0, 1.0);
        let path = builder.finish().unwrap();

        let mut buf = Vec::new();
        let ts = Transform::from_row(2.0, 0.0, 0.0, 2.0, 10.0, 0.0);
        write_path_data(&path, ts, &WriteOptions::default(), &mut buf);
        assert_eq!(String::from_utf8(buf).unwrap(), "M12 2L14 2");
    }

    #[test]
    fn decompose_translate() {
        let parts = GroupTransform::from_transform(Transform::from_translate(10.0, -5.0)).unwrap();
        assert_eq!(parts.translate_x, 10.0);
        assert_eq!(parts.translate_y, -5.0);
        assert_eq!(parts.scale_x, 1.0);
        assert_eq!(parts.scale_y, 1.0);
        assert_eq!(parts.rotation, 0.0);
    }

    #[test]
    fn decompose_flip() {
        let parts = GroupTransform::from_transform(Transform::from_scale(2.0, -3.0)).unwrap();
        assert_eq!(round(parts.scale_x, 3), 2.0);
        assert_eq!(round(parts.scale_y, 3), -3.0);
        assert_eq!(round(parts.rotation, 3), 0.0);
    }

    #[test]
    fn decompose_rotate_and_scale() {
        let ts = Transform::from_rotate(30.0).pre_scale(2.0, 0.5);
        let parts = GroupTransform::from_transform(ts).unwrap();
        assert_eq!(round(parts.scale_x, 3), 2.0);
        assert_eq!(round(parts.scale_y, 3), 0.5);
        assert_eq!(round(parts.rotation, 3), 30.0);
    }

    #[test]
    fn skew_is_not_decomposable() {
        let ts = Transform::from_row(1.0, 0.0, 0.5, 1.0, 0.0, 0.0);
        assert!(GroupTransform::from_transform(ts).is_none());
    }

    #[test]
    fn zero_scale_is_not_decomposable() {
        let ts = Transform::from_scale(0.0, 1.0);
        assert!(GroupTransform::from_transform(ts).is_none());
    }

    #[test]
    fn stroke_scale_of_baked_transform() {
        let ts = Transform::from_row(2.0, 0.0, 1.0, 2.0, 0.0, 0.0);
        assert_eq!(transform_scale(ts), 2.0);
    }
}
