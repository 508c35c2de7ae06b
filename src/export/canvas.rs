//! Primitive SVG drawing back-end.
//!
//! A thin markup emitter over any [`std::io::Write`]. The layout engine
//! only passes fixed style constants through, so styles are written
//! verbatim; text content is XML-escaped since legends come from input
//! files.
//!
//! A canvas can emit several documents in sequence on the same writer:
//! `start_document` may be called again after `end_document`, which is how
//! page switches work when the output is an unseekable stream.

use std::io::{self, Write};

/// An open SVG drawing context.
#[derive(Debug)]
pub struct SvgCanvas<W: Write> {
    out: W,
}

impl<W: Write> SvgCanvas<W> {
    /// Wraps a writer. No output happens until `start_document`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Opens a document of `width_mm` x `height_mm` physical size with a
    /// `view_width` x `view_height` user-unit viewBox.
    pub fn start_document(
        &mut self,
        width_mm: i32,
        height_mm: i32,
        view_width: i32,
        view_height: i32,
    ) -> io::Result<()> {
        writeln!(self.out, r#"<?xml version="1.0"?>"#)?;
        writeln!(
            self.out,
            r#"<svg width="{width_mm}mm" height="{height_mm}mm" viewBox="0 0 {view_width} {view_height}" xmlns="http://www.w3.org/2000/svg">"#
        )
    }

    /// Sets the document title.
    pub fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "<title>{}</title>", escape_text(title))
    }

    /// Opens a group element with raw attribute markup.
    pub fn begin_group(&mut self, attrs: &str) -> io::Result<()> {
        writeln!(self.out, "<g {attrs}>")
    }

    /// Closes the innermost open group.
    pub fn end_group(&mut self) -> io::Result<()> {
        writeln!(self.out, "</g>")
    }

    /// Draws a rectangle with rounded corners.
    pub fn rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        style: &str,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{radius}" ry="{radius}" style="{style}"/>"#
        )
    }

    /// Draws a text element anchored at (`x`, `y`).
    pub fn text(&mut self, x: i32, y: i32, content: &str, style: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"<text x="{x}" y="{y}" style="{style}">{}</text>"#,
            escape_text(content)
        )
    }

    /// Draws a line segment.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" style="{style}"/>"#
        )
    }

    /// Draws a circle of radius `r` centered at (`cx`, `cy`).
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, style: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" style="{style}"/>"#
        )
    }

    /// Closes the document and flushes the writer.
    pub fn end_document(&mut self) -> io::Result<()> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }
}

/// Escapes XML-significant characters in text content.
fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut SvgCanvas<Vec<u8>>)>(draw: F) -> String {
        let mut canvas = SvgCanvas::new(Vec::new());
        draw(&mut canvas);
        String::from_utf8(canvas.out).unwrap()
    }

    #[test]
    fn test_document_frame() {
        let svg = render(|c| {
            c.start_document(200, 290, 20000, 29000).unwrap();
            c.title("test page").unwrap();
            c.end_document().unwrap();
        });
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="200mm" height="290mm""#));
        assert!(svg.contains(r#"viewBox="0 0 20000 29000""#));
        assert!(svg.contains("<title>test page</title>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_shapes() {
        let svg = render(|c| {
            c.rounded_rect(10, 20, 30, 40, 5, "fill:white").unwrap();
            c.line(0, 0, 100, 0, "stroke:black").unwrap();
            c.circle(50, 60, 7, "fill:red").unwrap();
        });
        assert!(svg.contains(r#"<rect x="10" y="20" width="30" height="40" rx="5" ry="5""#));
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="100" y2="0""#));
        assert!(svg.contains(r#"<circle cx="50" cy="60" r="7""#));
    }

    #[test]
    fn test_group_nesting() {
        let svg = render(|c| {
            c.begin_group(r#"title="0200 040""#).unwrap();
            c.end_group().unwrap();
        });
        assert!(svg.contains(r#"<g title="0200 040">"#));
        assert!(svg.contains("</g>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = render(|c| {
            c.text(0, 0, "a < b & c > d", "fill:black").unwrap();
        });
        assert!(svg.contains(">a &lt; b &amp; c &gt; d</text>"));
    }

    #[test]
    fn test_sequential_documents_on_one_writer() {
        let svg = render(|c| {
            c.start_document(10, 10, 1000, 1000).unwrap();
            c.end_document().unwrap();
            c.start_document(10, 10, 1000, 1000).unwrap();
            c.end_document().unwrap();
        });
        assert_eq!(svg.matches("<?xml").count(), 2);
        assert_eq!(svg.matches("</svg>").count(), 2);
    }
}
