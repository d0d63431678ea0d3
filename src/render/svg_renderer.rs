use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign};

/// Renderer backend that serializes frames into a standalone SVG document.
///
/// Primitives keep their class tokens as `class` attributes so the embedding
/// host styles the chart with CSS; the document itself carries no colors.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The SVG produced by the most recent render pass.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
        );

        for rect in &frame.rects {
            let _ = write!(
                svg,
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" class=\"{}\"/>",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                escape_xml(&rect.class)
            );
        }

        for line in &frame.lines {
            let _ = write!(
                svg,
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke-width=\"{:.2}\" class=\"{}\"/>",
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.stroke_width,
                escape_xml(&line.class)
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = write!(
                svg,
                "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" text-anchor=\"{anchor}\" class=\"{}\">{}</text>",
                text.x,
                text.y,
                text.font_size_px,
                escape_xml(&text.class),
                escape_xml(&text.text)
            );
        }

        svg.push_str("</svg>");
        self.document = Some(svg);
        Ok(())
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
