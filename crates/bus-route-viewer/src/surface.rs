//! Plain-text drawing surface

use bus_route_lib::{Color, GeoPoint, Surface};
use std::io::{self, Write};

/// Writes one line of text per draw call
///
/// [`Surface`] calls cannot fail, so the first write error is kept and
/// reported by [`TextSurface::finish`].
pub struct TextSurface<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush the output and return it, or the first error hit while drawing
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn draw_line(&mut self, start: GeoPoint, end: GeoPoint, width: f32, color: Color) {
        self.write_line(format_args!(
            "line ({:.5}, {:.5}) -> ({:.5}, {:.5}) width {:.1} color {}",
            start.lat(),
            start.lon(),
            end.lat(),
            end.lon(),
            width,
            color
        ));
    }

    fn draw_text(&mut self, row: usize, text: &str, size: f32, color: Color) {
        self.write_line(format_args!(
            "legend[{row}] {text} size {size:.1} color {color}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_calls_are_written() {
        let mut surface = TextSurface::new(Vec::new());
        surface.draw_line(
            GeoPoint::new(49.0, -123.0),
            GeoPoint::new(49.5, -123.25),
            7.0,
            Color::from_rgb(255, 0, 0),
        );
        surface.draw_text(0, "099", 16.0, Color::from_rgb(0, 0, 255));

        let out = String::from_utf8(surface.finish().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "line (49.00000, -123.00000) -> (49.50000, -123.25000) width 7.0 color #FF0000",
                "legend[0] 099 size 16.0 color #0000FF",
            ]
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_error_is_reported() {
        let mut surface = TextSurface::new(FailingWriter);
        surface.draw_text(0, "1", 10.0, Color::BLACK);
        surface.draw_text(1, "2", 10.0, Color::BLACK);

        let err = surface.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
