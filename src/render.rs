//! Consumers of the current row.
//!
//! A [`Renderer`] only ever sees a borrowed row, so it cannot change the
//! engine between steps.

use crate::enc::{Glyphs, RowCodec};
use std::io;

pub trait Renderer {
    fn render(&mut self, generation: u64, row: &[u8]) -> io::Result<()>;
}

/// Writes one encoded line per generation
pub struct TextRenderer<W: io::Write, C: RowCodec = Glyphs> {
    out: W,
    codec: C,
}
impl<W: io::Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_codec(out, Glyphs::default())
    }
}
impl<W: io::Write, C: RowCodec> TextRenderer<W, C> {
    pub fn with_codec(out: W, codec: C) -> Self {
        Self { out, codec }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write, C: RowCodec> Renderer for TextRenderer<W, C> {
    fn render(&mut self, _generation: u64, row: &[u8]) -> io::Result<()> {
        writeln!(self.out, "{}", self.codec.encode(row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
}

/// Receives a finished frame, e.g. a strip driver pushing pixels out a data pin
pub trait PixelSink {
    fn show(&mut self, frame: &[Rgb]) -> io::Result<()>;
}

impl<F: FnMut(&[Rgb]) -> io::Result<()>> PixelSink for F {
    fn show(&mut self, frame: &[Rgb]) -> io::Result<()> {
        self(frame)
    }
}

/// Maps a row onto an addressable LED strip, one pixel per cell
///
/// The strip may be wired as several equal segments, each on its own pin.
pub struct LedStripRenderer<S: PixelSink> {
    frame: Vec<Rgb>,
    segment_len: usize,
    sink: S,
}
impl<S: PixelSink> LedStripRenderer<S> {
    pub fn new(len: usize, sink: S) -> Self {
        Self {
            frame: vec![Rgb::BLACK; len],
            segment_len: len.max(1),
            sink,
        }
    }

    pub fn set_segment_len(mut self, segment_len: usize) -> Self {
        self.segment_len = segment_len.max(1);
        self
    }

    #[inline]
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// The frame split per data pin
    pub fn segments(&self) -> impl Iterator<Item = &[Rgb]> {
        self.frame.chunks(self.segment_len)
    }
}

impl<S: PixelSink> Renderer for LedStripRenderer<S> {
    fn render(&mut self, _generation: u64, row: &[u8]) -> io::Result<()> {
        // a row longer than the strip is cut off, a shorter one leaves the rest dark
        for (i, pixel) in self.frame.iter_mut().enumerate() {
            *pixel = match row.get(i).copied() {
                Some(1) => Rgb::RED,
                _ => Rgb::BLACK,
            };
        }
        self.sink.show(&self.frame)
    }
}
