mod glyphs;
mod renderer;

pub use glyphs::{SegmentShape, head_glyph, segment_shape, tail_glyph};
pub use renderer::Renderer;
