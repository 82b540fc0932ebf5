pub mod computed;
pub mod dimension;
pub mod flex;
pub mod parsers;
pub mod props;

pub use computed::{
    parse_style, ConstrainedSize, FlexBasis, FlexModel, Gap, PaintHint, StyleRecord,
};
pub use dimension::{Dimension, RawSize};
pub use flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
pub use parsers::StyleParseError;
pub use props::StyleProps;
