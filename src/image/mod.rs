pub mod buffer;
pub mod io;
pub mod traits;
pub mod view;

pub use self::buffer::{Layout, PixelBuffer};
pub use self::traits::PixelSource;
pub use self::view::PixelView;
