pub mod canvas;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::canvas::{DotCanvas, Rgba, TRANSPARENT};
pub use self::io::RgbImageU8;
pub use self::rgb::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut};
