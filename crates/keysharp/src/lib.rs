#[doc(inline)]
pub use keysharp_image as image;

#[doc(inline)]
pub use keysharp_imgproc as imgproc;

#[doc(inline)]
pub use keysharp_io as io;
