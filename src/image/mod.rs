pub mod sink;
pub mod source;

pub use self::sink::NormalSink;
pub use self::source::SourceImage;
