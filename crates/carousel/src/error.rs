use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("carousel track has no slides")]
    EmptyTrack,
    /// The container reported a zero or non-finite width.
    #[error("layout not ready (measured width {width})")]
    LayoutNotReady { width: f64 },
}
