use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("invalid viewport: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid track geometry: container_width={container_width}, slide_width={slide_width}")]
    InvalidGeometry {
        container_width: f64,
        slide_width: f64,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("invalid view command: {0}")]
    InvalidCommand(String),

    #[error("snapshot encoding failed: {0}")]
    SnapshotEncoding(String),
}
