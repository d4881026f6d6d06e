//! Errors reported to the people using the library.
//!
//! The audience is beginners, so messages say what probably went wrong
//! rather than just naming the failure.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The library was called in a way it does not support.
    #[error("{0}")]
    Usage(String),

    /// A shape was rendered onto a window whose surface no longer exists.
    #[error(
        "Could not place the shape\non the given window.\n\
         Did you accidentally close a window\n\
         that later needed to be rendered again?"
    )]
    StaleSurface,

    #[error(
        "The color {0:?} is not one I know.\n\
         Try a name like \"red\" or \"midnight blue\",\n\
         or make a custom one with Color::rgb(red, green, blue)."
    )]
    UnknownColor(String),

    #[error("The drawing toolkit failed: {0}")]
    Toolkit(ToolkitError),
}

impl Error {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Failures reported by a `Toolkit` implementation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("the drawing surface no longer exists")]
    SurfaceGone,
    #[error("no drawn item with that id")]
    UnknownItem,
    #[error("no turtle with that id")]
    UnknownTurtle,
    #[error("unknown color {0:?}")]
    UnknownColor(String),
    #[error("the event loop root has not been initialized")]
    RootNotInitialized,
}

impl From<ToolkitError> for Error {
    fn from(err: ToolkitError) -> Self {
        match err {
            ToolkitError::SurfaceGone => Error::StaleSurface,
            ToolkitError::UnknownColor(name) => Error::UnknownColor(name),
            other => Error::Toolkit(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_gone_becomes_stale_surface() {
        let err: Error = ToolkitError::SurfaceGone.into();
        assert_eq!(err, Error::StaleSurface);
        assert!(err.to_string().contains("accidentally close a window"));
    }

    #[test]
    fn test_unknown_color_message() {
        let err: Error = ToolkitError::UnknownColor("blurple".into()).into();
        assert!(err.to_string().contains("\"blurple\""));
    }

    #[test]
    fn test_other_toolkit_errors_are_wrapped() {
        let err: Error = ToolkitError::UnknownItem.into();
        assert_eq!(err, Error::Toolkit(ToolkitError::UnknownItem));
    }
}
