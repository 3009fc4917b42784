use thiserror::Error;

/// The two ways startup can fail fatally.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to create {stage}: {message}")]
    Window {
        stage: &'static str,
        message: String,
    },
    #[error("failed to initialize graphics: {message}")]
    Graphics { message: String },
}

impl StartupError {
    pub fn window(stage: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Window {
            stage,
            message: err.to_string(),
        }
    }

    pub fn graphics(err: &anyhow::Error) -> Self {
        Self::Graphics {
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_stage() {
        let err = StartupError::window("event loop", "no display");
        assert_eq!(err.to_string(), "failed to create event loop: no display");

        let cause = anyhow::anyhow!("no adapter").context("renderer setup");
        let err = StartupError::graphics(&cause);
        assert_eq!(
            err.to_string(),
            "failed to initialize graphics: renderer setup: no adapter"
        );
    }
}
