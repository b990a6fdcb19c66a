use std::path::PathBuf;

/// Top-level clock configuration
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub width: u32,
    pub height: u32,
    pub font_path: PathBuf,
    pub output_mode: OutputMode,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub enum OutputMode {
    /// Save each paint pass as PNG
    #[default]
    Png,
    /// Output raw RGBA pixels to stdout (for piping)
    Raw,
}

impl std::str::FromStr for OutputMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputMode::Png),
            "raw" | "stdout" => Ok(OutputMode::Raw),
            _ => Err(format!("Unknown output mode: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_parsing() {
        assert!(matches!("png".parse(), Ok(OutputMode::Png)));
        assert!(matches!("PNG".parse(), Ok(OutputMode::Png)));
        assert!(matches!("raw".parse(), Ok(OutputMode::Raw)));
        assert!(matches!("stdout".parse(), Ok(OutputMode::Raw)));
        assert!("window".parse::<OutputMode>().is_err());
    }
}
