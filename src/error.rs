use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("couldn't load site configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("no section with id `{0}` on the page")]
    MissingSection(String),
    #[error("couldn't schedule animation frame: {0}")]
    AnimationFrame(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SiteError::MissingSection("projects".to_string()).to_string(),
            "no section with id `projects` on the page"
        );
        assert_eq!(
            SiteError::Config("missing Cargo.toml".to_string()).to_string(),
            "couldn't load site configuration: missing Cargo.toml"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: SiteError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert!(matches!(err, SiteError::Io(_)));
        assert_eq!(err.to_string(), "address in use");
    }
}
