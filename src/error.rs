use thiserror::Error;

/// Checked access to an [`Optional`](crate::Optional) that holds no value
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("bad optional access")]
pub struct BadOptionalAccess;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(BadOptionalAccess.to_string(), "bad optional access");
    }

    #[test]
    fn test_into_anyhow() {
        fn fail() -> anyhow::Result<()> {
            Err(BadOptionalAccess)?;
            Ok(())
        }
        let e = fail().unwrap_err();
        assert!(e.downcast_ref::<BadOptionalAccess>().is_some());
    }
}
