use std::fmt::Display;

use serde::Serialize;

/// Block an `eth_call` is evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockTag {
    #[default]
    Latest,
}

impl Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
        }
    }
}

impl Serialize for BlockTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_tag() {
        assert_eq!(BlockTag::default(), BlockTag::Latest);
        assert_eq!(BlockTag::Latest.to_string(), "latest");
        assert_eq!(serde_json::to_string(&BlockTag::Latest).unwrap(), "\"latest\"");
    }
}
