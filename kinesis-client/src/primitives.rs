#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StreamName(pub(super) String);
impl std::fmt::Display for StreamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl<S: Into<String>> From<S> for StreamName {
    fn from(s: S) -> Self {
        Self(s.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PartitionKey(pub(super) String);
impl std::fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl<S: Into<String>> From<S> for PartitionKey {
    fn from(s: S) -> Self {
        Self(s.into())
    }
}

/// Where a submitted record landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordReceipt {
    pub sequence_number: String,
    pub shard_id: String,
}
