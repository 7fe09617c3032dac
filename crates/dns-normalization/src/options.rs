/// Options that change normalization behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// When the response flag column is missing, derive it from the
    /// presence of a response code instead of defaulting every record to a
    /// query.
    pub infer_response_from_rcode: bool,
}

impl NormalizationOptions {
    #[must_use]
    pub fn with_infer_response_from_rcode(mut self, enabled: bool) -> Self {
        self.infer_response_from_rcode = enabled;
        self
    }
}
