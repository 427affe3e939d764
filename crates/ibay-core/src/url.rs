use itertools::Itertools;

/// Query-string builder for the category endpoint.
#[derive(Debug, Clone)]
pub struct Builder {
    base_url: String,
    params: Vec<(String, String)>,
}

impl Builder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_parameter(mut self, name: impl Into<String>, param: impl Into<String>) -> Self {
        self.params.push((name.into(), param.into()));
        self
    }

    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return self.base_url.clone();
        }

        let query = self
            .params
            .iter()
            .map(|(name, param)| format!("{name}={param}"))
            .join("&");

        format!("{}?{query}", self.base_url)
    }
}
