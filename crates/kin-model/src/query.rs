/// Query parameters for listing records: a field projection plus a filter
/// expression in the platform's query language.
///
/// The filter must not contain `limit` or `offset` clauses of its own; the
/// fetcher appends those per page via [`RecordQuery::paginated`].
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub fields: Vec<String>,
    pub filter: String,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            filter: String::new(),
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Render the filter extended with a pagination clause.
    ///
    /// A non-empty filter (after trimming) gets a single separating space
    /// before the clause; an empty filter yields the bare clause.
    pub fn paginated(&self, limit: usize, offset: usize) -> String {
        let filter = self.filter.trim();
        if filter.is_empty() {
            format!("limit {limit} offset {offset}")
        } else {
            format!("{filter} limit {limit} offset {offset}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_with_filter() {
        let query = RecordQuery::new().with_filter("status = 'completed'");
        assert_eq!(
            query.paginated(500, 0),
            "status = 'completed' limit 500 offset 0"
        );
        assert_eq!(
            query.paginated(500, 1000),
            "status = 'completed' limit 500 offset 1000"
        );
    }

    #[test]
    fn paginated_without_filter_has_no_leading_space() {
        let query = RecordQuery::new();
        assert_eq!(query.paginated(500, 0), "limit 500 offset 0");
    }

    #[test]
    fn paginated_trims_whitespace_only_filter() {
        let query = RecordQuery::new().with_filter("   ");
        assert_eq!(query.paginated(500, 500), "limit 500 offset 500");
    }

    #[test]
    fn with_fields_collects_projection() {
        let query = RecordQuery::new().with_fields(["field1", "field2"]);
        assert_eq!(query.fields, vec!["field1", "field2"]);
    }
}
