//! Query model of the generic "entity fields with filters" endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pagination::PageRequest;

/// Separator between several `field:operator:value` expressions.
pub const FILTER_SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    Contains,
    Equals,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Equals => "equals",
        }
    }
}

/// One `field:operator:value` expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpr {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterExpr {
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Contains,
            value: value.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Equals,
            value: value.into(),
        }
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the separator would split the expression on the server side
        let value: String = self.value.chars().filter(|c| *c != FILTER_SEPARATOR).collect();
        write!(f, "{}:{}:{}", self.field, self.operator.as_str(), value)
    }
}

/// Query string parameters, serialized with camelCase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFieldsQuery {
    pub entity_name: String,
    pub page_size: usize,
    pub page: usize,
    pub fields: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

impl EntityFieldsQuery {
    pub fn new(entity_name: &str, fields: &[&str], page: usize, page_size: usize) -> Self {
        Self {
            entity_name: entity_name.to_string(),
            page_size: page_size.max(1),
            page: page.max(1),
            fields: fields.join(","),
            filters: None,
        }
    }

    pub fn with_filters(mut self, filters: &[FilterExpr]) -> Self {
        self.filters = if filters.is_empty() {
            None
        } else {
            Some(
                filters
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join(&FILTER_SEPARATOR.to_string()),
            )
        };
        self
    }

    /// Builds the query for a page request: text search on `search_field`
    /// and, when `status_field` is given, an equality filter on it.
    pub fn for_page(
        entity_name: &str,
        fields: &[&str],
        search_field: &str,
        status_field: Option<&str>,
        request: &PageRequest,
    ) -> Self {
        let mut filters = Vec::new();
        if let Some(term) = request.trimmed_search() {
            filters.push(FilterExpr::contains(search_field, term));
        }
        if let (Some(field), Some(status)) = (status_field, request.status_filter) {
            filters.push(FilterExpr::equals(field, status.as_bool().to_string()));
        }
        Self::new(entity_name, fields, request.page_number, request.page_size).with_filters(&filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::StatusFilter;

    #[test]
    fn test_filter_display() {
        assert_eq!(FilterExpr::contains("name", "port").to_string(), "name:contains:port");
        assert_eq!(FilterExpr::equals("is_active", "true").to_string(), "is_active:equals:true");
        assert_eq!(FilterExpr::contains("name", "a;b").to_string(), "name:contains:ab");
    }

    #[test]
    fn test_query_for_page_without_filters() {
        let req = PageRequest::new(2, 25).with_search("   ");
        let q = EntityFieldsQuery::for_page("Country", &["id", "name"], "name", None, &req);
        assert_eq!(q.entity_name, "Country");
        assert_eq!(q.page, 2);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.fields, "id,name");
        assert_eq!(q.filters, None);
    }

    #[test]
    fn test_query_for_page_with_search_and_status() {
        let req = PageRequest::new(1, 10)
            .with_search(" acme ")
            .with_status(Some(StatusFilter::Inactive));
        let q = EntityFieldsQuery::for_page("Supplier", &["id"], "name", Some("is_active"), &req);
        assert_eq!(q.filters.as_deref(), Some("name:contains:acme;is_active:equals:false"));

        // status ignored when the entity has no server-side status column
        let q = EntityFieldsQuery::for_page("Supplier", &["id"], "name", None, &req);
        assert_eq!(q.filters.as_deref(), Some("name:contains:acme"));
    }

    #[test]
    fn test_query_serializes_camel_case() {
        let q = EntityFieldsQuery::new("Bank", &["id"], 1, 10);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["entityName"], "Bank");
        assert_eq!(json["pageSize"], 10);
        assert!(json.get("filters").is_none());
    }
}
