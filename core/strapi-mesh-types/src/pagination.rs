use serde::{Deserialize, Deserializer, Serialize};

/// Entries requested per page.
pub const PAGE_SIZE: u32 = 100;

/// `meta.pagination` block of a collection listing response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// Missing and `null` counters both read as zero.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Page bookkeeping for a single fetch-all operation.
///
/// Starts at page 1 and is discarded once the operation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            page_count: 1,
            total: 0,
        }
    }

    /// Query string selecting the cursor's current page.
    pub fn query(&self) -> String {
        format!(
            "populate=*&pagination[page]={}&pagination[pageSize]={}",
            self.page, self.page_size
        )
    }

    /// Records the metadata of the page just received and moves to the next
    /// page. Returns `false` when the fetch is complete.
    ///
    /// A response without pagination metadata is a single-page result.
    pub fn advance(&mut self, meta: Option<Pagination>) -> bool {
        let Some(meta) = meta else {
            self.page_count = self.page;
            return false;
        };

        self.page_count = meta.page_count;
        self.total = meta.total;

        if self.page < meta.page_count {
            self.page += 1;
            true
        } else {
            false
        }
    }
}
