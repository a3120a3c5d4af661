//! Paged result envelope for list endpoints.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// One page of a larger ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u32,
    /// Zero-based page index
    pub number: u32,
}

impl<T: Clone> Page<T> {
    /// Cut page `number` of `size` items out of the full ordered list.
    ///
    /// A `size` of zero yields an empty page with zero total pages.
    pub fn from_slice(items: &[T], number: u32, size: u32) -> Self {
        let total_elements = items.len() as u64;
        let total_pages = if size == 0 { 0 } else { total_elements.div_ceil(u64::from(size)) };

        let limit = size as usize;
        let offset = (number as usize).saturating_mul(limit);
        let content = items.iter().skip(offset).take(limit).cloned().collect();

        Self { content, total_elements, total_pages, size, number }
    }
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        u64::from(self.number) + 1 >= self.total_pages
    }
}
