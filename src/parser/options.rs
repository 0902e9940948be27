//! Span collection options.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for collecting spans from PDF documents.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Which pages to read
    pub pages: PageSelection,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip unreadable pages).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

/// Error handling mode during span collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first page that cannot be read
    #[default]
    Strict,
    /// Log unreadable pages and continue
    Lenient,
}

/// Pages to read (1-indexed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// One page
    Single(u32),
    /// An inclusive range of pages
    Range(RangeInclusive<u32>),
    /// An explicit, sorted list of pages
    Pages(Vec<u32>),
    /// Sorted, disjoint inclusive ranges
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number is selected.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Single(p) => *p == page,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.binary_search(&page).is_ok(),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a selection such as `"all"`, `"4"`, `"1-10"` or `"1,3,5-7"`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        let mut parts: Vec<RangeInclusive<u32>> = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let range = match part.split_once('-') {
                Some((start, end)) => parse_page(start)?..=parse_page(end)?,
                None => {
                    let page = parse_page(part)?;
                    page..=page
                }
            };
            if range.is_empty() {
                return Err(Error::InvalidPageRange(part.to_string()));
            }
            parts.push(range);
        }

        let ranges = merge_ranges(parts);
        if let [range] = ranges.as_slice() {
            let (start, end) = (*range.start(), *range.end());
            return Ok(if start == end {
                PageSelection::Single(start)
            } else {
                PageSelection::Range(start..=end)
            });
        }
        Ok(PageSelection::Ranges(ranges))
    }
}

/// Sort ranges and join the overlapping or adjacent ones.
fn merge_ranges(mut parts: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    parts.sort_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(parts.len());
    for range in parts {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                let end = (*last.end()).max(*range.end());
                *last = *last.start()..=end;
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(Error::InvalidPageRange(s.trim().to_string())),
    }
}
