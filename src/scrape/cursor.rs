//! Extraction cursor
//!
//! Tracks progress through the paginated listing: the current page index,
//! the offset into that page's fragments, and the fragments themselves.
//! The cursor is owned exclusively by one extractor and mutated only inside
//! a pull; the page index is monotonic and never repeats a value.

/// Cursor over the paginated fragment stream
#[derive(Debug, Clone)]
pub struct ExtractionCursor {
    /// The page the current fragments came from
    page_index: u32,

    /// Offset of the next fragment to consume
    quote_index: usize,

    /// Fragments of the active page, in document order
    fragments: Vec<String>,
}

impl ExtractionCursor {
    /// Creates a cursor positioned at the start of page 0
    pub fn new(fragments: Vec<String>) -> Self {
        Self {
            page_index: 0,
            quote_index: 0,
            fragments,
        }
    }

    /// The page the current fragments came from
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Offset of the next fragment to consume
    pub fn quote_index(&self) -> usize {
        self.quote_index
    }

    /// Number of fragments on the active page
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Whether every fragment of the active page has been consumed
    pub fn exhausted(&self) -> bool {
        self.quote_index >= self.fragments.len()
    }

    /// The fragment a pull should consume next
    ///
    /// Callers must refill via [`advance_page`](Self::advance_page) and
    /// [`load_page`](Self::load_page) before reading past the end of the
    /// active page.
    pub fn current(&self) -> &str {
        &self.fragments[self.quote_index]
    }

    /// Marks the current fragment as consumed
    pub fn advance(&mut self) {
        self.quote_index += 1;
    }

    /// Moves to the next page index and returns it
    ///
    /// The fragments are stale until [`load_page`](Self::load_page) replaces
    /// them.
    pub fn advance_page(&mut self) -> u32 {
        self.page_index += 1;
        self.page_index
    }

    /// Replaces the active fragments and rewinds the offset to 0
    pub fn load_page(&mut self, fragments: Vec<String>) {
        self.fragments = fragments;
        self.quote_index = 0;
    }
}
