//! Fixed-size, 1-based client-side pagination.

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move by `delta` pages. Targets outside `[1, total_pages]` are ignored.
    pub fn change_page(&mut self, delta: isize, count: usize) -> bool {
        let target = self.page as isize + delta;
        if target < 1 || target as usize > self.total_pages(count) {
            return false;
        }
        self.page = target as usize;
        true
    }

    /// Pull the page back into range after the list shrank.
    pub fn clamp(&mut self, count: usize) {
        self.page = self.page.min(self.total_pages(count)).max(1);
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, count: usize) -> bool {
        self.page < self.total_pages(count)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn indicator(&self, count: usize) -> String {
        format!("Page {} of {}", self.page, self.total_pages(count).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let p = Paginator::default();
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
    }

    #[test]
    fn test_change_page_stays_in_range() {
        for count in [0usize, 1, 9, 10, 11, 25, 100] {
            let mut p = Paginator::default();
            let max = p.total_pages(count).max(1);
            for delta in [-1isize, 1, 1, 1, -1, 1, 1, 1, 1, 1, 1, 1, 1, 1, -1] {
                p.change_page(delta, count);
                assert!(p.page() >= 1 && p.page() <= max, "count={count} page={}", p.page());
            }
        }
    }

    #[test]
    fn test_out_of_range_request_is_ignored() {
        let mut p = Paginator::default();
        assert!(!p.change_page(-1, 25));
        assert!(p.change_page(1, 25));
        assert!(p.change_page(1, 25));
        assert!(!p.change_page(1, 25));
        assert_eq!(p.page(), 3);
        assert!(!p.can_next(25));
        assert!(p.can_prev());
    }

    #[test]
    fn test_slice_and_indicator() {
        let items: Vec<u32> = (1..=23).collect();
        let mut p = Paginator::default();
        assert_eq!(p.slice(&items), &items[0..10]);
        p.change_page(2, items.len());
        assert_eq!(p.slice(&items), &[21, 22, 23]);
        assert_eq!(p.indicator(items.len()), "Page 3 of 3");
        assert_eq!(Paginator::default().indicator(0), "Page 1 of 1");
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Paginator::default();
        p.change_page(2, 30);
        p.clamp(12);
        assert_eq!(p.page(), 2);
        p.clamp(0);
        assert_eq!(p.page(), 1);
    }
}
