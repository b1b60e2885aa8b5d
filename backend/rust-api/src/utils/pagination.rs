/// Fixed page size shared by every paginated endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` slice of `items`, clipped to the sequence
/// bounds. A page past the end is empty, not an error. Page 0 is treated as
/// page 1 (the query parameter has no meaningful zero).
pub fn paginate<T>(page: u32, items: &[T]) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1) * QUESTIONS_PER_PAGE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_at_most_ten_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(1, &items).len(), QUESTIONS_PER_PAGE);
        assert_eq!(paginate(2, &items).len(), QUESTIONS_PER_PAGE);
    }

    #[test]
    fn final_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(3, &items), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(4, &items).is_empty());
        assert!(paginate(100, &items).is_empty());
    }

    #[test]
    fn concatenated_pages_reconstruct_the_sequence() {
        let items: Vec<u32> = (0..37).collect();
        let mut rebuilt = Vec::new();
        let mut page = 1;
        loop {
            let slice = paginate(page, &items);
            if slice.is_empty() {
                break;
            }
            rebuilt.extend_from_slice(slice);
            page += 1;
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn page_zero_is_clamped_to_page_one() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(0, &items), paginate(1, &items));
    }

    #[test]
    fn empty_sequence_yields_empty_page() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(1, &items).is_empty());
    }
}
