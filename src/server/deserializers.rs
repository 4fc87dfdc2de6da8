pub fn first_page() -> usize {
    1
}

// The frontend pager forwards whatever is in the URL; absent, junk and zero
// all mean "first page" rather than a 400. When the key repeats, the first
// occurrence wins.
pub fn page_from_query(query: Option<&str>) -> usize {
    query
        .into_iter()
        .flat_map(|query| query.split('&'))
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|raw| raw.parse().ok())
        .filter(|page| *page > 0)
        .unwrap_or_else(first_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junk_and_missing_pages_fall_back_to_one() {
        assert_eq!(page_from_query(None), 1);
        assert_eq!(page_from_query(Some("page=abc")), 1);
        assert_eq!(page_from_query(Some("page=")), 1);
        assert_eq!(page_from_query(Some("page=0")), 1);
    }

    #[test]
    fn numeric_pages_parse() {
        assert_eq!(page_from_query(Some("page=3")), 3);
        assert_eq!(page_from_query(Some("difficulty=2&page=7")), 7);
    }

    #[test]
    fn the_first_of_repeated_pages_wins() {
        assert_eq!(page_from_query(Some("page=2&page=9")), 2);
        assert_eq!(page_from_query(Some("page=junk&page=9")), 1);
    }
}
