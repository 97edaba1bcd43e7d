//! Random quote selection

use rand::Rng;

use crate::types::{FilterSelection, Quote};

/// Pick a random quote matching `filter`
///
/// Returns the index into `quotes` together with the quote, or `None` when
/// nothing matches. When more than one quote matches, the quote at
/// `last_shown` is never returned twice in a row.
pub fn pick_quote<R: Rng + ?Sized>(
    quotes: &[Quote],
    filter: &FilterSelection,
    last_shown: Option<usize>,
    rng: &mut R,
) -> Option<(usize, Quote)> {
    let candidates: Vec<usize> = quotes
        .iter()
        .enumerate()
        .filter(|(_, q)| filter.matches(q))
        .map(|(index, _)| index)
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let mut pick = rng.gen_range(0..candidates.len());
    if candidates.len() > 1 && Some(candidates[pick]) == last_shown {
        pick = (pick + 1) % candidates.len();
    }

    let index = candidates[pick];
    Some((index, quotes[index].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("a", "Motivation"),
            Quote::new("b", "Action"),
            Quote::new("c", "Motivation"),
            Quote::new("d", "Action"),
        ]
    }

    #[test]
    fn test_pick_respects_filter() {
        let quotes = sample();
        let filter = FilterSelection::parse("Action");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let (index, quote) = pick_quote(&quotes, &filter, None, &mut rng).unwrap();
            assert_eq!(quote.category, "Action");
            assert_eq!(quotes[index], quote);
        }
    }

    #[test]
    fn test_unknown_category_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let filter = FilterSelection::parse("Humor");
        assert!(pick_quote(&sample(), &filter, None, &mut rng).is_none());
        assert!(pick_quote(&[], &FilterSelection::All, None, &mut rng).is_none());
    }

    #[test]
    fn test_never_repeats_last_shown() {
        let quotes = sample();
        let mut rng = StdRng::seed_from_u64(42);
        let mut last = None;

        for _ in 0..100 {
            let (index, _) = pick_quote(&quotes, &FilterSelection::All, last, &mut rng).unwrap();
            assert_ne!(Some(index), last);
            last = Some(index);
        }
    }

    #[test]
    fn test_single_candidate_can_repeat() {
        let quotes = vec![Quote::new("only", "One")];
        let mut rng = StdRng::seed_from_u64(3);
        let picked = pick_quote(&quotes, &FilterSelection::All, Some(0), &mut rng);
        assert_eq!(picked.map(|(i, _)| i), Some(0));
    }
}
