//! Property tests for the chunking invariants

use chonk_core::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn concatenation_reconstructs_sequence(
        items in prop::collection::vec(any::<u8>(), 0..200),
        size in 1usize..20,
    ) {
        let chunks = chunk(items.clone(), size).unwrap();
        prop_assert_eq!(chunks.concat(), items);
    }

    #[test]
    fn all_chunks_full_except_possibly_last(
        items in prop::collection::vec(any::<i32>(), 0..200),
        size in 1usize..20,
    ) {
        let chunks = chunk(items, size).unwrap();
        if let Some((last, full)) = chunks.split_last() {
            for chunk in full {
                prop_assert_eq!(chunk.len(), size);
            }
            prop_assert!(!last.is_empty());
            prop_assert!(last.len() <= size);
        }
    }

    #[test]
    fn empty_input_yields_empty_chunk_set(size in 1usize..50) {
        prop_assert!(chunk(Vec::<u8>::new(), size).unwrap().is_empty());
        prop_assert!(chunk_text("", size).unwrap().is_empty());
        prop_assert!(chunk_graphemes("", size).unwrap().is_empty());
    }

    #[test]
    fn covering_size_yields_single_chunk(
        items in prop::collection::vec(any::<u8>(), 1..50),
    ) {
        let whole = items.clone();
        let chunks = chunk(items, whole.len() + 7).unwrap();
        prop_assert_eq!(chunks, vec![whole]);
    }

    #[test]
    fn text_concatenation_reconstructs_text(text in ".*", size in 1usize..8) {
        prop_assert_eq!(chunk_text(&text, size).unwrap().concat(), text.clone());
        prop_assert_eq!(chunk_graphemes(&text, size).unwrap().concat(), text);
    }

    #[test]
    fn grapheme_chunks_never_end_mid_cluster(text in ".*", size in 1usize..8) {
        let segmenter = Segmenter::default();
        let chunks = chunk_graphemes(&text, size).unwrap();
        if let Some((last, full)) = chunks.split_last() {
            // Each chunk must itself segment into whole clusters within the
            // size bound; a split cluster would change the cluster count.
            for chunk in full {
                prop_assert_eq!(segmenter.segment(chunk).len(), size);
            }
            let last_len = segmenter.segment(last).len();
            prop_assert!(last_len >= 1 && last_len <= size);
        }
    }
}
