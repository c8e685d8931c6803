//! Photo Assets Module
//! Ordered lookup table from building rank to its photo URL.

/// Photo URLs indexed by sorted rank (rank 1 is `RANK_IMAGE_URLS[0]`).
pub const RANK_IMAGE_URLS: [&str; 10] = [
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/1.jpg?v=1664476301830",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/2.jpg?v=1664476301987",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/3.jpg?v=1664502841469",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/4.jpg?v=1664502841119",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/5.jpg?v=1664502841998",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/6.jpg?v=1664502841320",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/7.jpg?v=1664502841596",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/8.jpg?v=1664502841715",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/9.jpg?v=1664502841766",
    "https://cdn.glitch.global/de454803-9192-492d-b68e-82ab18c80f86/10.jpg?v=1664502841876",
];

/// Photo URL for a 1-based rank. Ranks outside the table have no photo.
pub fn image_url_for_rank(rank: usize) -> Option<&'static str> {
    if rank >= 1 && rank <= RANK_IMAGE_URLS.len() {
        Some(RANK_IMAGE_URLS[rank - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_one_through_ten_have_photos() {
        assert_eq!(image_url_for_rank(1), Some(RANK_IMAGE_URLS[0]));
        assert_eq!(image_url_for_rank(10), Some(RANK_IMAGE_URLS[9]));
        for rank in 1..=10 {
            let url = image_url_for_rank(rank).unwrap();
            assert!(url.contains(&format!("/{}.jpg", rank)));
        }
    }

    #[test]
    fn ranks_outside_the_table_have_none() {
        assert_eq!(image_url_for_rank(0), None);
        assert_eq!(image_url_for_rank(11), None);
    }
}
