use std::collections::BTreeSet;

/// Banner slots within each block of 100 output positions (1-based).
const BASE_PATTERN: [usize; 10] = [6, 15, 26, 38, 50, 58, 70, 80, 88, 97];
const CENTURY: usize = 100;

/// Below this many content items a single banner is appended at the end.
const MIN_CONTENT_FOR_PATTERN: usize = 5;

/// Anything that can key a grid entry.
pub trait Identified {
    fn identity(&self) -> String;
}

/// One entry of an interleaved grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<C, P> {
    Content(C),
    /// `position` is the 1-based index of the banner in the merged grid.
    Banner { position: usize, promo: P },
}

impl<C: Identified, P: Identified> Slot<C, P> {
    /// Stable key for the entry. Banners fold in their position so a promo
    /// repeated by round-robin never collides with itself.
    pub fn key(&self) -> String {
        match self {
            Slot::Content(item) => item.identity(),
            Slot::Banner { position, promo } => {
                format!("banner-{}-{}", position, promo.identity())
            }
        }
    }
}

/// Positions that receive a banner for a grid of `content_len` items.
///
/// Candidates are bounded by the content length, not by the merged length.
pub fn banner_positions(content_len: usize) -> BTreeSet<usize> {
    let centuries = content_len.div_ceil(CENTURY);
    (0..centuries)
        .flat_map(|k| BASE_PATTERN.iter().map(move |p| p + CENTURY * k))
        .filter(|&position| position <= content_len)
        .collect()
}

/// Merge `promos` into `content` as banners.
///
/// - no promos: `content` as-is
/// - fewer than five content items: `content` followed by one banner of `promos[0]`
/// - otherwise banners land on [`banner_positions`], cycling through `promos`
pub fn interleave<C: Clone, P: Clone>(content: &[C], promos: &[P]) -> Vec<Slot<C, P>> {
    let Some(first_promo) = promos.first() else {
        return content.iter().cloned().map(Slot::Content).collect();
    };

    if content.len() < MIN_CONTENT_FOR_PATTERN {
        let mut grid: Vec<Slot<C, P>> = content.iter().cloned().map(Slot::Content).collect();
        grid.push(Slot::Banner {
            position: content.len() + 1,
            promo: first_promo.clone(),
        });
        return grid;
    }

    let positions = banner_positions(content.len());
    let mut grid = Vec::with_capacity(content.len() + positions.len());
    let mut position = 1;
    let mut content_index = 0;
    let mut banner_index = 0;

    while content_index < content.len() || positions.contains(&position) {
        if positions.contains(&position) {
            grid.push(Slot::Banner {
                position,
                promo: promos[banner_index % promos.len()].clone(),
            });
            banner_index += 1;
        } else {
            grid.push(Slot::Content(content[content_index].clone()));
            content_index += 1;
        }
        position += 1;
    }

    grid
}
