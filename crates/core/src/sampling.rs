use rand::Rng;

/// Uniform pick from a non-empty pool.
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.gen_range(0..items.len())]
}

/// Draws up to `count` distinct entries by removing random indices from a working copy.
pub fn pick_unique<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = items.to_vec();
    let mut selection = Vec::with_capacity(count.min(pool.len()));
    while selection.len() < count && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        selection.push(pool.remove(index));
    }
    selection
}
