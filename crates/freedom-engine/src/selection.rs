use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one entry out of a fixed, non-empty template list.
pub trait TemplateSelector {
    fn select(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by any [`Rng`]; seed it for reproducible output.
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> TemplateSelector for RandomSelector<R> {
    fn select(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same slot, wrapping when the list is shorter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0 % len
    }
}

/// Walks the template list in order, one step per call.
#[derive(Debug, Clone, Default)]
pub struct CyclingSelector {
    next: usize,
}

impl TemplateSelector for CyclingSelector {
    fn select(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = self.next % len;
        self.next = self.next.wrapping_add(1);
        index
    }
}
