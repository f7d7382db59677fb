use rand::Rng;

/// How the first generation of a row is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// A single live cell at the midpoint, `len / 2`
    #[default]
    Single,
    Random,
    Alternating,
    All,
    Empty,
}
impl Seed {
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "single" => Some(Self::Single),
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: Rng>(&self, i: usize, len: usize, rng: &mut R) -> u8 {
        let alive = match self {
            Self::Single => i == len / 2,
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => i % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        };
        u8::from(alive)
    }

    pub fn create_row(self, len: usize) -> Vec<u8> {
        self.create_row_with(len, &mut rand::rng())
    }

    pub fn create_row_with<R: Rng>(self, len: usize, rng: &mut R) -> Vec<u8> {
        (0..len).map(|i| self.fill_cell(i, len, rng)).collect()
    }
}
