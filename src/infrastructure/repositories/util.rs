/// Hands out 1-based ids. Clearing a repository does not rewind it, so an id
/// never names two different rows over the repository's lifetime.
#[derive(Debug, Default)]
pub(super) struct IdSequence {
    last: i64,
}

impl IdSequence {
    pub(super) const fn allocate(&mut self) -> i64 {
        self.last += 1;
        self.last
    }
}
