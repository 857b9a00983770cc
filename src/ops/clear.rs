use crate::Optional;

pub trait Clear {
    fn clear(&mut self);
}
impl<T> Clear for Optional<T> {
    fn clear(&mut self) {
        self.reset();
    }
}
