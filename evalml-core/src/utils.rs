pub trait AsInner<T>: Sized {
    fn as_inner(&self) -> Option<&T>;
    fn as_inner_mut(&mut self) -> Option<&mut T>;
}
